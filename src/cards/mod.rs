//! Card model: features, cards, collections and the deck.
//!
//! ## Key Types
//!
//! - `Number`, `Shape`, `Shading`, `Color`: closed 3-value feature domains
//! - `Card`: immutable value of four features with a 4-character identifier
//! - `CardCollection`: ordered container, duplicates allowed
//! - `Deck`: the 81 distinct cards, shuffled and dealt

pub mod card;
pub mod collection;
pub mod deck;
pub mod features;

pub use card::{Card, IDENTIFIER_LEN};
pub use collection::CardCollection;
pub use deck::{all_cards, all_identifiers, Deck, DECK_SIZE};
pub use features::{Color, Feature, FeatureKind, Number, Shading, Shape};
