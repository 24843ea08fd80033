//! # set-finder
//!
//! Card model and Set-finding logic for the card game Set.
//!
//! ## Design Principles
//!
//! 1. **Closed Domains**: Each feature is an enum of exactly three values
//!    with one code table. Invalid cards cannot be represented.
//!
//! 2. **Pure Evaluation**: `is_set` and `find_sets` have no I/O, no
//!    randomness and no global state.
//!
//! 3. **Deterministic Output**: Sets are reported in lexicographic order of
//!    their positions, whichever search strategy is used.
//!
//! ## Identifier Schema
//!
//! A card's identifier is four characters: number, color, shading, shape.
//! `1RSO` is one red solid oval. See `cards::features` for the code table.
//!
//! ## Modules
//!
//! - `core`: Errors, configuration, deterministic RNG
//! - `cards`: Features, cards, collections, the 81-card deck
//! - `rules`: Set validity and enumeration

pub mod cards;
pub mod core;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{DeckRng, FinderConfig, SearchStrategy, SetError};

pub use crate::cards::{
    Card, CardCollection, Color, Deck, Feature, FeatureKind, Number, Shading, Shape, DECK_SIZE,
};

pub use crate::rules::{
    completing_card, count_sets, find_sets, has_set, is_set, CompletionSearch, ExhaustiveSearch,
    SetFinder, SetSearch, SetTriple,
};
