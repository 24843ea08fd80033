//! Core types: errors, configuration and deterministic RNG.
//!
//! These are shared by the card model and the evaluator and carry no
//! game rules of their own.

pub mod config;
pub mod error;
pub mod rng;

pub use config::{FinderConfig, SearchStrategy, DEFAULT_BOARD_SIZE};
pub use error::{Result, SetError};
pub use rng::DeckRng;
