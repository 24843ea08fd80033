//! Finder configuration parameters.

use serde::{Deserialize, Serialize};

use super::error::{Result, SetError};
use crate::cards::DECK_SIZE;

/// Number of cards dealt face up in the standard game.
pub const DEFAULT_BOARD_SIZE: usize = 12;

/// Algorithm used to enumerate Sets in a collection.
///
/// Both strategies return the same triples in the same order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchStrategy {
    /// Check every 3-combination, O(n³).
    Exhaustive,
    /// Compute the completing card of every pair and look it up, O(n²).
    #[default]
    Completion,
}

impl std::fmt::Display for SearchStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchStrategy::Exhaustive => write!(f, "exhaustive"),
            SearchStrategy::Completion => write!(f, "completion"),
        }
    }
}

impl std::str::FromStr for SearchStrategy {
    type Err = SetError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "exhaustive" => Ok(SearchStrategy::Exhaustive),
            "completion" => Ok(SearchStrategy::Completion),
            other => Err(SetError::InvalidConfig {
                message: format!("unknown search strategy {other:?}"),
            }),
        }
    }
}

/// Finder configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinderConfig {
    /// Search algorithm (default: completion lookup).
    pub strategy: SearchStrategy,

    /// Seed for shuffling the deck.
    /// Same seed deals the same board.
    pub seed: u64,

    /// Cards dealt when building a board (default: 12).
    /// Must not exceed the 81-card deck.
    pub board_size: usize,
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            strategy: SearchStrategy::default(),
            seed: 42,
            board_size: DEFAULT_BOARD_SIZE,
        }
    }
}

impl FinderConfig {
    /// Create a new config with a custom search strategy.
    pub fn with_strategy(mut self, strategy: SearchStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Create a new config with custom seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Create a new config with a custom board size.
    pub fn with_board_size(mut self, board_size: usize) -> Self {
        self.board_size = board_size;
        self
    }

    /// Check that every value can be honoured.
    pub fn validate(&self) -> Result<()> {
        if self.board_size > DECK_SIZE {
            return Err(SetError::InvalidConfig {
                message: format!(
                    "board size {} exceeds the {DECK_SIZE}-card deck",
                    self.board_size
                ),
            });
        }
        Ok(())
    }
}
