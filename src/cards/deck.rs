//! The full 81-card deck, shuffling and dealing.

use tracing::debug;

use super::card::Card;
use super::collection::CardCollection;
use crate::core::{DeckRng, FinderConfig, Result};

/// Number of distinct cards: 3 values for each of 4 features.
pub const DECK_SIZE: usize = 81;

/// Every card exactly once, in canonical order.
///
/// Canonical order nests number, shape, shading, color (color varies
/// fastest), matching `Card::ordinal`.
pub fn all_cards() -> impl Iterator<Item = Card> {
    (0..DECK_SIZE).filter_map(Card::from_ordinal)
}

/// Every canonical identifier, in deck order.
#[must_use]
pub fn all_identifiers() -> Vec<String> {
    all_cards().map(|card| card.to_identifier()).collect()
}

/// A draw pile.
///
/// Cards are dealt from the front.
///
/// ## Example
///
/// ```
/// use set_finder::cards::Deck;
/// use set_finder::core::DeckRng;
///
/// let mut deck = Deck::full();
/// deck.shuffle(&mut DeckRng::new(42));
///
/// let board = deck.deal(12);
/// assert_eq!(board.len(), 12);
/// assert_eq!(deck.remaining(), 69);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deck {
    cards: CardCollection,
}

impl Deck {
    /// All 81 cards in canonical order.
    #[must_use]
    pub fn full() -> Self {
        Self {
            cards: all_cards().collect(),
        }
    }

    /// Shuffle the remaining cards in place.
    pub fn shuffle(&mut self, rng: &mut DeckRng) {
        let mut cards: Vec<Card> = self.cards.iter().copied().collect();
        rng.shuffle(&mut cards);
        self.cards = cards.into_iter().collect();
    }

    /// Deal up to `count` cards from the top.
    pub fn deal(&mut self, count: usize) -> CardCollection {
        let dealt = self.cards.take_front(count);
        debug!(dealt = dealt.len(), remaining = self.remaining(), "dealt cards");
        dealt
    }

    /// Shuffle a fresh deck with the configured seed and deal a board.
    pub fn deal_board(config: &FinderConfig) -> Result<(CardCollection, Deck)> {
        config.validate()?;

        let mut deck = Self::full();
        deck.shuffle(&mut DeckRng::new(config.seed));
        let board = deck.deal(config.board_size);
        Ok((board, deck))
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards still in the pile, top first.
    #[must_use]
    pub fn cards(&self) -> &CardCollection {
        &self.cards
    }
}
