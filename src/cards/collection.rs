//! Ordered card container.
//!
//! `CardCollection` keeps cards in insertion order and allows duplicates.
//! It is backed by an `im` persistent vector, so a board can be cloned
//! cheaply before cards are taken from it.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::card::Card;
use crate::core::Result;

/// An ordered sequence of cards (a board, a hand, a pile).
///
/// No duplicate detection is done here; callers that need distinct cards
/// enforce it themselves.
///
/// ## Example
///
/// ```
/// use set_finder::cards::{Card, CardCollection};
///
/// let mut board = CardCollection::new();
/// board.add(Card::from_identifier("1RSO").unwrap());
/// board.add(Card::from_identifier("2RSO").unwrap());
/// assert_eq!(board.len(), 2);
///
/// assert!(board.remove(&Card::from_identifier("1RSO").unwrap()));
/// assert_eq!(board.len(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardCollection {
    cards: Vector<Card>,
}

impl CardCollection {
    /// Create an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a list of identifiers into a collection, in order.
    ///
    /// Fails on the first malformed identifier.
    pub fn from_identifiers<I, S>(identifiers: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        identifiers
            .into_iter()
            .map(|id| Card::from_identifier(id.as_ref()))
            .collect()
    }

    /// Append a card.
    pub fn add(&mut self, card: Card) {
        self.cards.push_back(card);
    }

    /// Remove the first card equal to `card`.
    ///
    /// Returns `false` if no such card is present.
    pub fn remove(&mut self, card: &Card) -> bool {
        match self.position(card) {
            Some(index) => {
                self.cards.remove(index);
                true
            }
            None => false,
        }
    }

    /// Remove and return the card at `index`.
    pub fn remove_at(&mut self, index: usize) -> Option<Card> {
        (index < self.cards.len()).then(|| self.cards.remove(index))
    }

    /// Remove and return the first `count` cards (fewer if the collection is shorter).
    pub fn take_front(&mut self, count: usize) -> CardCollection {
        let count = count.min(self.cards.len());
        let rest = self.cards.split_off(count);
        let front = std::mem::replace(&mut self.cards, rest);
        Self { cards: front }
    }

    /// Index of the first card equal to `card`.
    #[must_use]
    pub fn position(&self, card: &Card) -> Option<usize> {
        self.cards.index_of(card)
    }

    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Identifiers of all cards, in order.
    #[must_use]
    pub fn identifiers(&self) -> Vec<String> {
        self.cards.iter().map(Card::to_identifier).collect()
    }
}

impl FromIterator<Card> for CardCollection {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

impl Extend<Card> for CardCollection {
    fn extend<I: IntoIterator<Item = Card>>(&mut self, iter: I) {
        self.cards.extend(iter);
    }
}

impl<'a> IntoIterator for &'a CardCollection {
    type Item = &'a Card;
    type IntoIter = im::vector::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

impl std::ops::Index<usize> for CardCollection {
    type Output = Card;

    fn index(&self, index: usize) -> &Self::Output {
        &self.cards[index]
    }
}

impl std::fmt::Display for CardCollection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} cards: [{}]", self.len(), self.identifiers().join(", "))
    }
}
