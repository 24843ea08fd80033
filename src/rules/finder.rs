//! Enumerating every Set in a collection.
//!
//! Search is trait-based so the algorithm can be swapped:
//! - `ExhaustiveSearch`: every 3-combination, O(n³)
//! - `CompletionSearch`: completing-card lookup per pair, O(n²)
//!
//! Both report the same triples in the same order: lexicographic on the
//! index tuple `(i, j, k)` with `i < j < k`. Combinations that repeat a card
//! are never Sets and are skipped without error.

use std::ops::ControlFlow;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::debug;

use super::evaluator::{complete_pair, features_form_set};
use crate::cards::{Card, CardCollection};
use crate::core::{FinderConfig, SearchStrategy};

/// A Set found in a collection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SetTriple {
    /// Positions in the searched collection, ascending.
    pub indices: [usize; 3],
    /// The cards at those positions.
    pub cards: [Card; 3],
}

impl SetTriple {
    fn new(cards: &[Card], i: usize, j: usize, k: usize) -> Self {
        Self {
            indices: [i, j, k],
            cards: [cards[i], cards[j], cards[k]],
        }
    }

    /// Identifiers of the three cards.
    #[must_use]
    pub fn identifiers(&self) -> [String; 3] {
        self.cards.map(|card| card.to_identifier())
    }
}

impl std::fmt::Display for SetTriple {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [a, b, c] = &self.cards;
        write!(f, "({a}, {b}, {c})")
    }
}

// =============================================================================
// Search Strategies
// =============================================================================

/// Algorithm for enumerating Sets.
///
/// Strategies hand each Set to `visit` in lexicographic index order and stop
/// as soon as it returns `ControlFlow::Break`.
pub trait SetSearch {
    /// Walk the Sets in `cards` until `visit` breaks.
    fn walk(&self, cards: &[Card], visit: &mut dyn FnMut(SetTriple) -> ControlFlow<()>);

    /// All Sets in `cards`, in lexicographic index order.
    fn find(&self, cards: &[Card]) -> Vec<SetTriple> {
        let mut found = Vec::new();
        self.walk(cards, &mut |triple: SetTriple| {
            found.push(triple);
            ControlFlow::Continue(())
        });
        found
    }

    /// The first Set in lexicographic index order, if any.
    fn first(&self, cards: &[Card]) -> Option<SetTriple> {
        let mut first = None;
        self.walk(cards, &mut |triple: SetTriple| {
            first = Some(triple);
            ControlFlow::Break(())
        });
        first
    }
}

/// Checks every 3-combination.
#[derive(Clone, Debug, Default)]
pub struct ExhaustiveSearch;

impl SetSearch for ExhaustiveSearch {
    fn walk(&self, cards: &[Card], visit: &mut dyn FnMut(SetTriple) -> ControlFlow<()>) {
        let n = cards.len();

        for i in 0..n {
            for j in (i + 1)..n {
                if cards[i] == cards[j] {
                    continue;
                }
                for k in (j + 1)..n {
                    if features_form_set(&cards[i], &cards[j], &cards[k])
                        && visit(SetTriple::new(cards, i, j, k)).is_break()
                    {
                        return;
                    }
                }
            }
        }
    }
}

/// Looks up the completing card of every pair.
///
/// The third card of a Set is determined by the other two, so only pairs
/// need to be enumerated. A card may occur at several positions; each later
/// occurrence yields its own triple.
#[derive(Clone, Debug, Default)]
pub struct CompletionSearch;

impl SetSearch for CompletionSearch {
    fn walk(&self, cards: &[Card], visit: &mut dyn FnMut(SetTriple) -> ControlFlow<()>) {
        let mut positions: FxHashMap<Card, SmallVec<[usize; 2]>> = FxHashMap::default();
        for (index, card) in cards.iter().enumerate() {
            positions.entry(*card).or_default().push(index);
        }

        let n = cards.len();

        for i in 0..n {
            for j in (i + 1)..n {
                if cards[i] == cards[j] {
                    continue;
                }
                let third = complete_pair(&cards[i], &cards[j]);
                let Some(ks) = positions.get(&third) else {
                    continue;
                };
                for &k in ks.iter().filter(|&&k| k > j) {
                    if visit(SetTriple::new(cards, i, j, k)).is_break() {
                        return;
                    }
                }
            }
        }
    }
}

// =============================================================================
// Finder
// =============================================================================

/// Finds Sets using the configured strategy.
///
/// ## Example
///
/// ```
/// use set_finder::cards::CardCollection;
/// use set_finder::core::{FinderConfig, SearchStrategy};
/// use set_finder::rules::SetFinder;
///
/// let board = CardCollection::from_identifiers(["1RSO", "2RSO", "3RSO", "1GTD"]).unwrap();
/// let finder = SetFinder::new(FinderConfig::default().with_strategy(SearchStrategy::Exhaustive));
///
/// let sets = finder.find_sets(&board);
/// assert_eq!(sets.len(), 1);
/// assert_eq!(sets[0].indices, [0, 1, 2]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct SetFinder {
    config: FinderConfig,
}

impl SetFinder {
    #[must_use]
    pub fn new(config: FinderConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &FinderConfig {
        &self.config
    }

    fn search(&self) -> &dyn SetSearch {
        match self.config.strategy {
            SearchStrategy::Exhaustive => &ExhaustiveSearch,
            SearchStrategy::Completion => &CompletionSearch,
        }
    }

    /// All Sets in `collection`, in lexicographic index order.
    pub fn find_sets(&self, collection: &CardCollection) -> Vec<SetTriple> {
        let cards: Vec<Card> = collection.iter().copied().collect();
        let found = self.search().find(&cards);
        debug!(
            strategy = %self.config.strategy,
            cards = cards.len(),
            sets = found.len(),
            "searched collection for sets"
        );
        found
    }

    /// The first Set of `collection` in lexicographic index order.
    ///
    /// Stops searching at the first hit.
    pub fn first_set(&self, collection: &CardCollection) -> Option<SetTriple> {
        let cards: Vec<Card> = collection.iter().copied().collect();
        self.search().first(&cards)
    }

    /// Number of Sets in `collection`.
    pub fn count_sets(&self, collection: &CardCollection) -> usize {
        self.find_sets(collection).len()
    }

    /// Whether `collection` contains at least one Set.
    ///
    /// Stops searching at the first hit.
    pub fn has_set(&self, collection: &CardCollection) -> bool {
        self.first_set(collection).is_some()
    }
}

/// All Sets in `collection` using the default strategy.
pub fn find_sets(collection: &CardCollection) -> Vec<SetTriple> {
    SetFinder::default().find_sets(collection)
}

/// Number of Sets in `collection` using the default strategy.
pub fn count_sets(collection: &CardCollection) -> usize {
    SetFinder::default().count_sets(collection)
}

/// Whether `collection` contains at least one Set.
pub fn has_set(collection: &CardCollection) -> bool {
    SetFinder::default().has_set(collection)
}
