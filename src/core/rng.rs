//! Deterministic shuffling for dealing boards.
//!
//! Same seed deals the same board on every platform.
//!
//! ```
//! use set_finder::core::DeckRng;
//!
//! let mut rng = DeckRng::new(7);
//! let mut cards: Vec<u32> = (0..81).collect();
//! rng.shuffle(&mut cards);
//!
//! let mut again = DeckRng::new(7);
//! let mut same: Vec<u32> = (0..81).collect();
//! again.shuffle(&mut same);
//!
//! assert_eq!(cards, same);
//! ```

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Seeded RNG used to shuffle decks.
///
/// Uses ChaCha8 for speed with reproducible output across platforms.
#[derive(Clone, Debug)]
pub struct DeckRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl DeckRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Seed this RNG was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shuffled(seed: u64) -> Vec<u32> {
        let mut cards: Vec<u32> = (0..81).collect();
        DeckRng::new(seed).shuffle(&mut cards);
        cards
    }

    #[test]
    fn test_same_seed_same_order() {
        assert_eq!(shuffled(42), shuffled(42));
        assert_eq!(DeckRng::new(42).seed(), 42);
    }

    #[test]
    fn test_different_seeds_differ() {
        assert_ne!(shuffled(1), shuffled(2));
    }

    #[test]
    fn test_shuffle_keeps_every_card() {
        let mut cards = shuffled(9);
        assert_ne!(cards, (0..81).collect::<Vec<u32>>());

        cards.sort_unstable();
        assert_eq!(cards, (0..81).collect::<Vec<u32>>());
    }

    #[test]
    fn test_successive_shuffles_advance() {
        let mut rng = DeckRng::new(5);
        let mut first: Vec<u32> = (0..81).collect();
        let mut second = first.clone();
        rng.shuffle(&mut first);
        rng.shuffle(&mut second);
        assert_ne!(first, second);
    }
}
