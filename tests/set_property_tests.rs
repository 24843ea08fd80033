//! Property tests for the card model and the Set evaluator.
//!
//! Cards are generated from their ordinal (0..81), so every strategy
//! covers the whole card space.

use proptest::prelude::*;

use set_finder::cards::{Card, CardCollection, DECK_SIZE};
use set_finder::core::{FinderConfig, SearchStrategy};
use set_finder::rules::{completing_card, is_set, SetFinder};

fn any_card() -> impl Strategy<Value = Card> {
    (0..DECK_SIZE).prop_map(|ordinal| Card::from_ordinal(ordinal).unwrap())
}

fn distinct_pair() -> impl Strategy<Value = (Card, Card)> {
    (any_card(), any_card()).prop_filter("cards must differ", |(a, b)| a != b)
}

fn distinct_triple() -> impl Strategy<Value = (Card, Card, Card)> {
    (any_card(), any_card(), any_card())
        .prop_filter("cards must differ", |(a, b, c)| a != b && b != c && a != c)
}

// =============================================================================
// Identifier Properties
// =============================================================================

proptest! {
    #[test]
    fn identifier_roundtrip(card in any_card()) {
        let id = card.to_identifier();
        prop_assert_eq!(id.len(), 4);
        prop_assert_eq!(Card::from_identifier(&id), Ok(card));
    }

    #[test]
    fn file_name_roundtrip(card in any_card(), tag in "[a-f0-9]{8}") {
        let name = format!("data/aug/{}_{}.jpg", card.to_identifier(), tag);
        prop_assert_eq!(Card::from_file_name(&name), Ok(card));
    }

    #[test]
    fn arbitrary_strings_never_panic(s in "\\PC{0,8}") {
        if let Ok(card) = Card::from_identifier(&s) {
            prop_assert_eq!(card.to_identifier(), s);
        }
    }
}

// =============================================================================
// Evaluator Properties
// =============================================================================

proptest! {
    #[test]
    fn is_set_is_symmetric((a, b, c) in distinct_triple()) {
        let expected = is_set(&a, &b, &c).unwrap();
        for (x, y, z) in [(a, c, b), (b, a, c), (b, c, a), (c, a, b), (c, b, a)] {
            prop_assert_eq!(is_set(&x, &y, &z), Ok(expected));
        }
    }

    #[test]
    fn completing_card_is_unique((a, b) in distinct_pair()) {
        let c = completing_card(&a, &b).unwrap();
        prop_assert_ne!(c, a);
        prop_assert_ne!(c, b);

        let completions: Vec<Card> = (0..DECK_SIZE)
            .filter_map(Card::from_ordinal)
            .filter(|&x| x != a && x != b)
            .filter(|x| is_set(&a, &b, x).unwrap())
            .collect();
        prop_assert_eq!(completions, vec![c]);
    }

    #[test]
    fn strategies_agree(ordinals in prop::collection::vec(0..DECK_SIZE, 0..24)) {
        let collection: CardCollection = ordinals
            .into_iter()
            .filter_map(Card::from_ordinal)
            .collect();

        let exhaustive = SetFinder::new(
            FinderConfig::default().with_strategy(SearchStrategy::Exhaustive),
        )
        .find_sets(&collection);
        let completion = SetFinder::new(
            FinderConfig::default().with_strategy(SearchStrategy::Completion),
        )
        .find_sets(&collection);

        prop_assert_eq!(&exhaustive, &completion);

        for window in exhaustive.windows(2) {
            prop_assert!(window[0].indices < window[1].indices);
        }
        for set in &exhaustive {
            let [i, j, k] = set.indices;
            prop_assert!(i < j && j < k);
            prop_assert_eq!(is_set(&collection[i], &collection[j], &collection[k]), Ok(true));
        }
    }
}
