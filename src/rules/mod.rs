//! Set rules: validity of a triple and enumeration over collections.
//!
//! Everything here is a pure function of its inputs.

pub mod evaluator;
pub mod finder;

pub use evaluator::{completing_card, is_set};
pub use finder::{
    count_sets, find_sets, has_set, CompletionSearch, ExhaustiveSearch, SetFinder, SetSearch,
    SetTriple,
};
