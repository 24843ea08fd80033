//! Set validity for a single triple.
//!
//! A triple is a Set when, for every feature, the three values are all the
//! same or all different. With feature indices in 0..=2 this is equivalent
//! to the three indices summing to a multiple of 3, which is what
//! `features_form_set` checks.

use tracing::trace;

use crate::cards::{Card, Feature};
use crate::core::{Result, SetError};

/// Check whether three cards form a Set.
///
/// Fails with `DegenerateTriple` if any two of the cards are equal: a card
/// cannot be paired with itself. The result does not depend on argument order.
///
/// ```
/// use set_finder::cards::Card;
/// use set_finder::rules::is_set;
///
/// let a: Card = "1RSO".parse().unwrap();
/// let b: Card = "2RSO".parse().unwrap();
/// let c: Card = "3RSO".parse().unwrap();
/// assert!(is_set(&a, &b, &c).unwrap());
/// ```
pub fn is_set(a: &Card, b: &Card, c: &Card) -> Result<bool> {
    if a == b || b == c || a == c {
        trace!(a = %a, b = %b, c = %c, "rejected degenerate triple");
        return Err(SetError::DegenerateTriple);
    }
    Ok(features_form_set(a, b, c))
}

/// Per-feature check without the distinctness requirement.
///
/// Three copies of the same card pass this check.
#[must_use]
pub(crate) fn features_form_set(a: &Card, b: &Card, c: &Card) -> bool {
    a.features()
        .iter()
        .zip(b.features())
        .zip(c.features())
        .all(|((&x, y), z)| (x + y + z) % 3 == 0)
}

/// The unique card that completes a Set with `a` and `b`.
///
/// Each feature takes the shared value if `a` and `b` agree, otherwise the
/// one value neither of them has.
pub fn completing_card(a: &Card, b: &Card) -> Result<Card> {
    if a == b {
        return Err(SetError::DegenerateTriple);
    }
    Ok(complete_pair(a, b))
}

pub(crate) fn complete_pair(a: &Card, b: &Card) -> Card {
    Card::new(
        a.number().complete(b.number()),
        a.shape().complete(b.shape()),
        a.shading().complete(b.shading()),
        a.color().complete(b.color()),
    )
}
