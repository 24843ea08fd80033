//! The `Card` value type and its canonical identifier.
//!
//! A card is four features. Its identifier is four characters in the order
//! number, color, shading, shape, for example `1RSO` (one red solid oval) or
//! `3PTD` (three purple striped diamonds). Dataset images are named after
//! this identifier, optionally followed by `_<tag>` for augmented copies.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::features::{Color, Feature, Number, Shading, Shape};
use crate::core::{Result, SetError};

/// Length of a canonical identifier in characters.
pub const IDENTIFIER_LEN: usize = 4;

/// One physical card.
///
/// Cards are plain values: two cards are equal iff all four features match.
/// Ordering follows (number, shape, shading, color), which is the order the
/// full deck is generated in.
///
/// ## Example
///
/// ```
/// use set_finder::cards::{Card, Color, Number, Shading, Shape};
///
/// let card = Card::new(Number::One, Shape::Oval, Shading::Solid, Color::Red);
/// assert_eq!(card.to_identifier(), "1RSO");
/// assert_eq!(Card::from_identifier("1RSO").unwrap(), card);
/// assert_eq!(card.to_string(), "1-red-solid-oval");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Card {
    number: Number,
    shape: Shape,
    shading: Shading,
    color: Color,
}

impl Card {
    /// Create a card from typed feature values.
    #[must_use]
    pub const fn new(number: Number, shape: Shape, shading: Shading, color: Color) -> Self {
        Self {
            number,
            shape,
            shading,
            color,
        }
    }

    /// Create a card from raw values, validating each against its domain.
    ///
    /// Names are matched ignoring ASCII case.
    pub fn from_values(number: u8, shape: &str, shading: &str, color: &str) -> Result<Self> {
        Ok(Self::new(
            Number::try_from(number)?,
            shape.parse()?,
            shading.parse()?,
            color.parse()?,
        ))
    }

    #[must_use]
    pub const fn number(&self) -> Number {
        self.number
    }

    #[must_use]
    pub const fn shape(&self) -> Shape {
        self.shape
    }

    #[must_use]
    pub const fn shading(&self) -> Shading {
        self.shading
    }

    #[must_use]
    pub const fn color(&self) -> Color {
        self.color
    }

    /// Feature indices in (number, shape, shading, color) order.
    #[must_use]
    pub fn features(&self) -> [u8; 4] {
        [
            self.number.index(),
            self.shape.index(),
            self.shading.index(),
            self.color.index(),
        ]
    }

    /// Position of this card in the canonical 81-card deck order.
    #[must_use]
    pub fn ordinal(&self) -> usize {
        self.features()
            .iter()
            .fold(0, |acc, &index| acc * 3 + usize::from(index))
    }

    /// Card at `ordinal` in the canonical deck order.
    #[must_use]
    pub fn from_ordinal(ordinal: usize) -> Option<Self> {
        if ordinal >= 81 {
            return None;
        }
        let digit = |place: usize| ((ordinal / place) % 3) as u8;
        Some(Self::new(
            Number::ALL[usize::from(digit(27))],
            Shape::ALL[usize::from(digit(9))],
            Shading::ALL[usize::from(digit(3))],
            Color::ALL[usize::from(digit(1))],
        ))
    }

    /// Canonical 4-character identifier.
    #[must_use]
    pub fn to_identifier(&self) -> String {
        [
            self.number.code(),
            self.color.code(),
            self.shading.code(),
            self.shape.code(),
        ]
        .iter()
        .collect()
    }

    /// Parse a canonical identifier.
    ///
    /// Codes are upper-case only; anything else is rejected.
    pub fn from_identifier(identifier: &str) -> Result<Self> {
        let chars: Vec<char> = identifier.chars().collect();
        if chars.len() != IDENTIFIER_LEN {
            return Err(SetError::malformed(
                identifier,
                format!("expected {IDENTIFIER_LEN} characters, found {}", chars.len()),
            ));
        }

        fn decode<F: Feature>(identifier: &str, code: char) -> Result<F> {
            F::from_code(code).ok_or_else(|| {
                SetError::malformed(identifier, format!("unknown {} code {code:?}", F::KIND))
            })
        }

        Ok(Self::new(
            decode(identifier, chars[0])?,
            decode(identifier, chars[3])?,
            decode(identifier, chars[2])?,
            decode(identifier, chars[1])?,
        ))
    }

    /// Decode the card a dataset image was named after.
    ///
    /// Accepts a bare file name or a path. The extension and anything from
    /// the first `_` on are ignored, so `data/aug/1RSO_5f1c.jpg` and
    /// `1RSO.png` both decode to one red solid oval.
    pub fn from_file_name(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| {
                SetError::malformed(&path.to_string_lossy(), "no usable file name")
            })?;
        let identifier = stem.split('_').next().unwrap_or(stem);
        Self::from_identifier(identifier)
    }

    /// Long hyphenated name: `number-color-shading-shape`.
    #[must_use]
    pub fn long_name(&self) -> String {
        format!(
            "{}-{}-{}-{}",
            self.number.name(),
            self.color.name(),
            self.shading.name(),
            self.shape.name()
        )
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.long_name())
    }
}

impl std::str::FromStr for Card {
    type Err = SetError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_identifier(s)
    }
}
