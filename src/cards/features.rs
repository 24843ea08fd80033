//! The four card features and their closed 3-value domains.
//!
//! Every feature value has a fixed index (0, 1 or 2), a full lower-case name
//! and a single-character code. The code table below is the only place the
//! identifier alphabet is defined:
//!
//! | Feature | Index 0 | Index 1 | Index 2 |
//! |---------|---------|---------|---------|
//! | number  | `1`     | `2`     | `3`     |
//! | shape   | `D` diamond | `S` squiggle | `O` oval |
//! | shading | `S` solid | `T` striped | `O` open |
//! | color   | `R` red | `G` green | `P` purple |
//!
//! Because each domain has exactly three values, three values of one feature
//! are "all same or all different" exactly when their indices sum to a
//! multiple of 3. The evaluator relies on that.

use serde::{Deserialize, Serialize};

use crate::core::{Result, SetError};

/// Which of the four features a value belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeatureKind {
    Number,
    Shape,
    Shading,
    Color,
}

impl std::fmt::Display for FeatureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            FeatureKind::Number => "number",
            FeatureKind::Shape => "shape",
            FeatureKind::Shading => "shading",
            FeatureKind::Color => "color",
        };
        write!(f, "{name}")
    }
}

/// Common interface of the four feature enums.
pub trait Feature: Copy + Eq + Sized + 'static {
    /// Which feature this is.
    const KIND: FeatureKind;

    /// All values in index order.
    const ALL: [Self; 3];

    /// Position of this value in its domain (0..=2).
    fn index(self) -> u8;

    /// Identifier code character.
    fn code(self) -> char;

    /// Full lower-case name.
    fn name(self) -> &'static str;

    /// Value for an identifier code character.
    fn from_code(code: char) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.code() == code)
    }

    /// Value for a full name, ignoring ASCII case.
    fn from_name(name: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|v| v.name().eq_ignore_ascii_case(name.trim()))
            .ok_or_else(|| SetError::invalid_feature(Self::KIND, name))
    }

    /// The value that makes `self`, `other` and the result all same or all
    /// different.
    #[must_use]
    fn complete(self, other: Self) -> Self {
        let third = (2 * (self.index() + other.index())) % 3;
        Self::ALL[usize::from(third)]
    }
}

macro_rules! feature_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:expr,
        $( $variant:ident => ($code:literal, $text:literal) ),+ $(,)?
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "lowercase")]
        pub enum $name {
            $( $variant ),+
        }

        impl Feature for $name {
            const KIND: FeatureKind = $kind;
            const ALL: [Self; 3] = [$( $name::$variant ),+];

            fn index(self) -> u8 {
                self as u8
            }

            fn code(self) -> char {
                match self {
                    $( $name::$variant => $code ),+
                }
            }

            fn name(self) -> &'static str {
                match self {
                    $( $name::$variant => $text ),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.name())
            }
        }

        impl std::str::FromStr for $name {
            type Err = SetError;

            fn from_str(s: &str) -> Result<Self> {
                Self::from_name(s)
            }
        }
    };
}

feature_enum!(
    /// How many symbols are printed on the card.
    Number, FeatureKind::Number,
    One => ('1', "1"),
    Two => ('2', "2"),
    Three => ('3', "3"),
);

feature_enum!(
    /// Symbol shape.
    Shape, FeatureKind::Shape,
    Diamond => ('D', "diamond"),
    Squiggle => ('S', "squiggle"),
    Oval => ('O', "oval"),
);

feature_enum!(
    /// Symbol fill.
    Shading, FeatureKind::Shading,
    Solid => ('S', "solid"),
    Striped => ('T', "striped"),
    Open => ('O', "open"),
);

feature_enum!(
    /// Symbol color.
    Color, FeatureKind::Color,
    Red => ('R', "red"),
    Green => ('G', "green"),
    Purple => ('P', "purple"),
);

impl Number {
    /// Symbol count (1..=3).
    #[must_use]
    pub const fn count(self) -> u8 {
        self as u8 + 1
    }
}

impl TryFrom<u8> for Number {
    type Error = SetError;

    fn try_from(count: u8) -> Result<Self> {
        match count {
            1 => Ok(Number::One),
            2 => Ok(Number::Two),
            3 => Ok(Number::Three),
            other => Err(SetError::invalid_feature(FeatureKind::Number, other)),
        }
    }
}
