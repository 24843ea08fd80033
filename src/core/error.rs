//! Error type shared by the card model and the Set evaluator.
//!
//! Every error is raised synchronously at the point of invalid input.
//! Nothing here is transient, so callers decide whether to skip, log or abort.

use thiserror::Error;

use crate::cards::FeatureKind;

/// Errors raised while building cards or evaluating triples.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum SetError {
    /// A feature value outside its closed 3-element domain.
    #[error("invalid {feature} value: {value:?}")]
    InvalidFeature { feature: FeatureKind, value: String },

    /// An identifier with the wrong length or an unknown feature code.
    #[error("malformed identifier {identifier:?}: {reason}")]
    MalformedIdentifier { identifier: String, reason: String },

    /// Two of the three cards handed to the evaluator are the same card.
    #[error("degenerate triple: the same card appears more than once")]
    DegenerateTriple,

    /// A configuration value that cannot be honoured.
    #[error("invalid configuration: {message}")]
    InvalidConfig { message: String },
}

impl SetError {
    pub(crate) fn invalid_feature(feature: FeatureKind, value: impl ToString) -> Self {
        SetError::InvalidFeature {
            feature,
            value: value.to_string(),
        }
    }

    pub(crate) fn malformed(identifier: &str, reason: impl Into<String>) -> Self {
        SetError::MalformedIdentifier {
            identifier: identifier.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = SetError::invalid_feature(FeatureKind::Shape, "hexagon");
        assert_eq!(err.to_string(), "invalid shape value: \"hexagon\"");

        let err = SetError::malformed("1RS", "expected 4 characters, found 3");
        assert_eq!(
            err.to_string(),
            "malformed identifier \"1RS\": expected 4 characters, found 3"
        );

        assert!(SetError::DegenerateTriple.to_string().contains("more than once"));
    }
}
