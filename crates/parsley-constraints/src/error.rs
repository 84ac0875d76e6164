// File: parsley-constraints/src/error.rs
// Purpose: Construction-time failures of constraint models

use thiserror::Error;

/// Error raised while building a constraint from its options.
///
/// These are configuration mistakes: nothing in this crate recovers from them,
/// they travel up to whoever asked for the constraint.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstraintError {
    /// A mandatory option is absent (or `null`).
    #[error("{constraint}: missing required option(s) {}", .options.join(", "))]
    MissingRequiredOption {
        constraint: &'static str,
        options: Vec<&'static str>,
    },

    /// An option is present but holds the wrong kind of value.
    #[error("{constraint}: option \"{option}\" must be {expected}")]
    InvalidOptionType {
        constraint: &'static str,
        option: &'static str,
        expected: &'static str,
    },

    /// The options contain keys the constraint does not recognize.
    #[error("{constraint}: unknown option(s) {}", .options.join(", "))]
    UnknownOption {
        constraint: &'static str,
        options: Vec<String>,
    },
}

impl ConstraintError {
    /// Name of the constraint kind that rejected its options
    pub fn constraint(&self) -> &'static str {
        match self {
            Self::MissingRequiredOption { constraint, .. }
            | Self::InvalidOptionType { constraint, .. }
            | Self::UnknownOption { constraint, .. } => constraint,
        }
    }
}

pub type Result<T> = std::result::Result<T, ConstraintError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let missing = ConstraintError::MissingRequiredOption {
            constraint: "Range",
            options: vec!["min", "max"],
        };
        assert_eq!(missing.to_string(), "Range: missing required option(s) min, max");

        let invalid = ConstraintError::InvalidOptionType {
            constraint: "MinLength",
            option: "min",
            expected: "a non-negative integer",
        };
        assert_eq!(
            invalid.to_string(),
            "MinLength: option \"min\" must be a non-negative integer"
        );

        let unknown = ConstraintError::UnknownOption {
            constraint: "Range",
            options: vec!["message".to_string()],
        };
        assert_eq!(unknown.to_string(), "Range: unknown option(s) message");
        assert_eq!(unknown.constraint(), "Range");
    }
}
