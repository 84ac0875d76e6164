//! Non-numeric constraints: required, pattern and type

use crate::constraint::{pair, Attributes, Constraint};
use crate::error::Result;
use crate::options::{OptionReader, Options};
use crate::DEFAULT_MESSAGE;

/// Value must be present
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Required {
    message: String,
}

impl Required {
    pub const ATTRIBUTE: &'static str = "data-parsley-required";

    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Default for Required {
    fn default() -> Self {
        Self::new(DEFAULT_MESSAGE)
    }
}

impl Constraint for Required {
    const KIND: &'static str = "Required";

    fn attribute(&self) -> &'static str {
        Self::ATTRIBUTE
    }

    fn message(&self) -> &str {
        &self.message
    }

    fn from_options(options: &Options) -> Result<Self> {
        let reader = OptionReader::new(Self::KIND, options, &["message"])?;
        Ok(Self::new(reader.message_or_default("message")?))
    }

    fn normalize(&self) -> Attributes {
        pair(self.attribute(), true, self.message())
    }
}

/// Value must match a regular expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    pattern: String,
    message: String,
}

impl Pattern {
    pub const ATTRIBUTE: &'static str = "data-parsley-pattern";

    pub fn new(pattern: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            message: message.into(),
        }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

}

impl Constraint for Pattern {
    const KIND: &'static str = "Pattern";

    fn attribute(&self) -> &'static str {
        Self::ATTRIBUTE
    }

    fn message(&self) -> &str {
        &self.message
    }

    fn from_options(options: &Options) -> Result<Self> {
        let reader = OptionReader::new(Self::KIND, options, &["pattern", "message"])?;
        let pattern = reader.require("pattern", reader.string("pattern")?)?;
        Ok(Self::new(pattern, reader.message_or_default("message")?))
    }

    fn normalize(&self) -> Attributes {
        pair(Self::ATTRIBUTE, &self.pattern, &self.message)
    }
}

/// Value must be of a named client-side type (`email`, `number`, `url`, ...)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Type {
    type_name: String,
    message: String,
}

impl Type {
    pub const ATTRIBUTE: &'static str = "data-parsley-type";

    pub fn new(type_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            message: message.into(),
        }
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

}

impl Constraint for Type {
    const KIND: &'static str = "Type";

    fn attribute(&self) -> &'static str {
        Self::ATTRIBUTE
    }

    fn message(&self) -> &str {
        &self.message
    }

    fn from_options(options: &Options) -> Result<Self> {
        let reader = OptionReader::new(Self::KIND, options, &["type", "message"])?;
        let type_name = reader.require("type", reader.string("type")?)?;
        Ok(Self::new(type_name, reader.message_or_default("message")?))
    }

    fn normalize(&self) -> Attributes {
        pair(Self::ATTRIBUTE, &self.type_name, &self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConstraintError;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn options(value: serde_json::Value) -> Options {
        value.as_object().cloned().unwrap()
    }

    fn attrs(pairs: &[(&str, &str)]) -> Attributes {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_required_normalization() {
        let constraint = Required::from_options(&Options::new()).unwrap();

        assert_eq!(
            constraint.normalize(),
            attrs(&[
                ("data-parsley-required", "true"),
                ("data-parsley-required-message", "Invalid."),
            ])
        );
    }

    #[test]
    fn test_required_accepts_message() {
        let constraint = Required::from_options(&options(json!({"message": "Fill me"}))).unwrap();
        assert_eq!(constraint.message(), "Fill me");
    }

    #[test]
    fn test_required_rejects_unknown_option() {
        let err = Required::from_options(&options(json!({"strict": true}))).unwrap_err();
        assert!(matches!(err, ConstraintError::UnknownOption { .. }));
    }

    #[test]
    fn test_pattern_empty_configuration() {
        let err = Pattern::from_options(&Options::new()).unwrap_err();
        assert_eq!(
            err,
            ConstraintError::MissingRequiredOption {
                constraint: "Pattern",
                options: vec!["pattern"],
            }
        );
    }

    #[test]
    fn test_pattern_invalid_configuration() {
        let err = Pattern::from_options(&options(json!({"pattern": false}))).unwrap_err();
        assert!(matches!(
            err,
            ConstraintError::InvalidOptionType { option: "pattern", .. }
        ));
    }

    #[test]
    fn test_pattern_normalization() {
        let constraint = Pattern::from_options(&options(json!({"pattern": "\\w"}))).unwrap();

        assert_eq!(
            constraint.normalize(),
            attrs(&[
                ("data-parsley-pattern", "\\w"),
                ("data-parsley-pattern-message", "Invalid."),
            ])
        );
    }

    #[test]
    fn test_type_normalization() {
        let constraint = Type::from_options(&options(json!({
            "type": "email",
            "message": "This value is not a valid email address.",
        })))
        .unwrap();

        assert_eq!(constraint, Type::new("email", "This value is not a valid email address."));
        assert_eq!(
            constraint.normalize(),
            attrs(&[
                ("data-parsley-type", "email"),
                ("data-parsley-type-message", "This value is not a valid email address."),
            ])
        );
    }

    #[test]
    fn test_type_empty_configuration() {
        assert!(matches!(
            Type::from_options(&Options::new()),
            Err(ConstraintError::MissingRequiredOption { .. })
        ));
    }
}
