//! Character length constraints

use crate::constraint::{pair, Attributes, Constraint};
use crate::error::Result;
use crate::options::{OptionReader, Options};

/// Length between `min` and `max` characters, inclusive.
///
/// `min <= max` is left to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Length {
    min: u64,
    max: u64,
    message: String,
}

impl Length {
    pub const ATTRIBUTE: &'static str = "data-parsley-length";

    pub fn new(min: u64, max: u64, message: impl Into<String>) -> Self {
        Self {
            min,
            max,
            message: message.into(),
        }
    }

    pub fn min(&self) -> u64 {
        self.min
    }

    pub fn max(&self) -> u64 {
        self.max
    }
}

impl Constraint for Length {
    const KIND: &'static str = "Length";

    fn attribute(&self) -> &'static str {
        Self::ATTRIBUTE
    }

    fn message(&self) -> &str {
        &self.message
    }

    fn from_options(options: &Options) -> Result<Self> {
        let reader = OptionReader::new(Self::KIND, options, &["min", "max", "message"])?;
        let min = reader.length("min")?;
        let max = reader.length("max")?;

        let (min, max) = match (min, max) {
            (Some(min), Some(max)) => (min, max),
            (None, None) => return Err(reader.missing(&["min", "max"])),
            (None, Some(_)) => return Err(reader.missing(&["min"])),
            (Some(_), None) => return Err(reader.missing(&["max"])),
        };

        Ok(Self::new(min, max, reader.message_or_default("message")?))
    }

    fn normalize(&self) -> Attributes {
        pair(
            Self::ATTRIBUTE,
            format!("[{}, {}]", self.min, self.max),
            &self.message,
        )
    }
}

/// At least `min` characters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinLength {
    min: u64,
    message: String,
}

impl MinLength {
    pub const ATTRIBUTE: &'static str = "data-parsley-minlength";

    pub fn new(min: u64, message: impl Into<String>) -> Self {
        Self {
            min,
            message: message.into(),
        }
    }

    pub fn min(&self) -> u64 {
        self.min
    }
}

impl Constraint for MinLength {
    const KIND: &'static str = "MinLength";

    fn attribute(&self) -> &'static str {
        Self::ATTRIBUTE
    }

    fn message(&self) -> &str {
        &self.message
    }

    fn from_options(options: &Options) -> Result<Self> {
        let reader = OptionReader::new(Self::KIND, options, &["min", "message"])?;
        let min = reader.require("min", reader.length("min")?)?;
        Ok(Self::new(min, reader.message_or_default("message")?))
    }

    fn normalize(&self) -> Attributes {
        pair(Self::ATTRIBUTE, self.min, &self.message)
    }
}

/// At most `max` characters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaxLength {
    max: u64,
    message: String,
}

impl MaxLength {
    pub const ATTRIBUTE: &'static str = "data-parsley-maxlength";

    pub fn new(max: u64, message: impl Into<String>) -> Self {
        Self {
            max,
            message: message.into(),
        }
    }

    pub fn max(&self) -> u64 {
        self.max
    }
}

impl Constraint for MaxLength {
    const KIND: &'static str = "MaxLength";

    fn attribute(&self) -> &'static str {
        Self::ATTRIBUTE
    }

    fn message(&self) -> &str {
        &self.message
    }

    fn from_options(options: &Options) -> Result<Self> {
        let reader = OptionReader::new(Self::KIND, options, &["max", "message"])?;
        let max = reader.require("max", reader.length("max")?)?;
        Ok(Self::new(max, reader.message_or_default("message")?))
    }

    fn normalize(&self) -> Attributes {
        pair(Self::ATTRIBUTE, self.max, &self.message)
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

    #[test]
    fn test_min_length_empty_configuration() {
        let err = MinLength::from_options(&Options::new()).unwrap_err();
        assert_eq!(
            err,
            ConstraintError::MissingRequiredOption {
                constraint: "MinLength",
                options: vec!["min"],
            }
        );
    }

    #[test]
    fn test_min_length_invalid_configuration() {
        let err = MinLength::from_options(&options(json!({"min": "5"}))).unwrap_err();
        assert!(matches!(err, ConstraintError::InvalidOptionType { option: "min", .. }));
    }

    #[test]
    fn test_min_length_valid_configuration() {
        assert!(MinLength::from_options(&options(json!({"min": 5}))).is_ok());
        let with_message =
            MinLength::from_options(&options(json!({"min": 5, "message": "Invalid"}))).unwrap();
        assert_eq!(with_message.message(), "Invalid");
    }

    #[test]
    fn test_min_length_normalization() {
        let constraint = MinLength::from_options(&options(json!({"min": 5}))).unwrap();
        let attributes = constraint.normalize();

        assert_eq!(attributes["data-parsley-minlength"], "5");
        assert_eq!(attributes["data-parsley-minlength-message"], "Invalid.");
        assert_eq!(attributes.len(), 2);
    }

    #[test]
    fn test_max_length_normalization() {
        let constraint = MaxLength::from_options(&options(json!({"max": 10}))).unwrap();
        let attributes = constraint.normalize();

        assert_eq!(attributes["data-parsley-maxlength"], "10");
        assert_eq!(attributes["data-parsley-maxlength-message"], "Invalid.");
    }

    #[test]
    fn test_max_length_rejects_negative() {
        assert!(matches!(
            MaxLength::from_options(&options(json!({"max": -1}))),
            Err(ConstraintError::InvalidOptionType { option: "max", .. })
        ));
    }

    #[test]
    fn test_length_requires_both_bounds() {
        assert!(matches!(
            Length::from_options(&options(json!({"min": 5}))),
            Err(ConstraintError::MissingRequiredOption { options, .. }) if options == vec!["max"]
        ));
        assert!(matches!(
            Length::from_options(&Options::new()),
            Err(ConstraintError::MissingRequiredOption { options, .. }) if options == vec!["min", "max"]
        ));
    }

    #[test]
    fn test_length_normalization() {
        let constraint = Length::from_options(&options(json!({
            "min": 5,
            "max": 10,
            "message": "This value should have 5 to 10 characters.",
        })))
        .unwrap();

        let attributes = constraint.normalize();
        assert_eq!(attributes["data-parsley-length"], "[5, 10]");
        assert_eq!(
            attributes["data-parsley-length-message"],
            "This value should have 5 to 10 characters."
        );
    }

    #[test]
    fn test_length_does_not_enforce_ordering() {
        let constraint = Length::from_options(&options(json!({"min": 10, "max": 5}))).unwrap();
        assert_eq!(constraint.normalize()["data-parsley-length"], "[10, 5]");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let constraint = Length::new(5, 5, "Exactly 5.");
        assert_eq!(constraint.normalize(), constraint.normalize());
    }
}
