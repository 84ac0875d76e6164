// File: parsley-constraints/src/options.rs
// Purpose: Option maps handed to constraint constructors, and typed access to them

use crate::error::{ConstraintError, Result};
use crate::DEFAULT_MESSAGE;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Configuration mapping accepted by `Constraint::from_options`
pub type Options = serde_json::Map<String, Value>;

/// Numeric constraint value.
///
/// Renders integers (and floats without a fractional part) as plain decimal
/// integers: `5` and `5.0` both render as `"5"`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Number {
    Integer(i64),
    Float(f64),
}

// Largest float that still converts to i64 without losing integer precision
const MAX_EXACT_FLOAT: f64 = 9_007_199_254_740_992.0;

impl Number {
    /// Read a number out of a JSON value
    pub fn from_json(value: &Value) -> Option<Self> {
        let Value::Number(number) = value else {
            return None;
        };
        if let Some(integer) = number.as_i64() {
            return Some(Self::Integer(integer));
        }
        number.as_f64().map(Self::Float)
    }

    /// False for NaN and infinite floats
    pub fn is_finite(self) -> bool {
        match self {
            Self::Integer(_) => true,
            Self::Float(float) => float.is_finite(),
        }
    }

    pub fn to_json(self) -> Value {
        match self {
            Self::Integer(integer) => Value::from(integer),
            Self::Float(float) => Value::from(float),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Integer(integer) => write!(f, "{}", integer),
            Self::Float(float) if float.fract() == 0.0 && float.abs() <= MAX_EXACT_FLOAT => {
                write!(f, "{}", float as i64)
            }
            Self::Float(float) => write!(f, "{}", float),
        }
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Self::Integer(value.into())
    }
}

impl From<u32> for Number {
    fn from(value: u32) -> Self {
        Self::Integer(value.into())
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

/// Strict, typed view over an option map for one constraint kind.
///
/// Unknown keys are rejected up front. `null` counts as absent.
pub(crate) struct OptionReader<'a> {
    constraint: &'static str,
    options: &'a Options,
}

impl<'a> OptionReader<'a> {
    pub(crate) fn new(
        constraint: &'static str,
        options: &'a Options,
        recognized: &[&str],
    ) -> Result<Self> {
        let unknown: Vec<String> = options
            .keys()
            .filter(|key| !recognized.contains(&key.as_str()))
            .cloned()
            .collect();

        if !unknown.is_empty() {
            return Err(ConstraintError::UnknownOption {
                constraint,
                options: unknown,
            });
        }

        Ok(Self { constraint, options })
    }

    fn get(&self, key: &str) -> Option<&'a Value> {
        self.options.get(key).filter(|value| !value.is_null())
    }

    fn invalid(&self, option: &'static str, expected: &'static str) -> ConstraintError {
        ConstraintError::InvalidOptionType {
            constraint: self.constraint,
            option,
            expected,
        }
    }

    pub(crate) fn missing(&self, options: &[&'static str]) -> ConstraintError {
        ConstraintError::MissingRequiredOption {
            constraint: self.constraint,
            options: options.to_vec(),
        }
    }

    pub(crate) fn has(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub(crate) fn string(&self, key: &'static str) -> Result<Option<String>> {
        match self.get(key) {
            None => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.clone())),
            Some(_) => Err(self.invalid(key, "a string")),
        }
    }

    pub(crate) fn length(&self, key: &'static str) -> Result<Option<u64>> {
        match self.get(key) {
            None => Ok(None),
            Some(value) => value
                .as_u64()
                .map(Some)
                .ok_or_else(|| self.invalid(key, "a non-negative integer")),
        }
    }

    pub(crate) fn number(&self, key: &'static str) -> Result<Option<Number>> {
        match self.get(key) {
            None => Ok(None),
            Some(value) => Number::from_json(value)
                .map(Some)
                .ok_or_else(|| self.invalid(key, "a number")),
        }
    }

    pub(crate) fn require<T>(&self, key: &'static str, value: Option<T>) -> Result<T> {
        value.ok_or_else(|| self.missing(&[key]))
    }

    /// String option falling back to the generic placeholder message
    pub(crate) fn message_or_default(&self, key: &'static str) -> Result<String> {
        Ok(self
            .string(key)?
            .unwrap_or_else(|| DEFAULT_MESSAGE.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    fn options(value: Value) -> Options {
        match value {
            Value::Object(map) => map,
            _ => panic!("options must be an object"),
        }
    }

    #[rstest]
    #[case(Number::Integer(5), "5")]
    #[case(Number::Integer(-12), "-12")]
    #[case(Number::Integer(0), "0")]
    #[case(Number::Float(5.0), "5")]
    #[case(Number::Float(-3.0), "-3")]
    #[case(Number::Float(2.5), "2.5")]
    #[case(Number::Float(0.125), "0.125")]
    fn test_number_rendering(#[case] number: Number, #[case] expected: &str) {
        assert_eq!(number.to_string(), expected);
    }

    #[test]
    fn test_number_is_finite() {
        assert!(Number::Integer(i64::MAX).is_finite());
        assert!(Number::Float(2.5).is_finite());
        assert!(!Number::Float(f64::NAN).is_finite());
        assert!(!Number::Float(f64::NEG_INFINITY).is_finite());
    }

    #[test]
    fn test_number_from_json() {
        assert_eq!(Number::from_json(&json!(5)), Some(Number::Integer(5)));
        assert_eq!(Number::from_json(&json!(2.5)), Some(Number::Float(2.5)));
        assert_eq!(Number::from_json(&json!("5")), None);
        assert_eq!(Number::from_json(&json!(true)), None);
    }

    #[test]
    fn test_reader_rejects_unknown_keys() {
        let opts = options(json!({"min": 5, "colour": "red", "flavour": 1}));
        let err = OptionReader::new("MinLength", &opts, &["min", "message"])
            .err()
            .unwrap();

        assert_eq!(
            err,
            ConstraintError::UnknownOption {
                constraint: "MinLength",
                options: vec!["colour".to_string(), "flavour".to_string()],
            }
        );
    }

    #[test]
    fn test_reader_treats_null_as_absent() {
        let opts = options(json!({"min": null}));
        let reader = OptionReader::new("MinLength", &opts, &["min"]).unwrap();

        assert!(!reader.has("min"));
        assert_eq!(reader.length("min").unwrap(), None);
    }

    #[test]
    fn test_reader_type_checks() {
        let opts = options(json!({"min": "5", "pattern": false, "value": -1}));
        let reader = OptionReader::new("Test", &opts, &["min", "pattern", "value"]).unwrap();

        assert!(matches!(
            reader.length("min"),
            Err(ConstraintError::InvalidOptionType { option: "min", .. })
        ));
        assert!(matches!(
            reader.string("pattern"),
            Err(ConstraintError::InvalidOptionType { option: "pattern", .. })
        ));
        assert!(reader.length("value").is_err());
        assert_eq!(reader.number("value").unwrap(), Some(Number::Integer(-1)));
    }

    #[test]
    fn test_message_defaults_to_placeholder() {
        let opts = Options::new();
        let reader = OptionReader::new("Required", &opts, &["message"]).unwrap();
        assert_eq!(reader.message_or_default("message").unwrap(), "Invalid.");
    }
}
