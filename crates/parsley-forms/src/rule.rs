// File: parsley-forms/src/rule.rs
// Purpose: Server-side validation rule vocabulary fed into the constraint factory

use parsley_constraints::Number;
use serde::de::{self, DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

// Default message templates of the validators catalog
pub const DATE_TIME_MESSAGE: &str = "This value is not a valid datetime.";
pub const DATE_MESSAGE: &str = "This value is not a valid date.";
pub const TIME_MESSAGE: &str = "This value is not a valid time.";
pub const EMAIL_MESSAGE: &str = "This value is not a valid email address.";
pub const NOT_BLANK_MESSAGE: &str = "This value should not be blank.";
pub const LENGTH_MIN_MESSAGE: &str = "This value is too short. It should have {{ limit }} character or more.|This value is too short. It should have {{ limit }} characters or more.";
pub const LENGTH_MAX_MESSAGE: &str = "This value is too long. It should have {{ limit }} character or less.|This value is too long. It should have {{ limit }} characters or less.";
pub const LENGTH_EXACT_MESSAGE: &str = "This value should have exactly {{ limit }} character.|This value should have exactly {{ limit }} characters.";
pub const RANGE_MIN_MESSAGE: &str = "This value should be {{ limit }} or more.";
pub const RANGE_MAX_MESSAGE: &str = "This value should be {{ limit }} or less.";
pub const GREATER_THAN_MESSAGE: &str = "This value should be greater than {{ compared_value }}.";
pub const LESS_THAN_MESSAGE: &str = "This value should be less than {{ compared_value }}.";

macro_rules! message_rule {
    ($(#[$doc:meta])* $name:ident, $default:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(default)]
        pub struct $name {
            pub message: String,
        }

        impl $name {
            pub fn with_message(message: impl Into<String>) -> Self {
                Self {
                    message: message.into(),
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::with_message($default)
            }
        }
    };
}

message_rule!(
    /// Value must be a date and time
    DateTime,
    DATE_TIME_MESSAGE
);
message_rule!(
    /// Value must be a calendar date
    Date,
    DATE_MESSAGE
);
message_rule!(
    /// Value must be a time of day
    Time,
    TIME_MESSAGE
);
message_rule!(
    /// Value must be an email address
    Email,
    EMAIL_MESSAGE
);
message_rule!(
    /// Value must not be blank
    NotBlank,
    NOT_BLANK_MESSAGE
);

/// Character count bounds; at least one bound is expected
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Length {
    pub min: Option<u64>,
    pub max: Option<u64>,
    pub min_message: String,
    pub max_message: String,
    pub exact_message: String,
}

impl Length {
    pub fn exactly(limit: u64) -> Self {
        Self::between(limit, limit)
    }

    pub fn between(min: u64, max: u64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
            ..Self::default()
        }
    }

    pub fn at_least(min: u64) -> Self {
        Self {
            min: Some(min),
            ..Self::default()
        }
    }

    pub fn at_most(max: u64) -> Self {
        Self {
            max: Some(max),
            ..Self::default()
        }
    }
}

impl Default for Length {
    fn default() -> Self {
        Self {
            min: None,
            max: None,
            min_message: LENGTH_MIN_MESSAGE.to_string(),
            max_message: LENGTH_MAX_MESSAGE.to_string(),
            exact_message: LENGTH_EXACT_MESSAGE.to_string(),
        }
    }
}

/// Numeric bounds; at least one bound is expected.
///
/// Date and datetime string bounds are not supported and fail to deserialize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Range {
    pub min: Option<Number>,
    pub max: Option<Number>,
    pub min_message: String,
    pub max_message: String,
}

impl Range {
    pub fn new(min: Option<Number>, max: Option<Number>) -> Self {
        Self {
            min,
            max,
            ..Self::default()
        }
    }
}

impl Default for Range {
    fn default() -> Self {
        Self {
            min: None,
            max: None,
            min_message: RANGE_MIN_MESSAGE.to_string(),
            max_message: RANGE_MAX_MESSAGE.to_string(),
        }
    }
}

fn greater_than_message() -> String {
    GREATER_THAN_MESSAGE.to_string()
}

fn less_than_message() -> String {
    LESS_THAN_MESSAGE.to_string()
}

/// Value must be strictly greater than `value`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GreaterThan {
    pub value: Number,
    #[serde(default = "greater_than_message")]
    pub message: String,
}

impl GreaterThan {
    pub fn new(value: impl Into<Number>) -> Self {
        Self {
            value: value.into(),
            message: greater_than_message(),
        }
    }
}

/// Value must be strictly less than `value`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LessThan {
    pub value: Number,
    #[serde(default = "less_than_message")]
    pub message: String,
}

impl LessThan {
    pub fn new(value: impl Into<Number>) -> Self {
        Self {
            value: value.into(),
            message: less_than_message(),
        }
    }
}

/// A server-side validation rule attached to a form field.
///
/// Deserializes from a map tagged with `kind`. Kinds outside the vocabulary
/// become [`Rule::Other`] rather than failing.
#[derive(Debug, Clone, PartialEq)]
pub enum Rule {
    DateTime(DateTime),
    Date(Date),
    Time(Time),
    Email(Email),
    Length(Length),
    NotBlank(NotBlank),
    Range(Range),
    GreaterThan(GreaterThan),
    LessThan(LessThan),
    /// Known kinds that only the server can enforce
    NotNull,
    Valid,
    Url,
    Regex,
    IsTrue,
    Other {
        kind: String,
    },
}

impl Rule {
    /// Kind identifier, as used in the `kind` tag and in logs
    pub fn kind(&self) -> &str {
        match self {
            Self::DateTime(_) => "DateTime",
            Self::Date(_) => "Date",
            Self::Time(_) => "Time",
            Self::Email(_) => "Email",
            Self::Length(_) => "Length",
            Self::NotBlank(_) => "NotBlank",
            Self::Range(_) => "Range",
            Self::GreaterThan(_) => "GreaterThan",
            Self::LessThan(_) => "LessThan",
            Self::NotNull => "NotNull",
            Self::Valid => "Valid",
            Self::Url => "Url",
            Self::Regex => "Regex",
            Self::IsTrue => "IsTrue",
            Self::Other { kind } => kind,
        }
    }

    pub fn other(kind: impl Into<String>) -> Self {
        Self::Other { kind: kind.into() }
    }
}

fn parse_body<T: DeserializeOwned, E: de::Error>(body: Value) -> Result<T, E> {
    serde_json::from_value(body).map_err(E::custom)
}

impl<'de> Deserialize<'de> for Rule {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut body = serde_json::Map::<String, Value>::deserialize(deserializer)?;

        let kind = match body.remove("kind") {
            Some(Value::String(kind)) => kind,
            Some(other) => {
                return Err(de::Error::invalid_type(
                    de::Unexpected::Other(&other.to_string()),
                    &"a rule kind string",
                ))
            }
            None => return Err(de::Error::missing_field("kind")),
        };
        let body = Value::Object(body);

        Ok(match kind.as_str() {
            "DateTime" => Self::DateTime(parse_body(body)?),
            "Date" => Self::Date(parse_body(body)?),
            "Time" => Self::Time(parse_body(body)?),
            "Email" => Self::Email(parse_body(body)?),
            "Length" => Self::Length(parse_body(body)?),
            "NotBlank" => Self::NotBlank(parse_body(body)?),
            "Range" => Self::Range(parse_body(body)?),
            "GreaterThan" => Self::GreaterThan(parse_body(body)?),
            "LessThan" => Self::LessThan(parse_body(body)?),
            "NotNull" => Self::NotNull,
            "Valid" => Self::Valid,
            "Url" => Self::Url,
            "Regex" => Self::Regex,
            "IsTrue" => Self::IsTrue,
            _ => Self::Other { kind },
        })
    }
}

macro_rules! impl_from_rule {
    ($($kind:ident),* $(,)?) => {
        $(
            impl From<$kind> for Rule {
                fn from(rule: $kind) -> Self {
                    Self::$kind(rule)
                }
            }
        )*
    };
}

impl_from_rule!(
    DateTime,
    Date,
    Time,
    Email,
    Length,
    NotBlank,
    Range,
    GreaterThan,
    LessThan,
);
