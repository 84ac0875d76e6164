// File: parsley-constraints/src/constraint.rs
// Purpose: Constraint capability and the closed set of constraint kinds

use crate::error::Result;
use crate::length::{Length, MaxLength, MinLength};
use crate::numeric::{GreaterThan, LessThan, Range};
use crate::options::Options;
use crate::text::{Pattern, Required, Type};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::BTreeMap;
use std::fmt::Display;

/// Normalized output: attribute key to attribute value
pub type Attributes = BTreeMap<String, String>;

/// Suffix appended to an attribute key to form its message key
pub const MESSAGE_SUFFIX: &str = "-message";

/// Shared behavior of every constraint model.
///
/// Implementors are immutable values: options are validated once in
/// `from_options` and `normalize` only reads them.
pub trait Constraint: Sized {
    /// Kind name reported in construction errors
    const KIND: &'static str;

    /// Build the constraint from an option map, rejecting unknown keys
    fn from_options(options: &Options) -> Result<Self>;

    /// Primary `data-parsley-*` key the constraint renders
    fn attribute(&self) -> &'static str;

    /// Message shown client-side when the constraint fails
    fn message(&self) -> &str;

    /// Flatten the constraint into its attribute/value pairs
    fn normalize(&self) -> Attributes;
}

/// Insert `attribute = value` and `attribute-message = message`
pub(crate) fn insert_pair(
    attributes: &mut Attributes,
    attribute: &str,
    value: impl Display,
    message: &str,
) {
    attributes.insert(attribute.to_string(), value.to_string());
    attributes.insert(format!("{}{}", attribute, MESSAGE_SUFFIX), message.to_string());
}

pub(crate) fn pair(attribute: &str, value: impl Display, message: &str) -> Attributes {
    let mut attributes = Attributes::new();
    insert_pair(&mut attributes, attribute, value, message);
    attributes
}

/// Any one of the supported constraint kinds
#[derive(Debug, Clone, PartialEq)]
pub enum ParsleyConstraint {
    Required(Required),
    Pattern(Pattern),
    Type(Type),
    Length(Length),
    MinLength(MinLength),
    MaxLength(MaxLength),
    Range(Range),
    GreaterThan(GreaterThan),
    LessThan(LessThan),
}

macro_rules! each_kind {
    ($value:expr, $c:ident => $body:expr) => {
        match $value {
            ParsleyConstraint::Required($c) => $body,
            ParsleyConstraint::Pattern($c) => $body,
            ParsleyConstraint::Type($c) => $body,
            ParsleyConstraint::Length($c) => $body,
            ParsleyConstraint::MinLength($c) => $body,
            ParsleyConstraint::MaxLength($c) => $body,
            ParsleyConstraint::Range($c) => $body,
            ParsleyConstraint::GreaterThan($c) => $body,
            ParsleyConstraint::LessThan($c) => $body,
        }
    };
}

impl ParsleyConstraint {
    /// Kind name of the wrapped constraint
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Required(_) => Required::KIND,
            Self::Pattern(_) => Pattern::KIND,
            Self::Type(_) => Type::KIND,
            Self::Length(_) => Length::KIND,
            Self::MinLength(_) => MinLength::KIND,
            Self::MaxLength(_) => MaxLength::KIND,
            Self::Range(_) => Range::KIND,
            Self::GreaterThan(_) => GreaterThan::KIND,
            Self::LessThan(_) => LessThan::KIND,
        }
    }

    pub fn attribute(&self) -> &'static str {
        each_kind!(self, c => c.attribute())
    }

    /// For `Range` this is the message of its first present bound
    pub fn message(&self) -> &str {
        each_kind!(self, c => c.message())
    }

    pub fn normalize(&self) -> Attributes {
        each_kind!(self, c => c.normalize())
    }
}

/// Serializes as the normalized attribute map
impl Serialize for ParsleyConstraint {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let attributes = self.normalize();
        let mut map = serializer.serialize_map(Some(attributes.len()))?;
        for (key, value) in &attributes {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

macro_rules! impl_from_constraint {
    ($($kind:ident),* $(,)?) => {
        $(
            impl From<$kind> for ParsleyConstraint {
                fn from(constraint: $kind) -> Self {
                    Self::$kind(constraint)
                }
            }
        )*
    };
}

impl_from_constraint!(
    Required,
    Pattern,
    Type,
    Length,
    MinLength,
    MaxLength,
    Range,
    GreaterThan,
    LessThan,
);
