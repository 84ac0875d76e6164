//! Numeric constraints: range bounds and strict comparisons

use crate::constraint::{insert_pair, pair, Attributes, Constraint};
use crate::error::{ConstraintError, Result};
use crate::options::{Number, OptionReader, Options};
use crate::DEFAULT_MESSAGE;

/// Lower and/or upper numeric bound, each with its own message.
///
/// At least one bound is always present and every bound is finite. Bounds
/// are numbers only; date and datetime strings are rejected as the wrong type.
#[derive(Debug, Clone, PartialEq)]
pub struct Range {
    min: Option<Number>,
    max: Option<Number>,
    min_message: String,
    max_message: String,
}

impl Range {
    pub const MIN_ATTRIBUTE: &'static str = "data-parsley-min";
    pub const MAX_ATTRIBUTE: &'static str = "data-parsley-max";

    /// Create a range with placeholder messages.
    ///
    /// Fails when both bounds are absent or when a bound is NaN or infinite.
    pub fn new(min: Option<Number>, max: Option<Number>) -> Result<Self> {
        if min.is_none() && max.is_none() {
            return Err(ConstraintError::MissingRequiredOption {
                constraint: Self::KIND,
                options: vec!["min", "max"],
            });
        }

        for (option, bound) in [("min", min), ("max", max)] {
            if bound.is_some_and(|bound| !bound.is_finite()) {
                return Err(ConstraintError::InvalidOptionType {
                    constraint: Self::KIND,
                    option,
                    expected: "a finite number",
                });
            }
        }

        Ok(Self {
            min,
            max,
            min_message: DEFAULT_MESSAGE.to_string(),
            max_message: DEFAULT_MESSAGE.to_string(),
        })
    }

    pub fn with_min_message(mut self, message: impl Into<String>) -> Self {
        self.min_message = message.into();
        self
    }

    pub fn with_max_message(mut self, message: impl Into<String>) -> Self {
        self.max_message = message.into();
        self
    }

    pub fn min(&self) -> Option<Number> {
        self.min
    }

    pub fn max(&self) -> Option<Number> {
        self.max
    }

    pub fn min_message(&self) -> &str {
        &self.min_message
    }

    pub fn max_message(&self) -> &str {
        &self.max_message
    }
}

impl Constraint for Range {
    const KIND: &'static str = "Range";

    fn attribute(&self) -> &'static str {
        if self.min.is_some() {
            Self::MIN_ATTRIBUTE
        } else {
            Self::MAX_ATTRIBUTE
        }
    }

    fn message(&self) -> &str {
        if self.min.is_some() {
            &self.min_message
        } else {
            &self.max_message
        }
    }

    fn from_options(options: &Options) -> Result<Self> {
        // `message` is deliberately absent: each bound carries its own
        let reader = OptionReader::new(
            Self::KIND,
            options,
            &["min", "max", "minMessage", "maxMessage"],
        )?;

        let min = reader.number("min")?;
        let max = reader.number("max")?;

        if min.is_none() && reader.has("minMessage") {
            return Err(reader.missing(&["min"]));
        }
        if max.is_none() && reader.has("maxMessage") {
            return Err(reader.missing(&["max"]));
        }

        Ok(Self::new(min, max)?
            .with_min_message(reader.message_or_default("minMessage")?)
            .with_max_message(reader.message_or_default("maxMessage")?))
    }

    fn normalize(&self) -> Attributes {
        let mut attributes = Attributes::new();

        if let Some(min) = self.min {
            insert_pair(&mut attributes, Self::MIN_ATTRIBUTE, min, &self.min_message);
        }
        if let Some(max) = self.max {
            insert_pair(&mut attributes, Self::MAX_ATTRIBUTE, max, &self.max_message);
        }

        attributes
    }
}

macro_rules! comparison_constraint {
    ($(#[$doc:meta])* $name:ident, $kind:literal, $attribute:literal) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq)]
        pub struct $name {
            value: Number,
            message: String,
        }

        impl $name {
            pub const ATTRIBUTE: &'static str = $attribute;

            /// Non-finite floats are kept as given and render as `NaN` or
            /// `inf`; `from_options` never produces them.
            pub fn new(value: impl Into<Number>, message: impl Into<String>) -> Self {
                Self {
                    value: value.into(),
                    message: message.into(),
                }
            }

            pub fn value(&self) -> Number {
                self.value
            }
        }

        impl Constraint for $name {
            const KIND: &'static str = $kind;

            fn attribute(&self) -> &'static str {
                Self::ATTRIBUTE
            }

            fn message(&self) -> &str {
                &self.message
            }

            fn from_options(options: &Options) -> Result<Self> {
                let reader = OptionReader::new(Self::KIND, options, &["value", "message"])?;
                let value = reader.require("value", reader.number("value")?)?;
                Ok(Self::new(value, reader.message_or_default("message")?))
            }

            fn normalize(&self) -> Attributes {
                pair(Self::ATTRIBUTE, self.value, &self.message)
            }
        }
    };
}

comparison_constraint!(
    /// Value must be strictly greater than `value`
    GreaterThan,
    "GreaterThan",
    "data-parsley-gt"
);

comparison_constraint!(
    /// Value must be strictly less than `value`
    LessThan,
    "LessThan",
    "data-parsley-lt"
);
