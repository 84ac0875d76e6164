// File: parsley-forms/src/factory.rs
// Purpose: Map server-side rules onto Parsley constraints with translated messages

use crate::logging::RuleLogger;
use crate::rule::{self, Rule};
use crate::translation::{parameters, Parameters, Translator, VALIDATORS_DOMAIN};
use parsley_constraints::{
    Constraint, GreaterThan, Length, LessThan, MaxLength, MinLength, Options, ParsleyConstraint,
    Pattern, Range, Required, Result, Type,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

/// Message id used when a length rule has distinct lower and upper bounds
pub const LENGTH_BETWEEN_MESSAGE: &str = "This value should have {{ min }} to {{ max }} characters.";

const LIMIT: &str = "{{ limit }}";
const COMPARED_VALUE: &str = "{{ compared_value }}";

/// Regular expressions used for date and time rules
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatePatterns {
    #[serde(default = "default_date_time_pattern")]
    pub date_time: String,

    #[serde(default = "default_date_pattern")]
    pub date: String,

    #[serde(default = "default_time_pattern")]
    pub time: String,
}

fn default_date_time_pattern() -> String {
    r"\d{4}-\d{2}-\d{2} \d{2}:\d{2}".to_string()
}

fn default_date_pattern() -> String {
    r"\d{4}-\d{2}-\d{2}".to_string()
}

fn default_time_pattern() -> String {
    r"\d{2}:\d{2}".to_string()
}

impl Default for DatePatterns {
    fn default() -> Self {
        Self {
            date_time: default_date_time_pattern(),
            date: default_date_pattern(),
            time: default_time_pattern(),
        }
    }
}

fn build<C>(entries: impl IntoIterator<Item = (&'static str, Value)>) -> Result<ParsleyConstraint>
where
    C: Constraint + Into<ParsleyConstraint>,
{
    let options: Options = entries
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect();
    C::from_options(&options).map(Into::into)
}

fn count(limit: u64) -> i64 {
    i64::try_from(limit).unwrap_or(i64::MAX)
}

/// Creates at most one constraint per rule.
///
/// Holds no mutable state, so one factory can serve any number of threads.
#[derive(Clone)]
pub struct ConstraintFactory {
    translator: Arc<dyn Translator>,
    logger: Arc<dyn RuleLogger>,
    patterns: DatePatterns,
}

impl ConstraintFactory {
    pub fn new(
        translator: Arc<dyn Translator>,
        logger: Arc<dyn RuleLogger>,
        patterns: DatePatterns,
    ) -> Self {
        Self {
            translator,
            logger,
            patterns,
        }
    }

    pub fn patterns(&self) -> &DatePatterns {
        &self.patterns
    }

    /// Build the constraint matching `rule`.
    ///
    /// Returns `Ok(None)` (after one logger call) when the rule has no
    /// client-side equivalent. Errors only come from constraint construction.
    pub fn create(&self, rule: &Rule) -> Result<Option<ParsleyConstraint>> {
        let constraint = match rule {
            Rule::DateTime(r) => self.create_pattern(&self.patterns.date_time, &r.message)?,
            Rule::Date(r) => self.create_pattern(&self.patterns.date, &r.message)?,
            Rule::Time(r) => self.create_pattern(&self.patterns.time, &r.message)?,
            Rule::Email(r) => self.create_type("email", &r.message)?,
            Rule::Length(r) => self.create_length(r)?,
            Rule::NotBlank(r) => self.create_required(r)?,
            Rule::Range(r) => self.create_range(r)?,
            Rule::GreaterThan(r) => build::<GreaterThan>([
                ("value", r.value.to_json()),
                ("message", self.compared(&r.message, r.value).into()),
            ])?,
            Rule::LessThan(r) => build::<LessThan>([
                ("value", r.value.to_json()),
                ("message", self.compared(&r.message, r.value).into()),
            ])?,
            unsupported => {
                self.logger.unsupported_rule(unsupported.kind());
                return Ok(None);
            }
        };

        Ok(Some(constraint))
    }

    fn trans(&self, id: &str, parameters: &Parameters) -> String {
        self.translator.translate(id, parameters, VALIDATORS_DOMAIN)
    }

    fn trans_plural(&self, id: &str, limit: u64) -> String {
        self.translator.translate_plural(
            id,
            count(limit),
            &parameters([(LIMIT, limit)]),
            VALIDATORS_DOMAIN,
        )
    }

    fn compared(&self, message: &str, value: impl ToString) -> String {
        self.trans(message, &parameters([(COMPARED_VALUE, value)]))
    }

    fn create_pattern(&self, pattern: &str, message: &str) -> Result<ParsleyConstraint> {
        build::<Pattern>([
            ("pattern", pattern.into()),
            ("message", self.trans(message, &Parameters::new()).into()),
        ])
    }

    fn create_type(&self, type_name: &str, message: &str) -> Result<ParsleyConstraint> {
        build::<Type>([
            ("type", type_name.into()),
            ("message", self.trans(message, &Parameters::new()).into()),
        ])
    }

    fn create_required(&self, rule: &rule::NotBlank) -> Result<ParsleyConstraint> {
        build::<Required>([("message", self.trans(&rule.message, &Parameters::new()).into())])
    }

    fn create_length(&self, rule: &rule::Length) -> Result<ParsleyConstraint> {
        match (rule.min, rule.max) {
            (Some(min), Some(max)) => {
                let message = if min == max {
                    self.trans_plural(&rule.exact_message, min)
                } else {
                    self.trans(
                        LENGTH_BETWEEN_MESSAGE,
                        &parameters([("{{ min }}", min), ("{{ max }}", max)]),
                    )
                };
                build::<Length>([
                    ("min", min.into()),
                    ("max", max.into()),
                    ("message", message.into()),
                ])
            }
            (Some(min), None) => build::<MinLength>([
                ("min", min.into()),
                ("message", self.trans_plural(&rule.min_message, min).into()),
            ]),
            // A length rule without any bound still fails loudly here
            (None, max) => build::<MaxLength>([
                ("max", max.map_or(Value::Null, Value::from)),
                (
                    "message",
                    max.map(|max| self.trans_plural(&rule.max_message, max))
                        .into(),
                ),
            ]),
        }
    }

    fn create_range(&self, rule: &rule::Range) -> Result<ParsleyConstraint> {
        let mut entries = Vec::new();

        if let Some(min) = rule.min {
            entries.push(("min", min.to_json()));
            entries.push((
                "minMessage",
                self.trans(&rule.min_message, &parameters([(LIMIT, min)])).into(),
            ));
        }

        if let Some(max) = rule.max {
            entries.push(("max", max.to_json()));
            entries.push((
                "maxMessage",
                self.trans(&rule.max_message, &parameters([(LIMIT, max)])).into(),
            ));
        }

        build::<Range>(entries)
    }
}

impl std::fmt::Debug for ConstraintFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConstraintFactory")
            .field("patterns", &self.patterns)
            .finish_non_exhaustive()
    }
}
