// File: parsley-forms/src/translation.rs
// Purpose: Translation capability used for constraint messages, plus a simple in-memory catalog

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Catalog domain holding validation messages
pub const VALIDATORS_DOMAIN: &str = "validators";

/// Placeholder to value substitutions, e.g. `{{ limit }}` -> `5`
pub type Parameters = BTreeMap<String, String>;

/// Build a parameter map from placeholder/value pairs
pub fn parameters<'a, V: ToString>(pairs: impl IntoIterator<Item = (&'a str, V)>) -> Parameters {
    pairs
        .into_iter()
        .map(|(placeholder, value)| (placeholder.to_string(), value.to_string()))
        .collect()
}

/// Message translation service.
///
/// Implementations must be safe to share between threads; the factory calls
/// them synchronously and expects no side effects.
pub trait Translator: Send + Sync {
    /// Translate a message id, substituting `parameters`
    fn translate(&self, id: &str, parameters: &Parameters, domain: &str) -> String;

    /// Translate a pluralizable message id (`singular|plural`), picking the
    /// variant for `count`
    fn translate_plural(&self, id: &str, count: i64, parameters: &Parameters, domain: &str)
        -> String;
}

// `{1,2,3} text`
static EXPLICIT_SET: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)^\s*\{\s*(-?\d+(?:\s*,\s*-?\d+)*)\s*\}\s*(.*)$").unwrap());

// `[1,Inf[ text`, `]0,10] text`
static INTERVAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)^\s*([\[\]])\s*(-Inf|-?\d+)\s*,\s*(\+?Inf|-?\d+)\s*([\[\]])\s*(.*)$").unwrap()
});

fn interval_contains(left: &str, low: &str, high: &str, right: &str, count: i64) -> bool {
    let above_low = match low.parse::<i64>() {
        Ok(low) if left == "[" => count >= low,
        Ok(low) => count > low,
        Err(_) => true,
    };
    let below_high = match high.parse::<i64>() {
        Ok(high) if right == "]" => count <= high,
        Ok(high) => count < high,
        Err(_) => true,
    };
    above_low && below_high
}

/// Pick the variant of a `singular|plural` template matching `count`.
///
/// Variants prefixed with an explicit set (`{0}`) or interval (`[2,Inf[`) win
/// when they match; otherwise the first plain variant is used for a count of
/// one and the second for anything else.
pub fn select_plural(template: &str, count: i64) -> &str {
    let mut standard = Vec::new();

    for variant in template.split('|') {
        if let Some(caps) = EXPLICIT_SET.captures(variant) {
            let matches = caps[1]
                .split(',')
                .filter_map(|n| n.trim().parse::<i64>().ok())
                .any(|n| n == count);
            if matches {
                return caps.get(2).map_or("", |m| m.as_str());
            }
        } else if let Some(caps) = INTERVAL.captures(variant) {
            if interval_contains(&caps[1], &caps[2], &caps[3], &caps[4], count) {
                return caps.get(5).map_or("", |m| m.as_str());
            }
        } else {
            standard.push(variant);
        }
    }

    let index = if count.abs() == 1 { 0 } else { 1 };
    match standard.len() {
        0 => template,
        len => standard[index.min(len - 1)],
    }
}

/// Replace every placeholder of `parameters` in `template`
pub fn substitute(template: &str, parameters: &Parameters) -> String {
    parameters
        .iter()
        .fold(template.to_string(), |message, (placeholder, value)| {
            message.replace(placeholder.as_str(), value)
        })
}

/// In-memory translator: per-domain overrides keyed by message id.
///
/// Ids without an override translate to themselves, so an empty catalog
/// yields the default English messages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageCatalog {
    domains: HashMap<String, HashMap<String, String>>,
}

impl MessageCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a catalog from TOML, one table per domain
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse message catalog")
    }

    pub fn with_message(
        mut self,
        domain: impl Into<String>,
        id: impl Into<String>,
        template: impl Into<String>,
    ) -> Self {
        self.domains
            .entry(domain.into())
            .or_default()
            .insert(id.into(), template.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.domains.values().all(HashMap::is_empty)
    }

    fn lookup<'a>(&'a self, id: &'a str, domain: &str) -> &'a str {
        self.domains
            .get(domain)
            .and_then(|messages| messages.get(id))
            .map_or(id, String::as_str)
    }
}

impl Translator for MessageCatalog {
    fn translate(&self, id: &str, parameters: &Parameters, domain: &str) -> String {
        substitute(self.lookup(id, domain), parameters)
    }

    fn translate_plural(
        &self,
        id: &str,
        count: i64,
        parameters: &Parameters,
        domain: &str,
    ) -> String {
        substitute(select_plural(self.lookup(id, domain), count), parameters)
    }
}
