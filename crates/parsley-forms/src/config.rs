// File: parsley-forms/src/config.rs
// Purpose: Configuration parsing from parsley.toml

use crate::factory::{ConstraintFactory, DatePatterns};
use crate::logging::RuleLogger;
use crate::translation::MessageCatalog;
use anyhow::{bail, Context, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// Parsley integration settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsleyConfig {
    /// Whether forms get Parsley attributes unless they opt out (default: true)
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Event that triggers client-side validation (default: "blur")
    #[serde(default = "default_trigger_event")]
    pub trigger_event: String,

    /// Patterns used for date, time and datetime rules
    #[serde(default)]
    pub patterns: DatePatterns,

    /// Message overrides, one table per catalog domain
    #[serde(default)]
    pub messages: MessageCatalog,
}

fn default_true() -> bool {
    true
}

fn default_trigger_event() -> String {
    "blur".to_string()
}

impl Default for ParsleyConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            trigger_event: default_trigger_event(),
            patterns: DatePatterns::default(),
            messages: MessageCatalog::default(),
        }
    }
}

impl ParsleyConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // Missing file means defaults
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid config file: {:?}", path))
    }

    /// Load configuration from default path (./parsley.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("parsley.toml")
    }

    /// Parse and validate configuration; empty input yields defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: ParsleyConfig =
            toml::from_str(content).context("Failed to parse Parsley configuration")?;
        config.validate()?;

        Ok(config)
    }

    /// Check that every pattern compiles and the trigger event is set
    pub fn validate(&self) -> Result<()> {
        let patterns = [
            ("date_time", &self.patterns.date_time),
            ("date", &self.patterns.date),
            ("time", &self.patterns.time),
        ];

        for (name, pattern) in patterns {
            Regex::new(pattern).with_context(|| format!("Invalid {} pattern: {}", name, pattern))?;
        }

        if self.trigger_event.trim().is_empty() {
            bail!("trigger_event must not be empty");
        }

        Ok(())
    }

    /// Factory translating through the configured message catalog
    pub fn factory(&self, logger: Arc<dyn RuleLogger>) -> ConstraintFactory {
        ConstraintFactory::new(
            Arc::new(self.messages.clone()),
            logger,
            self.patterns.clone(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ParsleyConfig::default();
        assert!(config.enabled);
        assert_eq!(config.trigger_event, "blur");
        assert_eq!(config.patterns.date, r"\d{4}-\d{2}-\d{2}");
        assert!(config.messages.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config() {
        let config = ParsleyConfig::from_toml_str("   \n").unwrap();
        assert_eq!(config, ParsleyConfig::default());
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let config = ParsleyConfig::load("does/not/exist/parsley.toml").unwrap();
        assert_eq!(config, ParsleyConfig::default());
    }

    #[test]
    fn test_custom_config() {
        let toml = r#"
            enabled = false
            trigger_event = "change"

            [patterns]
            time = '\d{2}:\d{2}:\d{2}'

            [messages.validators]
            "This value should not be blank." = "Ce champ est obligatoire."
        "#;
        let config = ParsleyConfig::from_toml_str(toml).unwrap();

        assert!(!config.enabled);
        assert_eq!(config.trigger_event, "change");
        assert_eq!(config.patterns.time, r"\d{2}:\d{2}:\d{2}");
        // Unset patterns keep their defaults
        assert_eq!(config.patterns.date, r"\d{4}-\d{2}-\d{2}");
        assert!(!config.messages.is_empty());
    }

    #[test]
    fn test_invalid_pattern_is_rejected() {
        let toml = r#"
            [patterns]
            date = '(\d{4}'
        "#;
        let err = ParsleyConfig::from_toml_str(toml).unwrap_err();
        assert!(format!("{:#}", err).contains("Invalid date pattern"));
    }

    #[test]
    fn test_empty_trigger_event_is_rejected() {
        let err = ParsleyConfig::from_toml_str(r#"trigger_event = " ""#).unwrap_err();
        assert!(err.to_string().contains("trigger_event"));
    }
}
