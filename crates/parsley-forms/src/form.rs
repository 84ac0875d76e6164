// File: parsley-forms/src/form.rs
// Purpose: Form view generation with Parsley attributes derived from field rules

use crate::builder::{merge_attributes, ConstraintBuilder};
use crate::config::ParsleyConfig;
use crate::factory::ConstraintFactory;
use crate::logging::TracingLogger;
use crate::rule::Rule;
use parsley_constraints::{Attributes, ConstraintError};
use serde::Deserialize;
use std::sync::Arc;
use thiserror::Error;

/// Form attributes whose presence alone carries their meaning
const BOOLEAN_ATTRIBUTES: &[&str] = &["novalidate", "data-parsley-validate"];

/// Attribute set of a rendered element
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldAttrs {
    pub attrs: Attributes,
}

impl FieldAttrs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.attrs.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.attrs.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.attrs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }

    /// Add attributes without overwriting existing keys
    pub fn merge(&mut self, attributes: Attributes) {
        merge_attributes(&mut self.attrs, attributes);
    }

    /// Render as HTML attributes; empty boolean attributes render as bare names
    pub fn render(&self) -> String {
        self.attrs
            .iter()
            .map(|(k, v)| {
                if v.is_empty() && BOOLEAN_ATTRIBUTES.contains(&k.as_str()) {
                    k.clone()
                } else {
                    format!("{}=\"{}\"", k, escape_attribute(v))
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl From<Attributes> for FieldAttrs {
    fn from(attrs: Attributes) -> Self {
        Self { attrs }
    }
}

fn escape_attribute(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// A form field and the server-side rules attached to it
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FormField {
    pub name: String,

    #[serde(default)]
    pub rules: Vec<Rule>,

    /// Attributes set by the caller; never overwritten
    #[serde(default)]
    pub attrs: Attributes,
}

impl FormField {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn rule(mut self, rule: impl Into<Rule>) -> Self {
        self.rules.push(rule.into());
        self
    }

    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }
}

/// Per-form overrides of the configured defaults
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FormOptions {
    #[serde(default)]
    pub enabled: Option<bool>,

    #[serde(default)]
    pub trigger_event: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView {
    pub name: String,
    pub attrs: FieldAttrs,
}

/// Form element attributes plus one attribute set per field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormView {
    pub attrs: FieldAttrs,
    pub fields: Vec<FieldView>,
}

impl FormView {
    pub fn field(&self, name: &str) -> Option<&FieldView> {
        self.fields.iter().find(|field| field.name == name)
    }
}

#[derive(Debug, Error)]
pub enum FormError {
    #[error("invalid constraint on field \"{field}\"")]
    Field {
        field: String,
        #[source]
        source: ConstraintError,
    },
}

/// Builds Parsley-enabled form views
#[derive(Debug, Clone)]
pub struct ParsleyForm {
    factory: ConstraintFactory,
    enabled: bool,
    trigger_event: String,
}

impl ParsleyForm {
    pub fn new(factory: ConstraintFactory, enabled: bool, trigger_event: impl Into<String>) -> Self {
        Self {
            factory,
            enabled,
            trigger_event: trigger_event.into(),
        }
    }

    /// Wire a form builder from configuration, logging through `tracing`
    pub fn from_config(config: &ParsleyConfig) -> anyhow::Result<Self> {
        config.validate()?;

        Ok(Self::new(
            config.factory(Arc::new(TracingLogger)),
            config.enabled,
            config.trigger_event.clone(),
        ))
    }

    pub fn factory(&self) -> &ConstraintFactory {
        &self.factory
    }

    /// Build the view of a form.
    ///
    /// When enabled, the form element gets `novalidate`,
    /// `data-parsley-validate` and `data-parsley-trigger`, and every field
    /// gets the attributes of its constraints. A malformed constraint on any
    /// field fails the whole view.
    pub fn build_view(
        &self,
        form_attrs: Attributes,
        fields: &[FormField],
        options: &FormOptions,
    ) -> Result<FormView, FormError> {
        let mut attrs = FieldAttrs::from(form_attrs);

        if !options.enabled.unwrap_or(self.enabled) {
            let fields = fields
                .iter()
                .map(|field| FieldView {
                    name: field.name.clone(),
                    attrs: FieldAttrs::from(field.attrs.clone()),
                })
                .collect();
            return Ok(FormView { attrs, fields });
        }

        let trigger_event = options
            .trigger_event
            .clone()
            .unwrap_or_else(|| self.trigger_event.clone());
        attrs
            .attrs
            .insert("data-parsley-trigger".to_string(), trigger_event);
        attrs.merge(
            [
                ("novalidate".to_string(), String::new()),
                ("data-parsley-validate".to_string(), String::new()),
            ]
            .into_iter()
            .collect(),
        );

        let builder = ConstraintBuilder::new(&self.factory);
        let fields = fields
            .iter()
            .map(|field| -> Result<FieldView, FormError> {
                let constraints =
                    builder
                        .attributes(&field.rules)
                        .map_err(|source| FormError::Field {
                            field: field.name.clone(),
                            source,
                        })?;

                let mut field_attrs = FieldAttrs::from(field.attrs.clone());
                field_attrs.merge(constraints);

                Ok(FieldView {
                    name: field.name.clone(),
                    attrs: field_attrs,
                })
            })
            .collect::<Result<Vec<_>, FormError>>()?;

        Ok(FormView { attrs, fields })
    }
}
