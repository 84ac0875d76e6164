//! Parsley Forms
//!
//! Converts server-side validation rules attached to form fields into
//! `data-parsley-*` attributes for client-side validation.
//!
//! ```ignore
//! let form = ParsleyForm::from_config(&ParsleyConfig::load_default()?)?;
//! let fields = vec![
//!     FormField::new("email").rule(rule::NotBlank::default()).rule(rule::Email::default()),
//! ];
//! let view = form.build_view(Attributes::new(), &fields, &FormOptions::default())?;
//!
//! // data-parsley-required="true" data-parsley-required-message="..." data-parsley-type="email" ...
//! println!("{}", view.field("email").unwrap().attrs.render());
//! ```

pub mod builder;
pub mod config;
pub mod factory;
pub mod form;
pub mod logging;
pub mod rule;
pub mod translation;

// Re-export the constraint model
pub use parsley_constraints::{
    self as constraints, Attributes, Constraint, ConstraintError, Number, ParsleyConstraint,
};

pub use builder::{merge_attributes, normalize_all, ConstraintBuilder};
pub use config::ParsleyConfig;
pub use factory::{ConstraintFactory, DatePatterns};
pub use form::{FieldAttrs, FieldView, FormError, FormField, FormOptions, FormView, ParsleyForm};
pub use logging::{NullLogger, RuleLogger, TracingLogger};
pub use rule::Rule;
pub use translation::{MessageCatalog, Parameters, Translator, VALIDATORS_DOMAIN};
