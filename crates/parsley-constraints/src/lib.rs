//! Parsley Constraints
//!
//! Immutable descriptions of client-enforceable rules. Each constraint checks
//! its options once, at construction, and renders itself into a flat map of
//! `data-parsley-*` attributes for a client-side validator to consume.

pub mod constraint;
pub mod error;
pub mod length;
pub mod numeric;
pub mod options;
pub mod text;

/// Message used when a constraint is built without one
pub const DEFAULT_MESSAGE: &str = "Invalid.";

pub use constraint::{Attributes, Constraint, ParsleyConstraint, MESSAGE_SUFFIX};
pub use error::{ConstraintError, Result};
pub use length::{Length, MaxLength, MinLength};
pub use numeric::{GreaterThan, LessThan, Range};
pub use options::{Number, Options};
pub use text::{Pattern, Required, Type};
