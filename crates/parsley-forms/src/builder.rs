// File: parsley-forms/src/builder.rs
// Purpose: Turn all rules of one field into constraints and a merged attribute set

use crate::factory::ConstraintFactory;
use crate::rule::Rule;
use parsley_constraints::{Attributes, ParsleyConstraint, Result};

/// Runs the factory over every rule attached to a field
#[derive(Debug, Clone, Copy)]
pub struct ConstraintBuilder<'a> {
    factory: &'a ConstraintFactory,
}

impl<'a> ConstraintBuilder<'a> {
    pub fn new(factory: &'a ConstraintFactory) -> Self {
        Self { factory }
    }

    /// Constraints for `rules`, in rule order.
    ///
    /// Rules without a client-side counterpart are skipped; the first
    /// construction error aborts the whole field.
    pub fn build(&self, rules: &[Rule]) -> Result<Vec<ParsleyConstraint>> {
        rules
            .iter()
            .filter_map(|rule| self.factory.create(rule).transpose())
            .collect()
    }

    /// Build and normalize in one step
    pub fn attributes(&self, rules: &[Rule]) -> Result<Attributes> {
        Ok(normalize_all(&self.build(rules)?))
    }
}

/// Merge `source` into `target`; keys already in `target` are kept
pub fn merge_attributes(target: &mut Attributes, source: Attributes) {
    for (key, value) in source {
        target.entry(key).or_insert(value);
    }
}

/// Normalize constraints in order, first constraint winning on collisions
pub fn normalize_all(constraints: &[ParsleyConstraint]) -> Attributes {
    let mut attributes = Attributes::new();
    for constraint in constraints {
        merge_attributes(&mut attributes, constraint.normalize());
    }
    attributes
}
