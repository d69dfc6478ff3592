//! Declarative Validation Model
//!
//! Table-driven validation for flat records of string fields:
//! - [`Check`] - a single predicate with the message reported when it fails
//! - [`FieldRule`] - an ordered list of checks for one field
//! - [`RecordRule`] - a predicate over the whole record, attributed to one field
//! - [`ValidationErrors`] - field path → message mapping
//!
//! ## Evaluation order
//! 1. Every field rule runs independently; each field stops at its first
//!    failing check. All failing fields are reported together.
//! 2. Only when no field failed, record rules run in declared order and the
//!    first failing one is the only error reported.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Validation result type alias
pub type ValidationResult<T> = Result<T, ValidationErrors>;

// ============================================================================
// Field rules
// ============================================================================

/// A predicate over a single field value and the message reported on failure
#[derive(Clone, Copy)]
pub struct Check {
    pub predicate: fn(&str) -> bool,
    pub message: &'static str,
}

impl Check {
    pub const fn new(predicate: fn(&str) -> bool, message: &'static str) -> Self {
        Self { predicate, message }
    }
}

impl fmt::Debug for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Check")
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

/// Rule for one field: optional flag plus ordered checks
///
/// An optional field holding the empty string is valid without running
/// any check.
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub field: &'static str,
    pub optional: bool,
    pub checks: &'static [Check],
}

impl FieldRule {
    /// Rule for a field that must hold a value
    pub const fn required(field: &'static str, checks: &'static [Check]) -> Self {
        Self {
            field,
            optional: false,
            checks,
        }
    }

    /// Rule for a field where the empty string means "not provided"
    pub const fn optional(field: &'static str, checks: &'static [Check]) -> Self {
        Self {
            field,
            optional: true,
            checks,
        }
    }

    /// Run the checks in order, returning the first failing message
    pub fn check(&self, value: &str) -> Result<(), &'static str> {
        if self.optional && value.is_empty() {
            return Ok(());
        }
        match self.checks.iter().find(|c| !(c.predicate)(value)) {
            Some(failed) => Err(failed.message),
            None => Ok(()),
        }
    }
}

// ============================================================================
// Record rules
// ============================================================================

/// A predicate over a whole record, reported against an anchor field
pub struct RecordRule<R> {
    pub field: &'static str,
    pub message: &'static str,
    pub predicate: fn(&R) -> bool,
}

impl<R> RecordRule<R> {
    pub const fn new(field: &'static str, message: &'static str, predicate: fn(&R) -> bool) -> Self {
        Self {
            field,
            message,
            predicate,
        }
    }
}

impl<R> fmt::Debug for RecordRule<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordRule")
            .field("field", &self.field)
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

/// A record whose string fields can be looked up by path
pub trait FieldSource {
    fn field_value(&self, field: &str) -> Option<&str>;
}

/// Validate a record against field rules then record rules
///
/// # Panics
/// Panics if a field rule names a field the record does not expose. That is
/// a wiring mistake in the rule table, never a property of the input.
pub fn validate_record<R: FieldSource>(
    record: R,
    field_rules: &[FieldRule],
    record_rules: &[RecordRule<R>],
) -> ValidationResult<R> {
    let mut errors = ValidationErrors::new();

    for rule in field_rules {
        let value = record
            .field_value(rule.field)
            .unwrap_or_else(|| panic!("record has no field named `{}`", rule.field));
        if let Err(message) = rule.check(value) {
            errors.insert(rule.field, message);
        }
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    if let Some(failed) = record_rules.iter().find(|r| !(r.predicate)(&record)) {
        return Err(ValidationErrors::single(failed.field, failed.message));
    }

    Ok(record)
}

// ============================================================================
// ValidationErrors
// ============================================================================

/// Field path → message mapping
///
/// Keys are unique; ordered so that serialization is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<String, String>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.insert(field, message);
        errors
    }

    /// Attach a message to a field. The first message for a field is kept.
    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Field paths that failed, in key order
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn into_inner(self) -> BTreeMap<String, String> {
        self.0
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}
