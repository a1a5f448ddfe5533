//! Creation-time validation rules.
//!
//! # Design
//! Three independent rules guard the creation path: the due date must not
//! already have passed, a todo cannot arrive pre-completed, and the id
//! must not collide with a stored todo. The rules are cumulative — every
//! violation is reported, keyed by the wire-level field name, rather than
//! short-circuiting at the first failure.
//!
//! The rule set is pure: callers pass the existing ids and an explicit
//! `now`, so tests never need a clock abstraction.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

use crate::types::Todo;

/// A single violated creation rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The candidate's due date is earlier than the current time.
    #[error("due date must not be in the past")]
    PastDueDate,

    /// The candidate arrived with `isCompleted` already set.
    #[error("a todo cannot be created in a completed state")]
    AlreadyCompleted,

    /// A stored todo already carries the candidate's id.
    #[error("a todo with this id already exists")]
    DuplicateId,
}

impl ValidationError {
    /// Wire-level field name the violation is reported under.
    pub fn field(self) -> &'static str {
        match self {
            ValidationError::PastDueDate => "dueDate",
            ValidationError::AlreadyCompleted => "isCompleted",
            ValidationError::DuplicateId => "id",
        }
    }
}

/// Every violation for one candidate, keyed by field name.
///
/// Serializes to the 422 response body: a map from field name to an
/// array of human-readable messages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<&'static str, Vec<String>>);

impl ValidationErrors {
    fn push(&mut self, error: ValidationError) {
        self.0.entry(error.field()).or_default().push(error.to_string());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Field names with at least one violation, in key order.
    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.keys().copied()
    }
}

/// Checks a creation candidate against every rule.
///
/// `existing_ids` are the ids currently in the store and `now` is the
/// instant the due date is compared against. `Ok(())` means the candidate
/// may be forwarded to the store's `add`.
pub fn validate_new(
    candidate: &Todo,
    existing_ids: &[i64],
    now: DateTime<Utc>,
) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();

    if candidate.due_date < now {
        errors.push(ValidationError::PastDueDate);
    }
    if candidate.is_completed {
        errors.push(ValidationError::AlreadyCompleted);
    }
    if existing_ids.contains(&candidate.id) {
        errors.push(ValidationError::DuplicateId);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
