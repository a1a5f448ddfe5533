//! Domain types for the todo service.
//!
//! # Design
//! `Todo` doubles as the stored record and the wire type: the service
//! never mutates a stored record, so there is no separate create/update
//! DTO pair. Wire names are camelCase (`dueDate`, `isCompleted`) to match
//! the published JSON contract; `dueDate` serializes as RFC 3339.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single todo record.
///
/// The id is supplied by the caller and intended to be unique. Uniqueness
/// is enforced on the creation path by the validation layer, not by this
/// type or by the store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: i64,
    pub name: String,
    pub due_date: DateTime<Utc>,
    pub is_completed: bool,
}
