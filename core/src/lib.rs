//! Domain core for the todo service.
//!
//! # Overview
//! Holds everything the HTTP layer is not: the `Todo` record, the
//! `TaskStore` seam with its in-memory implementation, and the
//! creation-time validation rules. Nothing in this crate knows about
//! axum, status codes, or request routing.
//!
//! # Design
//! - `TaskStore` is a trait with exactly one production implementation;
//!   the seam exists so a persistent store can be swapped in later without
//!   touching the handlers.
//! - Validation is pure: it takes the existing ids and an explicit `now`,
//!   so tests are deterministic without a clock abstraction.
//! - Stored todos are immutable — the service has create and delete, no
//!   update.

pub mod store;
pub mod types;
pub mod validation;

pub use store::{InMemoryTaskStore, TaskStore};
pub use types::Todo;
pub use validation::{validate_new, ValidationError, ValidationErrors};
