//! The task store seam and its in-memory implementation.
//!
//! # Design
//! `TaskStore` is the single capability set the handlers are written
//! against: list, get, add, delete. `InMemoryTaskStore` is the only
//! production implementation; the trait keeps the seam swappable for a
//! future persistent store.
//!
//! `add` is deliberately unconditional. Uniqueness and validity checks
//! belong to the validation layer on the creation path, so a caller that
//! bypasses validation can introduce duplicate ids — under duplicates,
//! `get_by_id` returns the first match and callers must not rely on which
//! one wins.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::types::Todo;

/// Capability set over the todo collection.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Returns every stored todo in insertion order.
    async fn list_all(&self) -> Vec<Todo>;

    /// Returns the todo with `id`, or `None` if absent.
    async fn get_by_id(&self, id: i64) -> Option<Todo>;

    /// Appends `todo` unconditionally and returns the stored value.
    async fn add(&self, todo: Todo) -> Todo;

    /// Removes every todo with `id`. A missing id is a successful no-op.
    async fn delete_by_id(&self, id: i64);
}

/// Process-lifetime store backed by an order-preserving `Vec`.
///
/// The `RwLock` makes each operation atomic with respect to the others;
/// no operation spans two lock acquisitions, so concurrent handlers can
/// never observe a half-applied mutation.
#[derive(Debug, Default)]
pub struct InMemoryTaskStore {
    todos: RwLock<Vec<Todo>>,
}

impl InMemoryTaskStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TaskStore for InMemoryTaskStore {
    async fn list_all(&self) -> Vec<Todo> {
        self.todos.read().await.clone()
    }

    async fn get_by_id(&self, id: i64) -> Option<Todo> {
        self.todos.read().await.iter().find(|t| t.id == id).cloned()
    }

    async fn add(&self, todo: Todo) -> Todo {
        self.todos.write().await.push(todo.clone());
        todo
    }

    async fn delete_by_id(&self, id: i64) {
        self.todos.write().await.retain(|t| t.id != id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn todo(id: i64, name: &str) -> Todo {
        Todo {
            id,
            name: name.to_string(),
            due_date: Utc.with_ymd_and_hms(2030, 6, 1, 12, 0, 0).unwrap(),
            is_completed: false,
        }
    }

    #[tokio::test]
    async fn starts_empty() {
        let store = InMemoryTaskStore::new();
        assert!(store.list_all().await.is_empty());
    }

    #[tokio::test]
    async fn list_preserves_insertion_order() {
        let store = InMemoryTaskStore::new();
        store.add(todo(3, "third")).await;
        store.add(todo(1, "first")).await;
        store.add(todo(2, "second")).await;

        let ids: Vec<i64> = store.list_all().await.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[tokio::test]
    async fn get_by_id_finds_stored_todo() {
        let store = InMemoryTaskStore::new();
        store.add(todo(1, "a")).await;
        store.add(todo(2, "b")).await;

        let found = store.get_by_id(2).await.unwrap();
        assert_eq!(found.name, "b");
        assert!(store.get_by_id(99).await.is_none());
    }

    #[tokio::test]
    async fn add_returns_the_stored_value() {
        let store = InMemoryTaskStore::new();
        let stored = store.add(todo(1, "a")).await;
        assert_eq!(Some(stored), store.get_by_id(1).await);
    }

    #[tokio::test]
    async fn add_does_not_deduplicate() {
        // Dedup is the validation layer's job; the store appends blindly.
        let store = InMemoryTaskStore::new();
        store.add(todo(1, "a")).await;
        store.add(todo(1, "b")).await;
        assert_eq!(store.list_all().await.len(), 2);
    }

    #[tokio::test]
    async fn get_by_id_under_duplicates_returns_first_match() {
        let store = InMemoryTaskStore::new();
        store.add(todo(1, "a")).await;
        store.add(todo(1, "b")).await;
        assert_eq!(store.get_by_id(1).await.unwrap().name, "a");
    }

    #[tokio::test]
    async fn delete_removes_all_matches() {
        let store = InMemoryTaskStore::new();
        store.add(todo(1, "a")).await;
        store.add(todo(2, "b")).await;
        store.add(todo(1, "c")).await;
        store.delete_by_id(1).await;

        let ids: Vec<i64> = store.list_all().await.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![2]);
    }

    #[tokio::test]
    async fn delete_of_missing_id_is_a_no_op() {
        let store = InMemoryTaskStore::new();
        store.add(todo(1, "a")).await;
        store.delete_by_id(99).await;
        store.delete_by_id(99).await;
        assert_eq!(store.list_all().await.len(), 1);
    }
}
