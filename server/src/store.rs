//! Lock-guarded, insertion-ordered collection of to-do records.
//!
//! # Design
//! One `RwLock<Vec<Todo>>` shared behind an `Arc`. Every operation holds the
//! lock for its whole duration, including the linear id scan, so writers are
//! totally ordered by lock acquisition and readers always observe the list
//! between two writes. Reads share the lock; writes take it exclusively.
//!
//! Identifiers are not checked for uniqueness on insert. Lookups resolve to
//! the first record in insertion order carrying the id.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::error::StoreError;
use crate::types::{seed_records, Todo};

/// Shared handle to the record list. Clones point at the same list.
#[derive(Clone, Debug, Default)]
pub struct Store {
    records: Arc<RwLock<Vec<Todo>>>,
}

impl From<Vec<Todo>> for Store {
    fn from(records: Vec<Todo>) -> Self {
        Self {
            records: Arc::new(RwLock::new(records)),
        }
    }
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding the three records a freshly started service serves.
    pub fn seeded() -> Self {
        Self::from(seed_records())
    }

    /// Snapshot of every record in insertion order.
    pub async fn list(&self) -> Vec<Todo> {
        self.records.read().await.clone()
    }

    /// Append `todo` unconditionally and return it as stored.
    pub async fn insert(&self, todo: Todo) -> Todo {
        let mut records = self.records.write().await;
        records.push(todo.clone());
        todo
    }

    /// Position and value of the first record with `id`.
    pub async fn find_by_id(&self, id: i64) -> Result<(usize, Todo), StoreError> {
        let records = self.records.read().await;
        let index = position(&records, id)?;
        Ok((index, records[index].clone()))
    }

    /// Overwrite the first record with `id` by `todo`.
    ///
    /// The replacement is stored as given; its own `id` is not forced to match
    /// the one used for the lookup.
    pub async fn replace(&self, id: i64, todo: Todo) -> Result<Todo, StoreError> {
        let mut records = self.records.write().await;
        let index = position(&records, id)?;
        records[index] = todo.clone();
        Ok(todo)
    }

    /// Remove the first record with `id`, shifting later records down.
    pub async fn remove(&self, id: i64) -> Result<Todo, StoreError> {
        let mut records = self.records.write().await;
        let index = position(&records, id)?;
        Ok(records.remove(index))
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

fn position(records: &[Todo], id: i64) -> Result<usize, StoreError> {
    records
        .iter()
        .position(|todo| todo.id == id)
        .ok_or(StoreError::NotFound)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(records: &[Todo]) -> Vec<i64> {
        records.iter().map(|todo| todo.id).collect()
    }

    #[tokio::test]
    async fn new_store_is_empty() {
        let store = Store::new();
        assert!(store.is_empty().await);
        assert!(store.list().await.is_empty());
    }

    #[tokio::test]
    async fn seeded_store_lists_seeds_in_order() {
        let store = Store::seeded();
        let records = store.list().await;
        assert_eq!(ids(&records), vec![1, 2, 3]);
        assert!(records.iter().all(|todo| !todo.is_done));
    }

    #[tokio::test]
    async fn insert_appends_at_the_end() {
        let store = Store::seeded();
        let todo = Todo::new(4, "T", "D", false);
        let inserted = store.insert(todo.clone()).await;
        assert_eq!(inserted, todo);
        assert_eq!(ids(&store.list().await), vec![1, 2, 3, 4]);
    }

    #[tokio::test]
    async fn insert_accepts_duplicate_ids() {
        let store = Store::seeded();
        store.insert(Todo::new(1, "Dup", "", false)).await;
        assert_eq!(store.len().await, 4);

        let (index, found) = store.find_by_id(1).await.unwrap();
        assert_eq!(index, 0);
        assert_eq!(found.title, "Test 1");
    }

    #[tokio::test]
    async fn find_by_id_reports_position() {
        let store = Store::seeded();
        let (index, found) = store.find_by_id(3).await.unwrap();
        assert_eq!(index, 2);
        assert_eq!(found.description, "Description 3");
    }

    #[tokio::test]
    async fn find_by_id_missing() {
        let store = Store::seeded();
        assert_eq!(store.find_by_id(42).await, Err(StoreError::NotFound));
    }

    #[tokio::test]
    async fn replace_overwrites_in_place() {
        let store = Store::seeded();
        let changed = Todo::new(2, "Changed", "D2", true);
        let stored = store.replace(2, changed.clone()).await.unwrap();
        assert_eq!(stored, changed);

        let records = store.list().await;
        assert_eq!(records[1], changed);
        assert_eq!(records[0].title, "Test 1");
        assert_eq!(records[2].title, "Test 3");
    }

    #[tokio::test]
    async fn replace_trusts_the_new_id() {
        let store = Store::seeded();
        store.replace(2, Todo::new(20, "Moved", "", false)).await.unwrap();
        assert_eq!(ids(&store.list().await), vec![1, 20, 3]);
        assert!(store.find_by_id(2).await.is_err());
    }

    #[tokio::test]
    async fn replace_missing_leaves_store_unchanged() {
        let store = Store::seeded();
        let before = store.list().await;
        let result = store.replace(99, Todo::new(99, "X", "Y", true)).await;
        assert_eq!(result, Err(StoreError::NotFound));
        assert_eq!(store.list().await, before);
    }

    #[tokio::test]
    async fn remove_shifts_later_records() {
        let store = Store::seeded();
        let removed = store.remove(1).await.unwrap();
        assert_eq!(removed.title, "Test 1");
        assert_eq!(ids(&store.list().await), vec![2, 3]);
        assert_eq!(store.find_by_id(3).await.unwrap().0, 1);
    }

    #[tokio::test]
    async fn remove_takes_first_duplicate_only() {
        let store = Store::from(vec![
            Todo::new(5, "first", "", false),
            Todo::new(5, "second", "", false),
        ]);
        let removed = store.remove(5).await.unwrap();
        assert_eq!(removed.title, "first");
        assert_eq!(store.list().await[0].title, "second");
    }

    #[tokio::test]
    async fn remove_missing_leaves_store_unchanged() {
        let store = Store::seeded();
        assert_eq!(store.remove(0).await, Err(StoreError::NotFound));
        assert_eq!(store.len().await, 3);
    }

    #[tokio::test]
    async fn clones_share_the_same_list() {
        let store = Store::new();
        let other = store.clone();
        other.insert(Todo::new(1, "shared", "", false)).await;
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_inserts_lose_nothing() {
        let store = Store::seeded();
        let handles: Vec<_> = (100..200)
            .map(|id| {
                let store = store.clone();
                tokio::spawn(async move { store.insert(Todo::new(id, "c", "", false)).await })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap();
        }

        let mut found = ids(&store.list().await);
        assert_eq!(found.len(), 103);
        assert_eq!(&found[..3], &[1, 2, 3]);
        found.sort_unstable();
        let mut expected: Vec<i64> = vec![1, 2, 3];
        expected.extend(100..200);
        assert_eq!(found, expected);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_replaces_leave_one_winner() {
        let store = Store::seeded();
        let handles: Vec<_> = (0..50)
            .map(|n| {
                let store = store.clone();
                tokio::spawn(async move {
                    store
                        .replace(2, Todo::new(2, &format!("writer {n}"), "", n % 2 == 0))
                        .await
                })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        let records = store.list().await;
        assert_eq!(ids(&records), vec![1, 2, 3]);
        let winner: usize = records[1]
            .title
            .strip_prefix("writer ")
            .and_then(|n| n.parse().ok())
            .unwrap();
        assert_eq!(records[1].is_done, winner % 2 == 0);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_removes_remove_each_record_once() {
        let store = Store::from((0..64).map(|id| Todo::new(id, "", "", false)).collect::<Vec<_>>());
        let handles: Vec<_> = (0..64)
            .map(|id| {
                let store = store.clone();
                tokio::spawn(async move { store.remove(id).await })
            })
            .collect();
        let mut removed = Vec::new();
        for handle in handles {
            removed.push(handle.await.unwrap().unwrap().id);
        }
        removed.sort_unstable();
        assert_eq!(removed, (0..64).collect::<Vec<_>>());
        assert!(store.is_empty().await);
    }
}
