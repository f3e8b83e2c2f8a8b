//! Storage trait for entity rows

use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;

/// Type-erased storage for entity rows
///
/// Rows are JSON objects grouped by table name and keyed by a generated
/// `i64` id. All tables share one id sequence. The store is completely
/// agnostic to entity types; typed access goes through
/// [`Repository`](crate::core::repository::Repository).
///
/// Rows returned by the store always carry their `id` field.
#[async_trait]
pub trait EntityStore: Send + Sync {
    /// Insert a new row, assigning the next id from the shared sequence
    ///
    /// Any `id` already present in `row` is ignored.
    async fn insert(&self, table: &str, row: Value) -> Result<Value>;

    /// Insert or replace the row with the given id
    async fn upsert(&self, table: &str, id: i64, row: Value) -> Result<Value>;

    /// Get a row by id
    async fn find(&self, table: &str, id: i64) -> Result<Option<Value>>;

    /// Get the rows matching the given ids, in id order
    ///
    /// Unknown ids are skipped.
    async fn find_many(&self, table: &str, ids: &[i64]) -> Result<Vec<Value>>;

    /// List all rows of a table, in id order
    async fn find_all(&self, table: &str) -> Result<Vec<Value>>;

    /// Delete a row; deleting a missing row is not an error
    async fn delete(&self, table: &str, id: i64) -> Result<()>;

    /// Number of rows in a table
    async fn count(&self, table: &str) -> Result<u64>;
}

/// Set the `id` field of a row object
pub(crate) fn with_id(mut row: Value, id: i64) -> Value {
    if let Some(obj) = row.as_object_mut() {
        obj.insert("id".to_string(), Value::from(id));
    }
    row
}

/// Remove the `id` field from a row object (it lives in its own column)
#[cfg(feature = "postgres")]
pub(crate) fn without_id(mut row: Value) -> Value {
    if let Some(obj) = row.as_object_mut() {
        obj.remove("id");
    }
    row
}
