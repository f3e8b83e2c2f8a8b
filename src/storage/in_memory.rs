//! In-memory implementation of EntityStore for testing and development

use crate::core::EntityStore;
use crate::core::service::with_id;
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, RwLock};

type Tables = HashMap<String, BTreeMap<i64, Value>>;

/// In-memory entity store
///
/// Useful for testing and development. Uses RwLock for thread-safe access;
/// rows are kept in id order per table and ids come from one shared counter.
#[derive(Clone)]
pub struct InMemoryEntityStore {
    tables: Arc<RwLock<Tables>>,
    sequence: Arc<AtomicI64>,
}

impl InMemoryEntityStore {
    /// Create a new in-memory store
    pub fn new() -> Self {
        Self {
            tables: Arc::new(RwLock::new(HashMap::new())),
            sequence: Arc::new(AtomicI64::new(0)),
        }
    }

    /// Fails once an upsert has pushed the sequence to `i64::MAX`
    fn next_id(&self) -> Result<i64> {
        self.sequence
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |current| {
                current.checked_add(1)
            })
            .map(|previous| previous + 1)
            .map_err(|_| anyhow!("id sequence exhausted"))
    }
}

impl Default for InMemoryEntityStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EntityStore for InMemoryEntityStore {
    async fn insert(&self, table: &str, row: Value) -> Result<Value> {
        let mut tables = self
            .tables
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        let id = self.next_id()?;
        let row = with_id(row, id);
        tables
            .entry(table.to_string())
            .or_default()
            .insert(id, row.clone());

        Ok(row)
    }

    async fn upsert(&self, table: &str, id: i64, row: Value) -> Result<Value> {
        let mut tables = self
            .tables
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        // Keep generated ids clear of explicitly chosen ones
        self.sequence.fetch_max(id, Ordering::SeqCst);

        let row = with_id(row, id);
        tables
            .entry(table.to_string())
            .or_default()
            .insert(id, row.clone());

        Ok(row)
    }

    async fn find(&self, table: &str, id: i64) -> Result<Option<Value>> {
        let tables = self
            .tables
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(tables.get(table).and_then(|rows| rows.get(&id)).cloned())
    }

    async fn find_many(&self, table: &str, ids: &[i64]) -> Result<Vec<Value>> {
        let tables = self
            .tables
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        let Some(rows) = tables.get(table) else {
            return Ok(Vec::new());
        };

        Ok(rows
            .iter()
            .filter(|(id, _)| ids.contains(id))
            .map(|(_, row)| row.clone())
            .collect())
    }

    async fn find_all(&self, table: &str) -> Result<Vec<Value>> {
        let tables = self
            .tables
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(tables
            .get(table)
            .map(|rows| rows.values().cloned().collect())
            .unwrap_or_default())
    }

    async fn delete(&self, table: &str, id: i64) -> Result<()> {
        let mut tables = self
            .tables
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        if let Some(rows) = tables.get_mut(table) {
            rows.remove(&id);
        }

        Ok(())
    }

    async fn count(&self, table: &str) -> Result<u64> {
        let tables = self
            .tables
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(tables.get(table).map(|rows| rows.len() as u64).unwrap_or(0))
    }
}
