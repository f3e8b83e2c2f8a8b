//! Typed repository over an [`EntityStore`]
//!
//! `Repository<T>` is a pass-through to the store's find/save/delete
//! operations with two additions: eager loading of many-to-many relations
//! and the reverse one-to-one "is-null" filter.

use crate::core::entity::{Entity, ReverseOneToOne};
use crate::core::error::{ApiError, ApiResult};
use crate::core::service::EntityStore;
use serde_json::Value;
use std::collections::HashSet;
use std::marker::PhantomData;
use std::sync::Arc;

/// Repository for one entity type
pub struct Repository<T> {
    store: Arc<dyn EntityStore>,
    _marker: PhantomData<T>,
}

impl<T> Clone for Repository<T> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T: Entity> Repository<T> {
    pub fn new(store: Arc<dyn EntityStore>) -> Self {
        Self {
            store,
            _marker: PhantomData,
        }
    }

    /// Persist an entity
    ///
    /// Without an id the store assigns one; with an id the row is replaced
    /// (or inserted under that id if it does not exist yet).
    pub async fn save(&self, entity: T) -> ApiResult<T> {
        let row = Self::to_row(&entity)?;
        let stored = match entity.id() {
            None => self.store.insert(T::table_name(), row).await?,
            Some(id) => self.store.upsert(T::table_name(), id, row).await?,
        };
        Self::from_row(stored)
    }

    pub async fn find_all(&self) -> ApiResult<Vec<T>> {
        let rows = self.store.find_all(T::table_name()).await?;
        rows.into_iter().map(Self::from_row).collect()
    }

    pub async fn find_one(&self, id: i64) -> ApiResult<Option<T>> {
        self.store
            .find(T::table_name(), id)
            .await?
            .map(Self::from_row)
            .transpose()
    }

    /// List all rows with many-to-many references expanded into full objects
    pub async fn find_all_with_eager_relationships(&self) -> ApiResult<Vec<Value>> {
        let rows = self.store.find_all(T::table_name()).await?;
        let mut loaded = Vec::with_capacity(rows.len());
        for row in rows {
            loaded.push(self.load_relationships(row).await?);
        }
        Ok(loaded)
    }

    pub async fn find_one_with_eager_relationships(&self, id: i64) -> ApiResult<Option<Value>> {
        match self.store.find(T::table_name(), id).await? {
            Some(row) => Ok(Some(self.load_relationships(row).await?)),
            None => Ok(None),
        }
    }

    /// List the rows no owner row points at through `relation`
    pub async fn find_all_where_reverse_is_null(
        &self,
        relation: &ReverseOneToOne,
    ) -> ApiResult<Vec<T>> {
        let owners = self.store.find_all(relation.owner).await?;
        let referenced: HashSet<i64> = owners
            .iter()
            .filter_map(|owner| owner.get(relation.owner_field))
            .filter_map(|reference| reference.get("id"))
            .filter_map(Value::as_i64)
            .collect();

        Ok(self
            .find_all()
            .await?
            .into_iter()
            .filter(|entity| entity.id().is_none_or(|id| !referenced.contains(&id)))
            .collect())
    }

    pub async fn delete_by_id(&self, id: i64) -> ApiResult<()> {
        self.store.delete(T::table_name(), id).await?;
        Ok(())
    }

    pub async fn count(&self) -> ApiResult<u64> {
        Ok(self.store.count(T::table_name()).await?)
    }

    /// Validate the row through `T` so stored data always matches the entity shape
    async fn load_relationships(&self, row: Value) -> ApiResult<Value> {
        let mut row = Self::to_row(&Self::from_row(row)?)?;

        for relation in T::many_to_many() {
            let ids: Vec<i64> = row
                .get(relation.field)
                .and_then(Value::as_array)
                .map(|refs| {
                    refs.iter()
                        .filter_map(|r| r.get("id").and_then(Value::as_i64))
                        .collect()
                })
                .unwrap_or_default();

            let targets = if ids.is_empty() {
                Vec::new()
            } else {
                self.store.find_many(relation.target, &ids).await?
            };

            if let Some(obj) = row.as_object_mut() {
                obj.insert(relation.field.to_string(), Value::Array(targets));
            }
        }

        Ok(row)
    }

    fn to_row(entity: &T) -> ApiResult<Value> {
        serde_json::to_value(entity).map_err(|e| ApiError::Serialization {
            entity_name: T::entity_name().to_string(),
            message: e.to_string(),
        })
    }

    fn from_row(row: Value) -> ApiResult<T> {
        serde_json::from_value(row).map_err(|e| ApiError::Serialization {
            entity_name: T::entity_name().to_string(),
            message: e.to_string(),
        })
    }
}
