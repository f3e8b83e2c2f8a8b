//! Entity trait defining the core abstraction for all persisted records

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Base trait for all entities in the system.
///
/// Every entity has:
/// - an optional surrogate `id` (absent until the store assigns one)
/// - a camelCase entity name used in alert headers and error bodies
/// - a table name used by the storage backends
/// - a plural, kebab-case resource path used in URLs
///
/// Equality between entities is identity-based: see [`same_identity`].
pub trait Entity: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Entity name as it appears in alerts and errors (e.g. "hesabResi")
    fn entity_name() -> &'static str;

    /// Storage table name (e.g. "hesab_resi")
    fn table_name() -> &'static str;

    /// The plural resource path used in URLs (e.g. "hesab-resis")
    fn resource_name() -> &'static str;

    /// Get the identifier, if this entity has been persisted
    fn id(&self) -> Option<i64>;

    /// Assign the identifier
    fn set_id(&mut self, id: Option<i64>);

    /// Many-to-many relations held by this entity (join-table side)
    fn many_to_many() -> &'static [ManyToMany] {
        &[]
    }

    /// Reverse one-to-one relations pointing at this entity
    fn reverse_one_to_one() -> &'static [ReverseOneToOne] {
        &[]
    }

    /// Look up a reverse relation by its list filter name
    fn reverse_filter(filter: &str) -> Option<&'static ReverseOneToOne> {
        Self::reverse_one_to_one()
            .iter()
            .find(|relation| relation.filter == filter)
    }
}

/// Identity equality: both ids present and equal.
///
/// An entity without an id is never equal to anything, itself included.
pub fn same_identity(a: Option<i64>, b: Option<i64>) -> bool {
    matches!((a, b), (Some(a), Some(b)) if a == b)
}

/// A reference to another entity, serialized as `{"id": n}`
///
/// Any other keys in a submitted reference are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityRef {
    pub id: i64,
}

impl EntityRef {
    pub fn new(id: i64) -> Self {
        Self { id }
    }

    /// Reference an already persisted entity
    pub fn to<T: Entity>(entity: &T) -> Option<Self> {
        entity.id().map(Self::new)
    }
}

impl From<i64> for EntityRef {
    fn from(id: i64) -> Self {
        Self::new(id)
    }
}

/// A many-to-many relation stored as a list of references
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ManyToMany {
    /// JSON field holding the references (e.g. "dores")
    pub field: &'static str,

    /// Table of the referenced entity (e.g. "dore")
    pub target: &'static str,
}

/// The non-owning side of a one-to-one relation
///
/// The owning entity stores the reference; this side only exists to support
/// "<owner>-is-null" list filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReverseOneToOne {
    /// List filter name (e.g. "hesabresi-is-null")
    pub filter: &'static str,

    /// Table of the owning entity (e.g. "hesab_resi")
    pub owner: &'static str,

    /// JSON field on the owner holding the reference (e.g. "gozaresh")
    pub owner_field: &'static str,
}
