//! Module system
//!
//! A module groups related entity types and registers their resources.

use crate::server::entity_registry::EntityRegistry;

/// Trait for an application module
pub trait Module: Send + Sync {
    /// Unique module name
    fn name(&self) -> &str;

    /// Module version
    fn version(&self) -> &str {
        "1.0.0"
    }

    /// Storage tables of the entities managed by this module
    ///
    /// Backends that need a schema create one table per entry.
    fn tables(&self) -> Vec<&'static str>;

    /// Register entities with the entity registry
    ///
    /// Each registered descriptor provides the CRUD routes for one entity.
    fn register_entities(&self, registry: &mut EntityRegistry);
}
