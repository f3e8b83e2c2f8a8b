//! Entity registry for managing entity descriptors and auto-generating CRUD routes

use crate::core::EntityStore;
use crate::server::headers::HeaderUtil;
use axum::Router;
use std::collections::HashMap;
use std::sync::Arc;

/// Shared state handed to every descriptor when its routes are built
#[derive(Clone)]
pub struct ResourceContext {
    pub store: Arc<dyn EntityStore>,
    pub headers: Arc<HeaderUtil>,
}

/// Trait that describes how to build routes for an entity
///
/// Each entity (Karbar, Yegan, HesabResi, etc.) gets one descriptor
/// providing its CRUD routes.
pub trait EntityDescriptor: Send + Sync {
    /// The entity name (e.g., "hesabResi")
    fn entity_type(&self) -> &str;

    /// The plural resource path (e.g., "hesab-resis")
    fn plural(&self) -> &str;

    /// The storage table (e.g., "hesab_resi")
    fn table(&self) -> &str;

    /// Build the CRUD routes for this entity
    ///
    /// Should return a Router with routes like:
    /// - GET/POST/PUT /{plural}
    /// - GET/DELETE /{plural}/{id}
    fn build_routes(&self, context: &ResourceContext) -> Router;
}

/// Registry for all entities in the application
///
/// This registry collects entity descriptors from all registered modules
/// and can generate a router with all CRUD routes.
#[derive(Default)]
pub struct EntityRegistry {
    descriptors: HashMap<String, Box<dyn EntityDescriptor>>,
}

impl EntityRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            descriptors: HashMap::new(),
        }
    }

    /// Register an entity descriptor
    ///
    /// The entity name is used as the key.
    pub fn register(&mut self, descriptor: Box<dyn EntityDescriptor>) {
        let entity_type = descriptor.entity_type().to_string();
        self.descriptors.insert(entity_type, descriptor);
    }

    pub fn contains(&self, entity_type: &str) -> bool {
        self.descriptors.contains_key(entity_type)
    }

    /// Build a router with all registered entity routes
    ///
    /// This merges all entity routes into a single router.
    pub fn build_routes(&self, context: &ResourceContext) -> Router {
        let mut router = Router::new();

        for descriptor in self.descriptors.values() {
            router = router.merge(descriptor.build_routes(context));
        }

        router
    }

    /// Get all registered entity names
    pub fn entity_types(&self) -> Vec<&str> {
        self.descriptors.keys().map(|s| s.as_str()).collect()
    }

    /// Get all registered resource paths
    pub fn resource_paths(&self) -> Vec<&str> {
        self.descriptors.values().map(|d| d.plural()).collect()
    }
}
