//! Server host for transport-agnostic API exposure
//!
//! This module provides a `ServerHost` structure that contains all the state
//! needed to expose the API. The REST exposure consumes it to build a router.

use crate::core::EntityStore;
use crate::server::entity_registry::{EntityRegistry, ResourceContext};
use crate::server::headers::HeaderUtil;
use anyhow::Result;
use std::sync::Arc;

/// Host context containing all application state
///
/// # Example
///
/// ```rust,ignore
/// let host = ServerHost::from_builder_components(store, "sahaApp", entity_registry)?;
///
/// let app = RestExposure::build_router(Arc::new(host), vec![])?;
/// ```
pub struct ServerHost {
    /// Backing store shared by every resource
    pub store: Arc<dyn EntityStore>,

    /// Alert header builder (also carries the application name)
    pub headers: Arc<HeaderUtil>,

    /// Entity registry for CRUD routes
    pub entity_registry: EntityRegistry,
}

impl ServerHost {
    /// Build the host from builder components
    ///
    /// Fails when the application name cannot be used in header names.
    pub fn from_builder_components(
        store: Arc<dyn EntityStore>,
        application_name: &str,
        entity_registry: EntityRegistry,
    ) -> Result<Self> {
        Ok(Self {
            store,
            headers: Arc::new(HeaderUtil::new(application_name)?),
            entity_registry,
        })
    }

    pub fn application_name(&self) -> &str {
        self.headers.application_name()
    }

    /// Get entity types registered in the host
    pub fn entity_types(&self) -> Vec<&str> {
        self.entity_registry.entity_types()
    }

    /// State handed to each entity descriptor
    pub fn resource_context(&self) -> ResourceContext {
        ResourceContext {
            store: self.store.clone(),
            headers: self.headers.clone(),
        }
    }
}
