//! Server module for building HTTP servers with auto-registered routes
//!
//! This module provides a `ServerBuilder` that automatically registers:
//! - CRUD routes for all entities declared in modules, under `/api`
//! - Health routes

pub mod builder;
pub mod entity_registry;
pub mod exposure;
pub mod headers;
pub mod host;
pub mod resource;

pub use builder::{DEFAULT_APPLICATION_NAME, ServerBuilder};
pub use entity_registry::{EntityDescriptor, EntityRegistry, ResourceContext};
pub use exposure::RestExposure;
pub use headers::HeaderUtil;
pub use host::ServerHost;
pub use resource::ResourceDescriptor;
