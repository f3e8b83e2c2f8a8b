//! # SAHA
//!
//! REST back end for personnel ("karbar"), organizational units ("yegan"),
//! audits ("hesabResi"), duty and leave records, and their file attachments.
//!
//! ## Features
//!
//! - **Uniform resources**: every entity is exposed under `/api/<plural>`
//!   with the same create/update/list/get/delete contract
//! - **Macro-based entities**: one `impl_resource_entity!` call per entity
//! - **Relations**: many-to-one references, eager-loaded many-to-many
//!   relations and "<owner>-is-null" filters for one-to-one relations
//! - **Alert headers**: `X-<app>-alert` / `X-<app>-params` on every mutation
//! - **Pluggable storage**: in-memory by default, PostgreSQL with the
//!   `postgres` feature
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use saha::prelude::*;
//!
//! let app = ServerBuilder::new()
//!     .with_store(InMemoryEntityStore::new())
//!     .register_module(SahaModule)?
//!     .build()?;
//!
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:8080").await?;
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod core;
pub mod entities;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core Traits ===
    pub use crate::core::{
        ApiError, ApiResult, Entity, EntityRef, EntityStore, ListParams, ManyToMany, Module,
        Pluralizer, Repository, ReverseOneToOne, same_identity,
    };

    // === Macros ===
    pub use crate::impl_resource_entity;

    // === Entities ===
    pub use crate::entities::*;

    // === Storage ===
    pub use crate::storage::InMemoryEntityStore;
    #[cfg(feature = "postgres")]
    pub use crate::storage::PostgresEntityStore;

    // === Config ===
    pub use crate::config::{AppConfig, StorageBackend};

    // === Server ===
    pub use crate::server::{
        EntityDescriptor, EntityRegistry, ResourceDescriptor, ServerBuilder, ServerHost,
    };

    // === External dependencies ===
    pub use async_trait::async_trait;
    pub use chrono::{DateTime, Utc};
    pub use serde::{Deserialize, Serialize};
}
