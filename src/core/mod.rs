//! Core module containing fundamental traits and types

pub mod binary;
pub mod entity;
pub mod error;
pub mod module;
pub mod pluralize;
pub mod query;
pub mod repository;
pub mod service;

pub use entity::{Entity, EntityRef, ManyToMany, ReverseOneToOne, same_identity};
pub use error::{ApiError, ApiResult};
pub use module::Module;
pub use pluralize::Pluralizer;
pub use query::ListParams;
pub use repository::Repository;
pub use service::EntityStore;
