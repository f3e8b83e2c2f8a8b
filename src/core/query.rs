//! Query parameters accepted by list endpoints

use serde::Deserialize;

/// Query parameters for `GET /api/<plural>`
///
/// # Example
/// ```text
/// GET /api/gozareshes?filter=hesabresi-is-null
/// GET /api/karbars?eagerload=false
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ListParams {
    /// Named filter, e.g. "hesabresi-is-null"; unknown names are ignored
    pub filter: Option<String>,

    /// Expand many-to-many references into full objects
    ///
    /// Only meaningful for entities with many-to-many relations, where it
    /// defaults to `true`.
    pub eagerload: Option<bool>,
}

impl ListParams {
    pub fn eagerload(&self) -> bool {
        self.eagerload.unwrap_or(true)
    }
}
