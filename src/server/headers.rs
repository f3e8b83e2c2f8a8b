//! Alert headers attached to successful mutations
//!
//! A create/update/delete response carries
//! `X-<app>-alert: <app>.<entityName>.<action>` and `X-<app>-params: <id>`
//! so a front end can show a translated notification.

use anyhow::{Context, Result};
use axum::http::{HeaderMap, HeaderName, HeaderValue};

/// Builds alert headers for one application name
#[derive(Debug, Clone)]
pub struct HeaderUtil {
    application_name: String,
    alert: HeaderName,
    params: HeaderName,
}

impl HeaderUtil {
    /// Fails when the application name cannot be part of a header name
    pub fn new(application_name: &str) -> Result<Self> {
        let alert = HeaderName::try_from(format!("x-{}-alert", application_name))
            .with_context(|| format!("Invalid application name: {:?}", application_name))?;
        let params = HeaderName::try_from(format!("x-{}-params", application_name))
            .with_context(|| format!("Invalid application name: {:?}", application_name))?;

        Ok(Self {
            application_name: application_name.to_string(),
            alert,
            params,
        })
    }

    pub fn application_name(&self) -> &str {
        &self.application_name
    }

    pub fn alert(&self, message: &str, param: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if let Ok(value) = HeaderValue::from_str(message) {
            headers.insert(self.alert.clone(), value);
        }
        if let Ok(value) = HeaderValue::from_str(param) {
            headers.insert(self.params.clone(), value);
        }
        headers
    }

    pub fn entity_creation_alert(&self, entity_name: &str, id: i64) -> HeaderMap {
        self.entity_alert(entity_name, "created", id)
    }

    pub fn entity_update_alert(&self, entity_name: &str, id: i64) -> HeaderMap {
        self.entity_alert(entity_name, "updated", id)
    }

    pub fn entity_deletion_alert(&self, entity_name: &str, id: i64) -> HeaderMap {
        self.entity_alert(entity_name, "deleted", id)
    }

    fn entity_alert(&self, entity_name: &str, action: &str, id: i64) -> HeaderMap {
        let message = format!("{}.{}.{}", self.application_name, entity_name, action);
        self.alert(&message, &id.to_string())
    }
}
