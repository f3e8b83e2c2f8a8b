//! Typed error handling for the REST layer
//!
//! Storage backends and configuration work with `anyhow::Error`; the
//! repository converts those into [`ApiError`], which knows its HTTP status,
//! its error code and how to render itself as a problem-JSON body.
//!
//! # Example
//!
//! ```rust,ignore
//! let karbar = repository
//!     .find_one(id)
//!     .await?
//!     .ok_or_else(|| ApiError::not_found::<Karbar>(id))?;
//! ```

use crate::core::entity::Entity;
use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::{HeaderMap, HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Problem type URI attached to every error body
pub const PROBLEM_WITH_MESSAGE: &str = "https://www.jhipster.tech/problem/problem-with-message";

/// The main error type returned by resource handlers
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// A request the resource contract rejects (e.g. create with an id)
    #[error("{message}")]
    BadRequestAlert {
        message: String,
        entity_name: String,
        error_key: String,
    },

    /// Entity was not found
    #[error("{entity_name} with id '{id}' not found")]
    NotFound { entity_name: String, id: i64 },

    /// Path id is not a valid identifier
    #[error("Invalid entity ID format: '{value}'")]
    InvalidEntityId { value: String },

    /// Request body or query string could not be decoded
    #[error("{message}")]
    MalformedRequest { message: String },

    /// Failed to serialize/deserialize an entity to or from its stored row
    #[error("Failed to serialize/deserialize {entity_name}: {message}")]
    Serialization {
        entity_name: String,
        message: String,
    },

    /// Storage backend failure
    #[error("Storage error: {message}")]
    Storage { message: String },
}

/// A specialized Result type for the REST layer
pub type ApiResult<T> = Result<T, ApiError>;

/// Error response body (`application/problem+json`)
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    #[serde(rename = "type")]
    pub problem_type: &'static str,
    pub title: String,
    pub status: u16,
    /// Error code for programmatic handling
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl ApiError {
    pub fn bad_request<T: Entity>(message: impl Into<String>, error_key: &str) -> Self {
        ApiError::BadRequestAlert {
            message: message.into(),
            entity_name: T::entity_name().to_string(),
            error_key: error_key.to_string(),
        }
    }

    pub fn not_found<T: Entity>(id: i64) -> Self {
        ApiError::NotFound {
            entity_name: T::entity_name().to_string(),
            id,
        }
    }

    pub fn storage(err: anyhow::Error) -> Self {
        ApiError::Storage {
            message: format!("{:#}", err),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequestAlert { .. } => StatusCode::BAD_REQUEST,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::InvalidEntityId { .. } => StatusCode::BAD_REQUEST,
            ApiError::MalformedRequest { .. } => StatusCode::BAD_REQUEST,
            ApiError::Serialization { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Storage { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> String {
        match self {
            ApiError::BadRequestAlert { error_key, .. } => format!("error.{}", error_key),
            ApiError::NotFound { .. } => "error.http.404".to_string(),
            ApiError::InvalidEntityId { .. } | ApiError::MalformedRequest { .. } => {
                "error.http.400".to_string()
            }
            ApiError::Serialization { .. } => "error.serialization".to_string(),
            ApiError::Storage { .. } => "error.storage".to_string(),
        }
    }

    /// Convert to an error response body
    pub fn to_response(&self) -> ErrorResponse {
        let status = self.status_code();
        let mut body = ErrorResponse {
            problem_type: PROBLEM_WITH_MESSAGE,
            title: status
                .canonical_reason()
                .unwrap_or("Error")
                .to_string(),
            status: status.as_u16(),
            message: self.error_code(),
            entity_name: None,
            error_key: None,
            params: None,
            detail: None,
        };

        match self {
            ApiError::BadRequestAlert {
                message,
                entity_name,
                error_key,
            } => {
                body.title = message.clone();
                body.entity_name = Some(entity_name.clone());
                body.error_key = Some(error_key.clone());
                body.params = Some(entity_name.clone());
            }
            ApiError::NotFound { entity_name, .. } => {
                body.entity_name = Some(entity_name.clone());
                body.detail = Some(self.to_string());
            }
            _ => body.detail = Some(self.to_string()),
        }

        body
    }

    /// Render the response including the `X-<app>-error` alert headers
    pub fn into_response_for(self, application_name: &str) -> Response {
        let headers = self.alert_headers(application_name);
        let mut response = self.into_response();
        if let Some(headers) = headers {
            response.headers_mut().extend(headers);
        }
        response
    }

    fn alert_headers(&self, application_name: &str) -> Option<HeaderMap> {
        let ApiError::BadRequestAlert {
            entity_name,
            error_key,
            ..
        } = self
        else {
            return None;
        };

        let mut headers = HeaderMap::new();
        let error = HeaderValue::from_str(&format!("error.{}", error_key)).ok()?;
        let params = HeaderValue::from_str(entity_name).ok()?;
        headers.insert(
            header::HeaderName::try_from(format!("x-{}-error", application_name)).ok()?,
            error,
        );
        headers.insert(
            header::HeaderName::try_from(format!("x-{}-params", application_name)).ok()?,
            params,
        );
        Some(headers)
    }
}

impl IntoResponse for &ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let mut response = (status, Json(self.to_response())).into_response();
        response.headers_mut().insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/problem+json"),
        );
        response
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (&self).into_response()
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Serialization {
            entity_name: "entity".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::MalformedRequest {
            message: rejection.body_text(),
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::MalformedRequest {
            message: rejection.body_text(),
        }
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::storage(err)
    }
}
