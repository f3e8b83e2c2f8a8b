//! REST API exposure
//!
//! This module provides REST-specific routing. It consumes a `ServerHost`
//! and produces an Axum `Router` with the health routes, every entity
//! resource nested under `/api`, and any custom routes.

use super::super::host::ServerHost;
use anyhow::Result;
use axum::extract::State;
use axum::{Json, Router, routing::get};
use serde_json::{Value, json};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// REST API exposure implementation
pub struct RestExposure;

impl RestExposure {
    /// Build the REST router from a host
    ///
    /// # Arguments
    ///
    /// * `host` - The server host containing all application state
    /// * `custom_routes` - Additional custom routes to merge
    ///
    /// # Returns
    ///
    /// Returns a fully configured Axum router with:
    /// - Health check routes
    /// - Entity CRUD routes under `/api`
    /// - Custom routes
    pub fn build_router(host: Arc<ServerHost>, custom_routes: Vec<Router>) -> Result<Router> {
        let health_routes = Self::health_routes(host.application_name());
        let entity_routes = host
            .entity_registry
            .build_routes(&host.resource_context());

        let mut app = health_routes.nest("/api", entity_routes);

        for custom_router in custom_routes {
            app = app.merge(custom_router);
        }

        Ok(app
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()))
    }

    /// Build health check routes
    fn health_routes(application_name: &str) -> Router {
        Router::new()
            .route("/health", get(Self::health_check))
            .route("/healthz", get(Self::health_check))
            .route("/management/health", get(Self::health_check))
            .with_state(Arc::<str>::from(application_name))
    }

    /// Health check endpoint handler
    async fn health_check(State(service): State<Arc<str>>) -> Json<Value> {
        Json(json!({
            "status": "UP",
            "service": service.as_ref()
        }))
    }
}
