//! SAHA back end server
//!
//! Loads the configuration, initialises logging, opens the configured
//! storage backend and serves every resource under `/api`.

use anyhow::Result;
use saha::config::{AppConfig, StorageBackend};
use saha::prelude::*;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.logging.filter.as_str().into()),
        )
        .init();

    let store = open_store(&config).await?;

    tracing::info!(
        "Starting {} ({:?} storage)",
        config.application.name,
        config.storage.backend
    );

    ServerBuilder::new()
        .with_shared_store(store)
        .with_application_name(&config.application.name)
        .register_module(SahaModule)?
        .serve(&config.bind_address())
        .await
}

async fn open_store(config: &AppConfig) -> Result<Arc<dyn EntityStore>> {
    match config.storage.backend {
        StorageBackend::InMemory => Ok(Arc::new(InMemoryEntityStore::new())),

        #[cfg(feature = "postgres")]
        StorageBackend::Postgres => {
            use anyhow::Context;
            use saha::storage::PostgresEntityStore;
            use sqlx::postgres::PgPoolOptions;

            let url = config
                .storage
                .database_url
                .as_deref()
                .context("DATABASE_URL is not set")?;
            let pool = PgPoolOptions::new()
                .max_connections(config.storage.max_connections)
                .connect(url)
                .await
                .context("Failed to connect to the database")?;

            tracing::info!("Connected to PostgreSQL");

            let store = PostgresEntityStore::connect(pool, &SahaModule.tables()).await?;
            Ok(Arc::new(store))
        }

        #[cfg(not(feature = "postgres"))]
        StorageBackend::Postgres => {
            anyhow::bail!("This build has no postgres support; rebuild with --features postgres")
        }
    }
}
