//! Configuration loading and management
//!
//! Settings come from a YAML file (`config/saha.yaml` unless `SAHA_CONFIG`
//! names another path), then environment variables override single values:
//!
//! | Variable        | Setting                     |
//! |-----------------|-----------------------------|
//! | `SAHA_HOST`     | `server.host`               |
//! | `SAHA_PORT`     | `server.port`               |
//! | `SAHA_APP_NAME` | `application.name`          |
//! | `SAHA_STORAGE`  | `storage.backend`           |
//! | `DATABASE_URL`  | `storage.database_url`      |
//!
//! Every setting has a default, so no file is required.

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

/// Config file read when `SAHA_CONFIG` is not set
pub const DEFAULT_CONFIG_PATH: &str = "config/saha.yaml";

/// Complete application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub application: ApplicationConfig,
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplicationConfig {
    /// Name used in `X-<name>-alert` headers and health responses
    pub name: String,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            name: crate::server::DEFAULT_APPLICATION_NAME.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

/// Storage backend selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StorageBackend {
    #[default]
    InMemory,
    Postgres,
}

impl FromStr for StorageBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "in-memory" | "memory" => Ok(StorageBackend::InMemory),
            "postgres" | "postgresql" => Ok(StorageBackend::Postgres),
            other => bail!("Unknown storage backend: {}", other),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub backend: StorageBackend,

    /// Connection string, required by the postgres backend
    pub database_url: Option<String>,

    pub max_connections: u32,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::InMemory,
            database_url: None,
            max_connections: 10,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directives; `RUST_LOG` takes precedence
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info,saha=debug,tower_http=debug".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_yaml_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Load from the config file (if present) and the process environment
    pub fn load() -> Result<Self> {
        let path = std::env::var("SAHA_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

        let mut config = if Path::new(&path).exists() {
            Self::from_yaml_file(&path)?
        } else {
            Self::default()
        };

        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Apply overrides from a variable lookup (the environment in [`AppConfig::load`])
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(host) = lookup("SAHA_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("SAHA_PORT") {
            self.server.port = port
                .parse()
                .with_context(|| format!("Invalid SAHA_PORT: {}", port))?;
        }
        if let Some(name) = lookup("SAHA_APP_NAME") {
            self.application.name = name;
        }
        if let Some(backend) = lookup("SAHA_STORAGE") {
            self.storage.backend = backend.parse()?;
        }
        if let Some(url) = lookup("DATABASE_URL") {
            self.storage.database_url = Some(url);
        }
        Ok(())
    }

    /// Check settings that depend on each other
    pub fn validate(&self) -> Result<()> {
        if self.storage.backend == StorageBackend::Postgres && self.storage.database_url.is_none() {
            bail!("The postgres storage backend requires DATABASE_URL or storage.database_url");
        }
        if self.application.name.is_empty() {
            bail!("application.name must not be empty");
        }
        Ok(())
    }

    /// Address the HTTP server binds to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
