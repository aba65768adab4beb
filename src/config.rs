//! Configuration module for the shipment service.
//!
//! Loads configuration from built-in defaults, YAML files and environment variables.

use config::{Config as ConfigLoader, ConfigError, Environment, File};
use serde::Deserialize;

/// Root configuration structure.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub api: ApiConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// HTTP API surface configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Prefix under which every route is mounted, e.g. `/api`.
    pub context_path: String,
    /// Path of the API documentation, relative to the context path.
    pub docs_path: String,
    /// Origins allowed by CORS. `*` allows any origin.
    #[serde(default)]
    pub cors_allowed_origins: Vec<String>,
}

impl Config {
    /// Load configuration from files and environment.
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (SHIPMENTS__*)
    /// 2. config/local.yaml (if exists)
    /// 3. config/default.yaml (if exists)
    /// 4. Built-in defaults
    pub fn load() -> Result<Self, ConfigError> {
        let config = ConfigLoader::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080)?
            .set_default("api.context_path", "/api")?
            .set_default("api.docs_path", "/api-doc")?
            .set_default("api.cors_allowed_origins", vec!["*"])?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(
                Environment::with_prefix("SHIPMENTS")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            context_path: "/api".to_string(),
            docs_path: "/api-doc".to_string(),
            cors_allowed_origins: vec!["*".to_string()],
        }
    }
}

impl ApiConfig {
    /// Whether CORS should accept any origin.
    pub fn allows_any_origin(&self) -> bool {
        self.cors_allowed_origins.is_empty() || self.cors_allowed_origins.iter().any(|o| o == "*")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_api_config() {
        let config = ApiConfig::default();
        assert_eq!(config.context_path, "/api");
        assert_eq!(config.docs_path, "/api-doc");
        assert!(config.allows_any_origin());
    }

    #[test]
    fn test_default_server_config() {
        let config = ServerConfig::default();
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn test_explicit_origins() {
        let config = ApiConfig {
            cors_allowed_origins: vec!["https://shipments.example.com".to_string()],
            ..ApiConfig::default()
        };
        assert!(!config.allows_any_origin());
    }

    #[test]
    fn test_load_uses_defaults() {
        let config = Config::load().unwrap();
        assert!(!config.api.context_path.is_empty());
        assert!(!config.server.host.is_empty());
    }
}
