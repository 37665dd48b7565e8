//! Configuration management for the SimpleCICD demo API

use crate::errors::{CoreError, CoreResult};
use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Sentinel returned by `/secret` when no API key was configured
pub const NO_API_KEY: &str = "NO-API-KEY";

/// Configuration for the SimpleCICD server
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// API key echoed back by the `/secret` endpoint
    #[serde(alias = "ApiKey")]
    pub api_key: String,
    /// Server bind address
    pub listen: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            api_key: NO_API_KEY.to_string(),
            listen: "0.0.0.0:3000".parse().unwrap(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from file and environment.
    ///
    /// Precedence, lowest to highest: built-in defaults, the first default
    /// config file found in the working directory, an explicitly passed
    /// config file, `SIMPLECICD_*` environment variables, and finally the
    /// bare `ApiKey` environment variable (the contract CI/CD pipelines
    /// inject the secret through).
    pub fn load(config_path: &Option<PathBuf>) -> CoreResult<Self> {
        let mut figment = Figment::from(Serialized::defaults(ServerConfig::default()));

        let default_config_paths = [
            "simplecicd.yaml",
            "simplecicd.yml",
            ".simplecicd.yaml",
            ".simplecicd.yml",
        ];

        for path in &default_config_paths {
            if Path::new(path).exists() {
                debug!("Loading configuration from {}", path);
                figment = figment.merge(Yaml::file(path));
                break;
            }
        }

        if let Some(path) = config_path {
            if path.exists() {
                figment = figment.merge(Yaml::file(path));
            } else {
                return Err(CoreError::Configuration(format!(
                    "Configuration file not found: {}",
                    path.display()
                )));
            }
        }

        // Environment variables prefixed with SIMPLECICD_
        figment = figment.merge(Env::prefixed("SIMPLECICD_"));

        // Bare ApiKey variable, as injected by deployment pipelines
        if let Ok(key) = std::env::var("ApiKey") {
            figment = figment.merge(Serialized::default("api_key", key));
        }

        figment
            .extract()
            .map_err(|e| CoreError::Configuration(format!("Failed to parse configuration: {}", e)))
    }

    /// Apply CLI argument overrides to the configuration
    pub fn with_overrides(mut self, listen: Option<SocketAddr>) -> Self {
        if let Some(listen) = listen {
            self.listen = listen;
        }

        self
    }
}
