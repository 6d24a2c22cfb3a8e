//! Service configuration
//!
//! Built once at startup from an optional JSON file plus CLI/environment
//! overrides, then handed to the server by value. Request handling never
//! reads configuration from the environment.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::args::ConfigArgs;
use super::errors::{CliError, CliResult};
use crate::http_server::HttpServerConfig;
use crate::observability::LoggingConfig;
use crate::storage::StorageConfig;

/// Configuration file structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: HttpServerConfig,

    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))
    }

    /// Resolve configuration for a command: file (or defaults), then flags.
    pub fn resolve(args: &ConfigArgs, port: Option<u16>) -> CliResult<Self> {
        let mut config = match &args.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };

        if let Some(database) = &args.database {
            config.storage.database = database.clone();
        }
        if let Some(level) = &args.log_level {
            config.logging.level = level.clone();
        }
        if let Some(file) = &args.log_file {
            config.logging.file = Some(file.clone());
        }
        if let Some(port) = port {
            config.server.port = port;
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> CliResult<()> {
        if self.server.port == 0 {
            return Err(CliError::config_error("server.port must be > 0"));
        }

        if self.storage.database.as_os_str().is_empty() {
            return Err(CliError::config_error("storage.database must not be empty"));
        }

        if self.logging.level.trim().is_empty() {
            return Err(CliError::config_error("logging.level must not be empty"));
        }

        Ok(())
    }
}
