//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the server
//! configuration from a YAML file and the process environment.

use std::env;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{PresenceError, PresenceResult};

use super::types::ServerConfig;

/// Environment variable naming the YAML configuration file.
pub const CONFIG_PATH_ENV: &str = "PRESENCE_CONFIG";

/// Environment variable overriding the bind address.
pub const BIND_ADDRESS_ENV: &str = "PRESENCE_BIND";

/// Loads and provides access to the server configuration.
///
/// # File Format
///
/// ```yaml
/// bind_address: "127.0.0.1:8080"
/// log_filter: "presence_log=debug,info"
/// ```
///
/// # Example
///
/// ```no_run
/// use presence_log::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/server.yaml")?;
/// println!("Binding to {}", loader.config().bind_address);
/// # Ok::<(), presence_log::error::PresenceError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: ServerConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The file is missing
    /// - The file contains invalid YAML
    pub fn load<P: AsRef<Path>>(path: P) -> PresenceResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| PresenceError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::from_yaml(&content).map_err(|e| match e {
            PresenceError::ConfigParseError { message, .. } => PresenceError::ConfigParseError {
                path: path_str,
                message,
            },
            other => other,
        })
    }

    /// Parses configuration from YAML text.
    pub fn from_yaml(content: &str) -> PresenceResult<Self> {
        // An empty document means "all defaults".
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: ServerConfig =
            serde_yaml::from_str(content).map_err(|e| PresenceError::ConfigParseError {
                path: "<inline>".to_string(),
                message: e.to_string(),
            })?;
        Ok(Self { config })
    }

    /// Builds configuration from the process environment.
    ///
    /// Reads the file named by `PRESENCE_CONFIG` when set, otherwise starts
    /// from defaults. `PRESENCE_BIND` then overrides the bind address.
    pub fn from_env() -> PresenceResult<Self> {
        let mut loader = match env::var(CONFIG_PATH_ENV) {
            Ok(path) => {
                debug!(path = %path, "Loading configuration file");
                Self::load(path)?
            }
            Err(_) => Self::default(),
        };

        if let Ok(bind_address) = env::var(BIND_ADDRESS_ENV) {
            loader.config.bind_address = bind_address;
        }
        Ok(loader)
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}
