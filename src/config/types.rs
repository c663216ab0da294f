//! Configuration types for the presence log service.
//!
//! This module contains the strongly-typed configuration structure that
//! is deserialized from a YAML configuration file.

use serde::Deserialize;

/// Address the server binds to when none is configured.
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

/// Log filter used when neither `RUST_LOG` nor the file sets one.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Server configuration.
///
/// Every field is optional in the file and falls back to its default.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Socket address to listen on (e.g., "127.0.0.1:8080").
    pub bind_address: String,
    /// `tracing-subscriber` filter directive (e.g., "presence_log=debug").
    pub log_filter: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}
