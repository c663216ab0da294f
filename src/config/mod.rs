//! Configuration loading and management for the presence log service.
//!
//! This module loads the server configuration from an optional YAML file,
//! with environment overrides applied on top.
//!
//! # Example
//!
//! ```no_run
//! use presence_log::config::ConfigLoader;
//!
//! let loader = ConfigLoader::from_env().unwrap();
//! println!("Listening on {}", loader.config().bind_address);
//! ```

mod loader;
mod types;

pub use loader::{BIND_ADDRESS_ENV, CONFIG_PATH_ENV, ConfigLoader};
pub use types::{DEFAULT_BIND_ADDRESS, DEFAULT_LOG_FILTER, ServerConfig};
