//! Application state for the presence log API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::clock::{Clock, SystemClock};
use crate::registry::PresenceRegistry;

/// Shared application state.
///
/// Holds the presence registry and the clock used to stamp enter/exit calls.
#[derive(Clone)]
pub struct AppState {
    registry: Arc<PresenceRegistry>,
    clock: Arc<dyn Clock>,
}

impl AppState {
    /// Creates a new application state with an empty registry and the wall clock.
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Creates a new application state with an empty registry and the given clock.
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            registry: Arc::new(PresenceRegistry::new()),
            clock,
        }
    }

    /// Returns a reference to the presence registry.
    pub fn registry(&self) -> &PresenceRegistry {
        &self.registry
    }

    /// Returns a reference to the clock.
    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
