//! Application state for the Timesheet Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::{ConfigLoader, ShiftLimits};

/// Shared application state.
///
/// Contains resources that are shared across all request handlers,
/// such as the loaded grades, limits and template layout.
#[derive(Clone)]
pub struct AppState {
    /// The loaded engine configuration.
    config: Arc<ConfigLoader>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the shift limits every validation runs against.
    pub fn limits(&self) -> ShiftLimits {
        *self.config.config().limits()
    }
}
