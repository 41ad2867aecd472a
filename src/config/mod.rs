//! Configuration loading and management for the Timesheet Engine.
//!
//! This module loads the grade-to-wage table, the shift limits and the
//! timesheet template layout from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use timesheet_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/timesheet").unwrap();
//! println!("Worksheet: {}", config.config().layout().worksheet);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{CellPosition, EngineConfig, Grade, GradesConfig, ShiftLimits, TemplateLayout};
