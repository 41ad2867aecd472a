//! HTTP API module for the Timesheet Engine.
//!
//! This module provides the REST endpoints for validating shifts, promoting
//! work templates, summarizing a month and exporting the timesheet.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{ExportRequest, PromoteWorkRequest, SummaryRequest, ValidateShiftRequest};
pub use response::{ApiError, ValidationResponse};
pub use state::AppState;
