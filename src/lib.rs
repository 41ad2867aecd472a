//! Timesheet Engine for teaching-assistant shifts
//!
//! This crate validates and aggregates TA shift records, computes monthly
//! salary from an academic grade, and exports the month onto a fixed-layout
//! Excel timesheet.
//!
//! # Pipeline
//!
//! ```text
//! ShiftRecord -> merged per day and subject -> 14-cell half rows
//!             -> 28-cell paired rows -> template writes -> xlsx bytes
//! ```

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod timesheet;
