//! Recurring work template model.
//!
//! A work template describes a weekly class slot. Promoting it for a month
//! produces one dated [`ShiftRecord`](super::ShiftRecord) per matching weekday.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use super::Category;

/// A recurring weekly schedule entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkTemplate {
    /// Identifier, unique per owner.
    pub id: u32,
    /// Weekday the class is held on.
    pub weekday: Weekday,
    /// Free-text label copied onto promoted shifts.
    #[serde(default)]
    pub label: String,
    /// Subject (class) name.
    pub class_name: String,
    /// Teacher responsible for the class.
    #[serde(default)]
    pub teacher_name: String,
    /// Kind of work.
    #[serde(default)]
    pub category: Category,
    /// Start time as `HH:MM`.
    pub start_time: String,
    /// End time as `HH:MM`.
    pub end_time: String,
    /// Unpaid break in minutes.
    #[serde(default)]
    pub break_minutes: u32,
}
