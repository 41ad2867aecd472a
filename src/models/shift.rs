//! Shift record model and related types.
//!
//! This module defines the [`ShiftRecord`] struct and the [`Category`] enum
//! for representing dated work blocks registered by a teaching assistant.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calculation::worked_minutes;

/// The kind of work a shift covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Time spent in the classroom.
    #[default]
    Class,
    /// Time spent preparing material.
    Preparation,
}

impl Category {
    /// Returns the label printed on the timesheet.
    ///
    /// # Examples
    ///
    /// ```
    /// use timesheet_engine::models::Category;
    ///
    /// assert_eq!(Category::Class.label(), "授業");
    /// assert_eq!(Category::Preparation.label(), "準備");
    /// ```
    pub fn label(&self) -> &'static str {
        match self {
            Category::Class => "授業",
            Category::Preparation => "準備",
        }
    }
}

/// Identifies a shift within an owner's record set.
///
/// Shift ids are only unique per date, so the key carries both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShiftKey {
    /// Calendar year.
    pub year: i32,
    /// Calendar month (1-12).
    pub month: u32,
    /// Day of month (1-31).
    pub day: u32,
    /// Record id on that date.
    pub id: u32,
}

impl fmt::Display for ShiftKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}#{}",
            self.year, self.month, self.day, self.id
        )
    }
}

/// A single scheduled work block on one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftRecord {
    /// Identifier, unique per owner and day.
    pub id: u32,
    /// Calendar year.
    pub year: i32,
    /// Calendar month (1-12).
    pub month: u32,
    /// Day of month (1-31).
    pub day: u32,
    /// Free-text label shown on the calendar.
    #[serde(default)]
    pub label: String,
    /// Subject (class) name.
    #[serde(default)]
    pub class_name: String,
    /// Kind of work.
    #[serde(default)]
    pub category: Category,
    /// Teacher responsible for the class.
    #[serde(default)]
    pub teacher_name: String,
    /// Start time as `HH:MM`.
    pub start_time: String,
    /// End time as `HH:MM`.
    pub end_time: String,
    /// Unpaid break in minutes.
    #[serde(default)]
    pub break_minutes: u32,
}

impl ShiftRecord {
    /// Returns the calendar date, or `None` when the triple is not a real date.
    ///
    /// # Examples
    ///
    /// ```
    /// use timesheet_engine::models::ShiftRecord;
    /// use chrono::NaiveDate;
    ///
    /// let shift = ShiftRecord {
    ///     id: 1,
    ///     year: 2025,
    ///     month: 2,
    ///     day: 30,
    ///     label: String::new(),
    ///     class_name: "Linear Algebra".to_string(),
    ///     category: Default::default(),
    ///     teacher_name: String::new(),
    ///     start_time: "09:00".to_string(),
    ///     end_time: "10:30".to_string(),
    ///     break_minutes: 0,
    /// };
    /// assert_eq!(shift.date(), None);
    /// ```
    pub fn date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }

    /// Returns the composite key addressing this record.
    pub fn key(&self) -> ShiftKey {
        ShiftKey {
            year: self.year,
            month: self.month,
            day: self.day,
            id: self.id,
        }
    }

    /// Returns true if the record falls on the given date triple.
    pub fn is_on(&self, year: i32, month: u32, day: u32) -> bool {
        self.year == year && self.month == month && self.day == day
    }

    /// Worked minutes net of the break, floored at zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use timesheet_engine::models::ShiftRecord;
    ///
    /// let shift = ShiftRecord {
    ///     id: 1,
    ///     year: 2025,
    ///     month: 4,
    ///     day: 10,
    ///     label: String::new(),
    ///     class_name: "Linear Algebra".to_string(),
    ///     category: Default::default(),
    ///     teacher_name: String::new(),
    ///     start_time: "09:00".to_string(),
    ///     end_time: "12:00".to_string(),
    ///     break_minutes: 60,
    /// };
    /// assert_eq!(shift.worked_minutes(), 120);
    /// ```
    pub fn worked_minutes(&self) -> u32 {
        worked_minutes(&self.start_time, &self.end_time, self.break_minutes)
    }

    /// Subject name used for grouping; empty names fall back to a fixed label.
    pub fn subject_name(&self) -> &str {
        let trimmed = self.class_name.trim();
        if trimmed.is_empty() {
            crate::calculation::UNSPECIFIED_SUBJECT
        } else {
            trimmed
        }
    }
}
