//! Business-rule validation for adding and editing shifts.
//!
//! Validation is pure: it inspects a snapshot of the owner's shifts and
//! either accepts the candidate with the resulting weekly total or returns
//! a [`Rejection`] describing which rule failed. Callers decide how to
//! present a rejection; nothing is mutated here.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::ShiftLimits;
use crate::models::{ShiftKey, ShiftRecord};

use super::{find_overlap, week_bounds, weekly_worked_minutes};

/// Why a shift (or work template) was not accepted.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum Rejection {
    /// The date triple is not a real calendar date.
    #[error("{year:04}-{month:02}-{day:02} is not a valid date")]
    InvalidDate {
        /// Year of the rejected record.
        year: i32,
        /// Month of the rejected record.
        month: u32,
        /// Day of the rejected record.
        day: u32,
    },

    /// The date already holds the maximum number of shifts.
    #[error("{date} already has {count} shifts (limit {limit})")]
    DailyLimitReached {
        /// The full date.
        date: NaiveDate,
        /// Shifts already on the date.
        count: usize,
        /// Configured per-day limit.
        limit: usize,
    },

    /// The candidate overlaps an existing shift on the same date.
    #[error("overlaps shift {conflicting_id} ({start_time}-{end_time}) on {date}")]
    Overlap {
        /// The full date.
        date: NaiveDate,
        /// Id of the shift it collides with.
        conflicting_id: u32,
        /// Start of the conflicting shift.
        start_time: String,
        /// End of the conflicting shift.
        end_time: String,
    },

    /// Accepting the candidate would exceed the weekly limit.
    #[error(
        "week of {week_start} would total {total_minutes} minutes (currently {current_minutes}, limit {limit})"
    )]
    WeeklyLimitExceeded {
        /// Monday of the affected week.
        week_start: NaiveDate,
        /// Worked minutes already in the week, without the candidate.
        current_minutes: u32,
        /// Worked minutes including the candidate.
        total_minutes: u32,
        /// Configured weekly limit.
        limit: u32,
    },

    /// A work template for the same subject and teacher already exists.
    #[error("'{class_name}' with teacher '{teacher_name}' is already registered")]
    DuplicateWork {
        /// Subject name.
        class_name: String,
        /// Teacher name.
        teacher_name: String,
    },

    /// The record to edit does not exist.
    #[error("shift {key} not found")]
    NotFound {
        /// Key of the missing record.
        key: ShiftKey,
    },
}

/// The outcome of an accepted validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftCheck {
    /// Monday of the candidate's week.
    pub week_start: NaiveDate,
    /// Sunday of the candidate's week.
    pub week_end: NaiveDate,
    /// Worked minutes in that week once the candidate is stored.
    pub weekly_minutes: u32,
}

/// Validates adding `candidate` to `existing`.
///
/// Rules run in order: valid date, per-day count, overlap, weekly total.
///
/// # Examples
///
/// ```
/// use timesheet_engine::calculation::{validate_new_shift, Rejection};
/// use timesheet_engine::config::ShiftLimits;
/// use timesheet_engine::models::ShiftRecord;
///
/// let shift = |id, start: &str, end: &str| ShiftRecord {
///     id,
///     year: 2025,
///     month: 4,
///     day: 10,
///     label: String::new(),
///     class_name: "Physics".to_string(),
///     category: Default::default(),
///     teacher_name: String::new(),
///     start_time: start.to_string(),
///     end_time: end.to_string(),
///     break_minutes: 0,
/// };
///
/// let existing = vec![shift(1, "09:00", "10:00"), shift(2, "13:00", "14:00")];
/// let candidate = shift(3, "15:00", "16:00");
/// let result = validate_new_shift(&existing, &candidate, &ShiftLimits::default());
/// assert!(matches!(result, Err(Rejection::DailyLimitReached { count: 2, .. })));
/// ```
pub fn validate_new_shift(
    existing: &[ShiftRecord],
    candidate: &ShiftRecord,
    limits: &ShiftLimits,
) -> Result<ShiftCheck, Rejection> {
    check_against(existing, candidate, limits)
}

/// Validates replacing the record at `original` with `candidate`.
///
/// The pre-edit record is removed from the snapshot before any rule runs,
/// so an edit never collides with, or is counted twice against, itself.
pub fn validate_edited_shift(
    existing: &[ShiftRecord],
    original: ShiftKey,
    candidate: &ShiftRecord,
    limits: &ShiftLimits,
) -> Result<ShiftCheck, Rejection> {
    if !existing.iter().any(|s| s.key() == original) {
        return Err(Rejection::NotFound { key: original });
    }

    let others: Vec<ShiftRecord> = existing
        .iter()
        .filter(|s| s.key() != original)
        .cloned()
        .collect();

    check_against(&others, candidate, limits)
}

fn check_against(
    existing: &[ShiftRecord],
    candidate: &ShiftRecord,
    limits: &ShiftLimits,
) -> Result<ShiftCheck, Rejection> {
    let date = candidate.date().ok_or(Rejection::InvalidDate {
        year: candidate.year,
        month: candidate.month,
        day: candidate.day,
    })?;

    let count = existing
        .iter()
        .filter(|s| s.is_on(candidate.year, candidate.month, candidate.day))
        .count();
    if count >= limits.max_shifts_per_day {
        return Err(Rejection::DailyLimitReached {
            date,
            count,
            limit: limits.max_shifts_per_day,
        });
    }

    if let Some(conflict) = find_overlap(existing, candidate) {
        return Err(Rejection::Overlap {
            date,
            conflicting_id: conflict.id,
            start_time: conflict.start_time.clone(),
            end_time: conflict.end_time.clone(),
        });
    }

    let (week_start, week_end) = week_bounds(date);
    let current_minutes = weekly_worked_minutes(existing, date, None);
    let total_minutes = current_minutes.saturating_add(candidate.worked_minutes());
    if total_minutes > limits.weekly_minutes_limit {
        return Err(Rejection::WeeklyLimitExceeded {
            week_start,
            current_minutes,
            total_minutes,
            limit: limits.weekly_minutes_limit,
        });
    }

    Ok(ShiftCheck {
        week_start,
        week_end,
        weekly_minutes: total_minutes,
    })
}
