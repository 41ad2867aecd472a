//! Merged per-day, per-subject shift model.

use serde::{Deserialize, Serialize};

use super::{Category, ShiftRecord};
use crate::calculation::worked_minutes;

/// Result of merging the shifts one subject has on one day.
///
/// Derived on every export and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregatedSubjectShift {
    /// Day of month the merged shifts fall on.
    pub day: u32,
    /// Subject name (never empty; see [`ShiftRecord::subject_name`]).
    pub class_name: String,
    /// Category of the last merged record.
    pub category: Category,
    /// Teacher of the last merged record with a non-empty teacher.
    pub teacher_name: String,
    /// Earliest start time, `HH:MM`.
    pub start_time: String,
    /// Latest end time, `HH:MM`.
    pub end_time: String,
    /// Own breaks plus idle gaps between the merged shifts.
    pub break_minutes: u32,
    /// Number of records merged into this one.
    pub source_count: usize,
}

impl AggregatedSubjectShift {
    /// Worked minutes of the merged span.
    pub fn worked_minutes(&self) -> u32 {
        worked_minutes(&self.start_time, &self.end_time, self.break_minutes)
    }
}

impl From<&ShiftRecord> for AggregatedSubjectShift {
    fn from(shift: &ShiftRecord) -> Self {
        AggregatedSubjectShift {
            day: shift.day,
            class_name: shift.subject_name().to_string(),
            category: shift.category,
            teacher_name: shift.teacher_name.clone(),
            start_time: shift.start_time.clone(),
            end_time: shift.end_time.clone(),
            break_minutes: shift.break_minutes,
            source_count: 1,
        }
    }
}
