//! Per-subject totals over a period.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::{Category, ShiftRecord};

/// Label used for shifts without a subject name.
pub const UNSPECIFIED_SUBJECT: &str = "未設定";

/// Accumulated worked time for one subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectTotal {
    /// Worked minutes across all the subject's shifts.
    pub total_minutes: u32,
    /// Number of shifts contributing.
    pub shift_count: u32,
    /// Category of the last contributing shift.
    pub category: Category,
}

/// Groups shifts by subject name and totals their worked minutes.
///
/// Single pass. When a subject has shifts of different categories, the
/// category of whichever shift comes last wins.
///
/// # Examples
///
/// ```
/// use timesheet_engine::calculation::aggregate_by_subject;
/// use timesheet_engine::models::ShiftRecord;
///
/// let shift = |class: &str, start: &str, end: &str| ShiftRecord {
///     id: 1,
///     year: 2025,
///     month: 4,
///     day: 10,
///     label: String::new(),
///     class_name: class.to_string(),
///     category: Default::default(),
///     teacher_name: String::new(),
///     start_time: start.to_string(),
///     end_time: end.to_string(),
///     break_minutes: 0,
/// };
///
/// let totals = aggregate_by_subject(&[
///     shift("Physics", "09:00", "10:30"),
///     shift("Physics", "13:00", "14:00"),
///     shift("", "15:00", "16:00"),
/// ]);
/// assert_eq!(totals["Physics"].total_minutes, 150);
/// assert_eq!(totals["未設定"].shift_count, 1);
/// ```
pub fn aggregate_by_subject(shifts: &[ShiftRecord]) -> BTreeMap<String, SubjectTotal> {
    let mut totals: BTreeMap<String, SubjectTotal> = BTreeMap::new();

    for shift in shifts {
        let entry = totals
            .entry(shift.subject_name().to_string())
            .or_insert(SubjectTotal {
                total_minutes: 0,
                shift_count: 0,
                category: shift.category,
            });
        entry.total_minutes = entry.total_minutes.saturating_add(shift.worked_minutes());
        entry.shift_count += 1;
        entry.category = shift.category;
    }

    totals
}
