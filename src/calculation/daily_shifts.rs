//! Per-day shift lookup and overlap detection.

use crate::models::ShiftRecord;

use super::parse_clock_time;

/// Maximum number of shift records one owner may hold on a single date.
pub const MAX_SHIFTS_PER_DAY: usize = 2;

/// Returns the shifts falling exactly on the given date triple.
///
/// Dates are plain integers; no timezone handling takes place.
pub fn shifts_on_date(
    shifts: &[ShiftRecord],
    year: i32,
    month: u32,
    day: u32,
) -> Vec<&ShiftRecord> {
    shifts
        .iter()
        .filter(|s| s.is_on(year, month, day))
        .collect()
}

/// Returns the id a new record on the given date should take.
///
/// Ids are only unique per date: one past the largest id already used on
/// that date, starting at 1.
pub fn next_shift_id(shifts: &[ShiftRecord], year: i32, month: u32, day: u32) -> u32 {
    shifts
        .iter()
        .filter(|s| s.is_on(year, month, day))
        .map(|s| s.id)
        .max()
        .map_or(1, |id| id.saturating_add(1))
}

/// Returns the first shift on the candidate's date whose interval overlaps it.
///
/// Intervals are half-open `[start, end)`. A candidate overlaps an existing
/// shift when its start lies inside it, its end lies inside it, or it fully
/// contains it.
pub fn find_overlap<'a>(
    existing: &'a [ShiftRecord],
    candidate: &ShiftRecord,
) -> Option<&'a ShiftRecord> {
    let cand_start = parse_clock_time(&candidate.start_time);
    let cand_end = parse_clock_time(&candidate.end_time);

    existing
        .iter()
        .filter(|s| s.is_on(candidate.year, candidate.month, candidate.day))
        .find(|s| {
            let start = parse_clock_time(&s.start_time);
            let end = parse_clock_time(&s.end_time);

            let start_inside = cand_start >= start && cand_start < end;
            let end_inside = cand_end > start && cand_end <= end;
            let contains = cand_start <= start && cand_end >= end;

            start_inside || end_inside || contains
        })
}

/// Returns true if the candidate overlaps any shift on the same date.
///
/// # Examples
///
/// ```
/// use timesheet_engine::calculation::detect_overlap;
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
/// let existing = vec![shift(1, "09:00", "10:30")];
/// assert!(detect_overlap(&existing, &shift(2, "10:00", "11:00")));
/// assert!(!detect_overlap(&existing, &shift(2, "10:30", "12:00")));
/// ```
pub fn detect_overlap(existing: &[ShiftRecord], candidate: &ShiftRecord) -> bool {
    find_overlap(existing, candidate).is_some()
}
