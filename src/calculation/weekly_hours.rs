//! Weekly worked-time totals.
//!
//! Weeks run Monday through Sunday. A Sunday is the seventh day of the
//! week that began on the preceding Monday.

use chrono::{Datelike, Duration, NaiveDate};

use crate::models::{ShiftKey, ShiftRecord};

/// Maximum worked minutes allowed in one Monday-Sunday week.
pub const WEEKLY_MINUTES_LIMIT: u32 = 8 * 60;

/// Returns the Monday and Sunday of the week containing `date`.
///
/// # Examples
///
/// ```
/// use timesheet_engine::calculation::week_bounds;
/// use chrono::NaiveDate;
///
/// // 2025-04-13 is a Sunday
/// let sunday = NaiveDate::from_ymd_opt(2025, 4, 13).unwrap();
/// let (start, end) = week_bounds(sunday);
/// assert_eq!(start, NaiveDate::from_ymd_opt(2025, 4, 7).unwrap());
/// assert_eq!(end, sunday);
/// ```
pub fn week_bounds(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let offset = i64::from(date.weekday().num_days_from_monday());
    let week_start = date - Duration::days(offset);
    (week_start, week_start + Duration::days(6))
}

/// Sums worked minutes of every shift in the week containing `date`.
///
/// Shifts whose date triple is not a real date are skipped. The shift
/// matching `exclude`, if any, is left out; edits use this to drop the
/// pre-edit copy of the record being replaced.
pub fn weekly_worked_minutes(
    shifts: &[ShiftRecord],
    date: NaiveDate,
    exclude: Option<ShiftKey>,
) -> u32 {
    let (week_start, week_end) = week_bounds(date);

    shifts
        .iter()
        .filter(|s| exclude != Some(s.key()))
        .filter(|s| {
            s.date()
                .is_some_and(|d| d >= week_start && d <= week_end)
        })
        .map(ShiftRecord::worked_minutes)
        .fold(0, u32::saturating_add)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn shift(id: u32, month: u32, day: u32, start: &str, end: &str) -> ShiftRecord {
        ShiftRecord {
            id,
            year: 2025,
            month,
            day,
            label: String::new(),
            class_name: "Chemistry".to_string(),
            category: Default::default(),
            teacher_name: String::new(),
            start_time: start.to_string(),
            end_time: end.to_string(),
            break_minutes: 0,
        }
    }

    #[test]
    fn test_week_bounds_for_monday() {
        let (start, end) = week_bounds(date(2025, 4, 7));
        assert_eq!(start, date(2025, 4, 7));
        assert_eq!(end, date(2025, 4, 13));
    }

    #[test]
    fn test_week_bounds_for_midweek() {
        // Thursday
        let (start, end) = week_bounds(date(2025, 4, 10));
        assert_eq!(start, date(2025, 4, 7));
        assert_eq!(end, date(2025, 4, 13));
    }

    #[test]
    fn test_week_bounds_sunday_belongs_to_previous_monday() {
        let (start, _) = week_bounds(date(2025, 4, 13));
        assert_eq!(start, date(2025, 4, 7));
    }

    #[test]
    fn test_week_bounds_cross_month() {
        // 2025-05-01 is a Thursday
        let (start, end) = week_bounds(date(2025, 5, 1));
        assert_eq!(start, date(2025, 4, 28));
        assert_eq!(end, date(2025, 5, 4));
    }

    #[test]
    fn test_weekly_minutes_only_counts_same_week() {
        let shifts = vec![
            shift(1, 4, 7, "09:00", "11:00"),
            shift(1, 4, 13, "09:00", "10:00"),
            shift(1, 4, 14, "09:00", "12:00"),
            shift(1, 4, 6, "09:00", "12:00"),
        ];
        assert_eq!(weekly_worked_minutes(&shifts, date(2025, 4, 9), None), 180);
    }

    #[test]
    fn test_weekly_minutes_across_month_boundary() {
        let shifts = vec![
            shift(1, 4, 29, "09:00", "11:00"),
            shift(1, 5, 2, "09:00", "10:00"),
        ];
        assert_eq!(weekly_worked_minutes(&shifts, date(2025, 5, 1), None), 180);
    }

    #[test]
    fn test_weekly_minutes_excludes_key() {
        let shifts = vec![
            shift(1, 4, 7, "09:00", "11:00"),
            shift(2, 4, 7, "13:00", "14:00"),
        ];
        let exclude = Some(shifts[0].key());
        assert_eq!(weekly_worked_minutes(&shifts, date(2025, 4, 7), exclude), 60);
    }

    #[test]
    fn test_invalid_dates_are_skipped() {
        let shifts = vec![shift(1, 2, 30, "09:00", "11:00")];
        assert_eq!(weekly_worked_minutes(&shifts, date(2025, 3, 2), None), 0);
    }
}
