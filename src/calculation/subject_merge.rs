//! Merging of same-day, same-subject shifts.
//!
//! A subject taught twice on one day occupies a single timesheet row. The
//! merged row spans the earliest start to the latest end, and the idle time
//! between the shifts is booked as break so the worked total is unchanged.

use std::collections::BTreeMap;

use crate::models::{AggregatedSubjectShift, ShiftRecord};

use super::{parse_clock_time, to_clock_time};

/// Merges the shifts one subject has on one day.
///
/// Returns `None` for an empty slice. A single shift is returned as is.
/// For several shifts the combined break is every shift's own break plus
/// each idle gap between consecutive shifts ordered by start time; gaps are
/// measured from the furthest end reached so far, so overlapping shifts
/// contribute no gap.
///
/// # Examples
///
/// ```
/// use timesheet_engine::calculation::merge_same_day_subject_shifts;
/// use timesheet_engine::models::ShiftRecord;
///
/// let shift = |start: &str, end: &str, brk| ShiftRecord {
///     id: 1,
///     year: 2025,
///     month: 4,
///     day: 10,
///     label: String::new(),
///     class_name: "Physics".to_string(),
///     category: Default::default(),
///     teacher_name: String::new(),
///     start_time: start.to_string(),
///     end_time: end.to_string(),
///     break_minutes: brk,
/// };
///
/// let merged = merge_same_day_subject_shifts(&[
///     shift("13:00", "14:30", 10),
///     shift("09:00", "10:30", 0),
/// ])
/// .unwrap();
/// assert_eq!(merged.start_time, "09:00");
/// assert_eq!(merged.end_time, "14:30");
/// assert_eq!(merged.break_minutes, 160);
/// assert_eq!(merged.worked_minutes(), 170);
/// ```
pub fn merge_same_day_subject_shifts(shifts: &[ShiftRecord]) -> Option<AggregatedSubjectShift> {
    let (first, rest) = shifts.split_first()?;
    if rest.is_empty() {
        return Some(first.into());
    }

    let mut ordered: Vec<&ShiftRecord> = shifts.iter().collect();
    ordered.sort_by_key(|s| parse_clock_time(&s.start_time));

    let mut own_breaks: u32 = 0;
    let mut idle: u32 = 0;
    let mut reach: Option<u32> = None;
    for shift in &ordered {
        let start = parse_clock_time(&shift.start_time);
        let end = parse_clock_time(&shift.end_time);
        own_breaks = own_breaks.saturating_add(shift.break_minutes);
        if let Some(reached) = reach {
            idle = idle.saturating_add(start.saturating_sub(reached));
        }
        reach = Some(reach.map_or(end, |r| r.max(end)));
    }

    let earliest = ordered
        .iter()
        .map(|s| parse_clock_time(&s.start_time))
        .min()
        .unwrap_or(0);
    let latest = reach.unwrap_or(0);

    let last = shifts.last().unwrap_or(first);
    let teacher_name = shifts
        .iter()
        .rev()
        .map(|s| s.teacher_name.trim())
        .find(|t| !t.is_empty())
        .unwrap_or_default()
        .to_string();

    Some(AggregatedSubjectShift {
        day: first.day,
        class_name: first.subject_name().to_string(),
        category: last.category,
        teacher_name,
        start_time: to_clock_time(earliest),
        end_time: to_clock_time(latest),
        break_minutes: own_breaks.saturating_add(idle),
        source_count: shifts.len(),
    })
}

/// Groups shifts by day and subject and merges each group.
///
/// The output is ordered by day, then by merged start time, then by
/// subject name.
pub fn merge_by_day_and_subject(shifts: &[ShiftRecord]) -> Vec<AggregatedSubjectShift> {
    let mut groups: BTreeMap<(u32, &str), Vec<ShiftRecord>> = BTreeMap::new();
    for shift in shifts {
        groups
            .entry((shift.day, shift.subject_name()))
            .or_default()
            .push(shift.clone());
    }

    let mut merged: Vec<AggregatedSubjectShift> = groups
        .values()
        .filter_map(|group| merge_same_day_subject_shifts(group))
        .collect();

    merged.sort_by(|a, b| {
        a.day
            .cmp(&b.day)
            .then_with(|| parse_clock_time(&a.start_time).cmp(&parse_clock_time(&b.start_time)))
            .then_with(|| a.class_name.cmp(&b.class_name))
    });
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    fn shift(class: &str, day: u32, start: &str, end: &str, brk: u32) -> ShiftRecord {
        ShiftRecord {
            id: 1,
            year: 2025,
            month: 4,
            day,
            label: String::new(),
            class_name: class.to_string(),
            category: Category::Class,
            teacher_name: String::new(),
            start_time: start.to_string(),
            end_time: end.to_string(),
            break_minutes: brk,
        }
    }

    #[test]
    fn test_empty_slice_gives_none() {
        assert!(merge_same_day_subject_shifts(&[]).is_none());
    }

    #[test]
    fn test_single_shift_is_unchanged() {
        let original = shift("Physics", 10, "09:00", "10:30", 15);
        let merged = merge_same_day_subject_shifts(std::slice::from_ref(&original)).unwrap();

        assert_eq!(merged.start_time, "09:00");
        assert_eq!(merged.end_time, "10:30");
        assert_eq!(merged.break_minutes, 15);
        assert_eq!(merged.source_count, 1);
    }

    #[test]
    fn test_two_shifts_book_gap_as_break() {
        let merged = merge_same_day_subject_shifts(&[
            shift("Physics", 10, "09:00", "10:30", 0),
            shift("Physics", 10, "13:00", "14:30", 10),
        ])
        .unwrap();

        assert_eq!(merged.start_time, "09:00");
        assert_eq!(merged.end_time, "14:30");
        assert_eq!(merged.break_minutes, 150 + 10);
        assert_eq!(merged.source_count, 2);
    }

    #[test]
    fn test_three_shifts_count_each_gap_once() {
        let parts = [
            shift("Physics", 10, "09:00", "10:00", 0),
            shift("Physics", 10, "11:00", "12:00", 0),
            shift("Physics", 10, "13:00", "14:00", 0),
        ];
        let merged = merge_same_day_subject_shifts(&parts).unwrap();

        assert_eq!(merged.break_minutes, 120);
        let individual: u32 = parts.iter().map(ShiftRecord::worked_minutes).sum();
        assert_eq!(merged.worked_minutes(), individual);
    }

    #[test]
    fn test_huge_breaks_saturate() {
        let merged = merge_same_day_subject_shifts(&[
            shift("Physics", 10, "09:00", "10:30", u32::MAX - 1),
            shift("Physics", 10, "13:00", "14:30", 10),
        ])
        .unwrap();

        assert_eq!(merged.break_minutes, u32::MAX);
        assert_eq!(merged.worked_minutes(), 0);
    }

    #[test]
    fn test_overlapping_shifts_add_no_gap() {
        let merged = merge_same_day_subject_shifts(&[
            shift("Physics", 10, "09:00", "12:00", 0),
            shift("Physics", 10, "10:00", "11:00", 0),
            shift("Physics", 10, "12:30", "13:00", 0),
        ])
        .unwrap();

        assert_eq!(merged.end_time, "13:00");
        assert_eq!(merged.break_minutes, 30);
    }

    #[test]
    fn test_teacher_taken_from_last_non_empty() {
        let mut a = shift("Physics", 10, "09:00", "10:00", 0);
        a.teacher_name = "Sato".to_string();
        let b = shift("Physics", 10, "11:00", "12:00", 0);

        let merged = merge_same_day_subject_shifts(&[a, b]).unwrap();
        assert_eq!(merged.teacher_name, "Sato");
    }

    #[test]
    fn test_merge_by_day_and_subject_groups_and_orders() {
        let merged = merge_by_day_and_subject(&[
            shift("Physics", 21, "09:00", "10:00", 0),
            shift("Chemistry", 5, "13:00", "14:00", 0),
            shift("Physics", 5, "09:00", "10:00", 0),
            shift("Physics", 5, "10:30", "11:00", 0),
        ]);

        assert_eq!(merged.len(), 3);
        assert_eq!((merged[0].day, merged[0].class_name.as_str()), (5, "Physics"));
        assert_eq!(merged[0].break_minutes, 30);
        assert_eq!((merged[1].day, merged[1].class_name.as_str()), (5, "Chemistry"));
        assert_eq!(merged[2].day, 21);
    }
}
