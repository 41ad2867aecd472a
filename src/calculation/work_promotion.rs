//! Promotion of recurring work templates into dated shifts.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::models::{ShiftRecord, WorkTemplate};

use super::{Rejection, next_shift_id};

/// Returns every date in `year`/`month` falling on `weekday`.
///
/// An invalid month yields no dates.
///
/// # Examples
///
/// ```
/// use timesheet_engine::calculation::dates_for_weekday;
/// use chrono::Weekday;
///
/// // Tuesdays in April 2025
/// let days: Vec<u32> = dates_for_weekday(2025, 4, Weekday::Tue)
///     .iter()
///     .map(chrono::Datelike::day)
///     .collect();
/// assert_eq!(days, vec![1, 8, 15, 22, 29]);
/// ```
pub fn dates_for_weekday(year: i32, month: u32, weekday: Weekday) -> Vec<NaiveDate> {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return Vec::new();
    };

    first
        .iter_days()
        .take_while(|d| d.month() == month)
        .filter(|d| d.weekday() == weekday)
        .collect()
}

/// Builds the shifts a work template produces for one month.
///
/// Each shift takes the next free id on its date given `existing`; the
/// shifts are not validated here.
pub fn promote_work(
    work: &WorkTemplate,
    year: i32,
    month: u32,
    existing: &[ShiftRecord],
) -> Vec<ShiftRecord> {
    dates_for_weekday(year, month, work.weekday)
        .into_iter()
        .map(|date| ShiftRecord {
            id: next_shift_id(existing, year, month, date.day()),
            year,
            month,
            day: date.day(),
            label: work.label.clone(),
            class_name: work.class_name.clone(),
            category: work.category,
            teacher_name: work.teacher_name.clone(),
            start_time: work.start_time.clone(),
            end_time: work.end_time.clone(),
            break_minutes: work.break_minutes,
        })
        .collect()
}

/// Rejects a work template whose subject and teacher are already registered.
///
/// Names are compared after trimming surrounding whitespace. A template
/// with the same id as an existing one is treated as an update of it.
pub fn check_duplicate_work(
    works: &[WorkTemplate],
    candidate: &WorkTemplate,
) -> Result<(), Rejection> {
    let class_name = candidate.class_name.trim();
    let teacher_name = candidate.teacher_name.trim();

    let duplicate = works.iter().any(|w| {
        w.id != candidate.id
            && w.class_name.trim() == class_name
            && w.teacher_name.trim() == teacher_name
    });

    if duplicate {
        return Err(Rejection::DuplicateWork {
            class_name: class_name.to_string(),
            teacher_name: teacher_name.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    fn work(id: u32, class: &str, teacher: &str) -> WorkTemplate {
        WorkTemplate {
            id,
            weekday: Weekday::Wed,
            label: "TA".to_string(),
            class_name: class.to_string(),
            teacher_name: teacher.to_string(),
            category: Category::Class,
            start_time: "10:40".to_string(),
            end_time: "12:10".to_string(),
            break_minutes: 0,
        }
    }

    #[test]
    fn test_dates_for_weekday_february_non_leap() {
        let dates = dates_for_weekday(2025, 2, Weekday::Fri);
        assert_eq!(dates.len(), 4);
        assert!(dates.iter().all(|d| d.month() == 2));
    }

    #[test]
    fn test_dates_for_invalid_month_is_empty() {
        assert!(dates_for_weekday(2025, 13, Weekday::Mon).is_empty());
    }

    #[test]
    fn test_promote_work_copies_fields() {
        let shifts = promote_work(&work(1, "Physics", "Sato"), 2025, 4, &[]);

        // Wednesdays in April 2025: 2, 9, 16, 23, 30
        let days: Vec<u32> = shifts.iter().map(|s| s.day).collect();
        assert_eq!(days, vec![2, 9, 16, 23, 30]);
        assert!(shifts.iter().all(|s| s.id == 1));
        assert_eq!(shifts[0].class_name, "Physics");
        assert_eq!(shifts[0].worked_minutes(), 90);
    }

    #[test]
    fn test_promote_work_assigns_next_free_id() {
        let existing = promote_work(&work(1, "Physics", "Sato"), 2025, 4, &[]);
        let shifts = promote_work(&work(2, "Chemistry", "Ito"), 2025, 4, &existing);
        assert!(shifts.iter().all(|s| s.id == 2));
    }

    #[test]
    fn test_duplicate_work_rejected() {
        let works = vec![work(1, "Physics", "Sato")];
        let result = check_duplicate_work(&works, &work(2, " Physics ", "Sato"));
        assert_eq!(
            result,
            Err(Rejection::DuplicateWork {
                class_name: "Physics".to_string(),
                teacher_name: "Sato".to_string(),
            })
        );
    }

    #[test]
    fn test_same_subject_other_teacher_allowed() {
        let works = vec![work(1, "Physics", "Sato")];
        assert!(check_duplicate_work(&works, &work(2, "Physics", "Ito")).is_ok());
    }

    #[test]
    fn test_updating_same_template_is_not_duplicate() {
        let works = vec![work(1, "Physics", "Sato")];
        assert!(check_duplicate_work(&works, &work(1, "Physics", "Sato")).is_ok());
    }
}
