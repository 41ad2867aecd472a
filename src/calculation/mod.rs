//! Calculation logic for the Timesheet Engine.
//!
//! This module contains the time arithmetic on `HH:MM` clock strings, the
//! per-day and per-week business rules applied before a shift is stored,
//! per-subject aggregation and same-day merging, salary calculation, and
//! promotion of recurring work templates into dated shifts.

mod clock_time;
mod daily_shifts;
mod salary;
mod shift_validation;
mod subject_merge;
mod subject_summary;
mod weekly_hours;
mod work_promotion;

pub use clock_time::{
    HoursMinutes, MINUTES_PER_DAY, format_minutes, parse_clock_time, to_clock_time, worked_minutes,
};
pub use daily_shifts::{
    MAX_SHIFTS_PER_DAY, detect_overlap, find_overlap, next_shift_id, shifts_on_date,
};
pub use salary::{MonthlySummary, calculate_monthly_salary, summarize_month};
pub use shift_validation::{Rejection, ShiftCheck, validate_edited_shift, validate_new_shift};
pub use subject_merge::{merge_by_day_and_subject, merge_same_day_subject_shifts};
pub use subject_summary::{SubjectTotal, UNSPECIFIED_SUBJECT, aggregate_by_subject};
pub use weekly_hours::{WEEKLY_MINUTES_LIMIT, week_bounds, weekly_worked_minutes};
pub use work_promotion::{check_duplicate_work, dates_for_weekday, promote_work};
