//! Salary and monthly summary calculation.

use std::collections::BTreeMap;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::config::Grade;
use crate::models::ShiftRecord;

use super::{HoursMinutes, SubjectTotal, aggregate_by_subject, format_minutes};

/// Salary for a number of worked minutes at an hourly wage.
///
/// `minutes / 60 * wage`, rounded half-up to a whole currency unit.
///
/// # Examples
///
/// ```
/// use timesheet_engine::calculation::calculate_monthly_salary;
/// use rust_decimal::Decimal;
///
/// // 4.5 hours at 1010 per hour
/// assert_eq!(calculate_monthly_salary(270, Decimal::from(1010)), Decimal::from(4545));
/// ```
pub fn calculate_monthly_salary(total_minutes: u32, hourly_wage: Decimal) -> Decimal {
    (Decimal::from(total_minutes) * hourly_wage / Decimal::from(60))
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Worked time and pay for one month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlySummary {
    /// Calendar year.
    pub year: i32,
    /// Calendar month (1-12).
    pub month: u32,
    /// Grade label the wage was taken from.
    pub grade_label: String,
    /// Hourly wage applied.
    pub hourly_wage: Decimal,
    /// Totals per subject.
    pub subjects: BTreeMap<String, SubjectTotal>,
    /// Number of shifts in the month.
    pub shift_count: usize,
    /// Worked minutes in the month.
    pub total_minutes: u32,
    /// The same total as hours and minutes.
    pub total: HoursMinutes,
    /// Salary for the month.
    pub salary: Decimal,
}

/// Summarizes the shifts falling in `year`/`month`.
///
/// Shifts from other months are ignored, so callers may pass an owner's
/// whole record set.
pub fn summarize_month(
    shifts: &[ShiftRecord],
    year: i32,
    month: u32,
    grade: &Grade,
) -> MonthlySummary {
    let in_month: Vec<ShiftRecord> = shifts
        .iter()
        .filter(|s| s.year == year && s.month == month)
        .cloned()
        .collect();

    let subjects = aggregate_by_subject(&in_month);
    let total_minutes = subjects
        .values()
        .map(|t| t.total_minutes)
        .fold(0, u32::saturating_add);

    MonthlySummary {
        year,
        month,
        grade_label: grade.label.clone(),
        hourly_wage: grade.hourly_wage,
        subjects,
        shift_count: in_month.len(),
        total_minutes,
        total: format_minutes(total_minutes),
        salary: calculate_monthly_salary(total_minutes, grade.hourly_wage),
    }
}
