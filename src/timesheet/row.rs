//! Timesheet half rows.
//!
//! A half row is the 14 cells one day occupies on the template:
//!
//! ```text
//! day | subject x3 | category | HH | : | MM | ～ | HH | : | MM | hours | break
//! ```

use serde::{Deserialize, Serialize};

use crate::calculation::{format_minutes, parse_clock_time};
use crate::models::{AggregatedSubjectShift, CellValue};

/// Cells in one half row.
pub const HALF_ROW_WIDTH: usize = 14;
/// Cells in a reconciled physical row.
pub const FULL_ROW_WIDTH: usize = HALF_ROW_WIDTH * 2;

pub(crate) const SUBJECT_OFFSET: usize = 1;
pub(crate) const START_HOUR_OFFSET: usize = 5;
pub(crate) const START_MINUTE_OFFSET: usize = 7;
pub(crate) const END_HOUR_OFFSET: usize = 9;
pub(crate) const END_MINUTE_OFFSET: usize = 11;
pub(crate) const FORMULA_OFFSET: usize = 12;
pub(crate) const BREAK_OFFSET: usize = 13;

const COLON: &str = ":";
const TILDE: &str = "～";

/// The cells of one day's entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HalfRow {
    /// Day of month in the leading cell.
    pub day: u32,
    /// Exactly [`HALF_ROW_WIDTH`] cells.
    pub cells: Vec<CellValue>,
}

/// Builds the half row for one merged day record.
///
/// # Examples
///
/// ```
/// use timesheet_engine::models::{AggregatedSubjectShift, CellValue, Category};
/// use timesheet_engine::timesheet::{build_row, HALF_ROW_WIDTH};
///
/// let record = AggregatedSubjectShift {
///     day: 5,
///     class_name: "Physics".to_string(),
///     category: Category::Class,
///     teacher_name: String::new(),
///     start_time: "09:00".to_string(),
///     end_time: "10:30".to_string(),
///     break_minutes: 0,
///     source_count: 1,
/// };
/// let row = build_row(&record);
/// assert_eq!(row.cells.len(), HALF_ROW_WIDTH);
/// assert_eq!(row.cells[0], CellValue::Integer(5));
/// assert_eq!(row.cells[11], CellValue::Integer(30));
/// ```
pub fn build_row(record: &AggregatedSubjectShift) -> HalfRow {
    let start = format_minutes(parse_clock_time(&record.start_time));
    let end = format_minutes(parse_clock_time(&record.end_time));
    let subject = CellValue::text(record.class_name.as_str());

    HalfRow {
        day: record.day,
        cells: vec![
            CellValue::Integer(i64::from(record.day)),
            subject.clone(),
            subject.clone(),
            subject,
            CellValue::text(record.category.label()),
            CellValue::Integer(i64::from(start.hours)),
            CellValue::text(COLON),
            CellValue::Integer(i64::from(start.minutes)),
            CellValue::text(TILDE),
            CellValue::Integer(i64::from(end.hours)),
            CellValue::text(COLON),
            CellValue::Integer(i64::from(end.minutes)),
            CellValue::WorkedHoursPlaceholder,
            CellValue::Integer(i64::from(record.break_minutes)),
        ],
    }
}

/// Half row for a day without any shift, stamped with its day number.
pub fn filler_half_row(day: u32) -> HalfRow {
    HalfRow {
        day,
        cells: vec![
            CellValue::Integer(i64::from(day)),
            CellValue::Blank,
            CellValue::Blank,
            CellValue::Blank,
            CellValue::Blank,
            CellValue::Blank,
            CellValue::text(COLON),
            CellValue::Blank,
            CellValue::text(TILDE),
            CellValue::Blank,
            CellValue::text(COLON),
            CellValue::Blank,
            CellValue::WorkedHoursPlaceholder,
            CellValue::Blank,
        ],
    }
}

/// Fourteen blank cells, appended after day 16.
pub fn blank_filler() -> Vec<CellValue> {
    vec![CellValue::Blank; HALF_ROW_WIDTH]
}
