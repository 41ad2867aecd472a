//! Writes reconciled rows and header fields onto the template worksheet.

use serde::Serialize;
use tracing::{debug, warn};

use crate::config::{CellPosition, TemplateLayout};
use crate::models::CellValue;

use super::formula::worked_hours_formula;
use super::reconcile::ReconciledRow;
use super::row::{FORMULA_OFFSET, HALF_ROW_WIDTH};
use super::template::Worksheet;

/// Outcome of writing rows onto the template.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WriteReport {
    /// Physical rows that received data.
    pub rows_written: usize,
    /// Cells overwritten, blanks excluded.
    pub cells_written: usize,
    /// Leading days of rows that found no free template row.
    pub unplaced_days: Vec<u32>,
}

/// Header fields printed outside the day rows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TimesheetHeader {
    /// Period text, e.g. `令和7年4月分`.
    pub period: String,
    /// Furigana.
    pub kana: String,
    /// Full name.
    pub name: String,
    /// Staff id.
    pub staff_id: String,
    /// Grade label, with the bank appended when present.
    pub grade: String,
    /// Teachers confirming the month.
    pub teacher_confirmation: String,
}

/// Writes reconciled rows onto the worksheet.
///
/// Physical rows `1..=max_data_row` are scanned top to bottom. A row whose
/// day cell holds a day number takes the first unconsumed reconciled row
/// with that leading day. Rows still unconsumed afterwards, such as a second
/// subject on an already written date, go to the layout's overflow rows in
/// order. Values replace the existing ones while the cell style stays.
/// Blank values leave the template cell as it is, and worked hours
/// placeholders become formulas over the row's own cells.
pub fn write_template(
    rows: &[ReconciledRow],
    sheet: &mut Worksheet,
    layout: &TemplateLayout,
) -> WriteReport {
    let mut consumed = vec![false; rows.len()];
    let mut report = WriteReport::default();

    for physical_row in 1..=layout.max_data_row {
        let Some(day) = sheet.value(physical_row, layout.day_column).as_integer() else {
            continue;
        };

        let Some(index) = (0..rows.len())
            .find(|&i| !consumed[i] && rows[i].leading_day().map(i64::from) == Some(day))
        else {
            continue;
        };
        consumed[index] = true;

        report.cells_written += write_row(sheet, physical_row, layout.day_column, &rows[index]);
        report.rows_written += 1;
        debug!(row = physical_row, day, "Wrote timesheet row");
    }

    let mut overflow = layout
        .overflow_rows
        .iter()
        .copied()
        .filter(|&row| row <= layout.max_data_row);

    for (row, _) in rows.iter().zip(&consumed).filter(|(_, c)| !**c) {
        let day = row.leading_day().unwrap_or_default();
        match overflow.next() {
            Some(physical_row) => {
                report.cells_written += write_row(sheet, physical_row, layout.day_column, row);
                report.rows_written += 1;
                debug!(row = physical_row, day, "Wrote timesheet row to overflow row");
            }
            None => {
                warn!(day, "No template row left for timesheet row");
                report.unplaced_days.push(day);
            }
        }
    }

    report
}

fn write_row(sheet: &mut Worksheet, row: u32, first_column: u32, data: &ReconciledRow) -> usize {
    let mut written = 0;

    for (offset, value) in data.cells.iter().enumerate() {
        let column = first_column + offset as u32;
        let value = match value {
            CellValue::Blank => continue,
            CellValue::WorkedHoursPlaceholder => {
                debug_assert_eq!(offset % HALF_ROW_WIDTH, FORMULA_OFFSET);
                let half_start = first_column + (offset / HALF_ROW_WIDTH * HALF_ROW_WIDTH) as u32;
                CellValue::Formula(worked_hours_formula(row, half_start))
            }
            other => other.clone(),
        };
        sheet.write_value(row, column, value);
        written += 1;
    }

    written
}

/// Writes the header fields at their configured positions.
///
/// Empty fields are skipped.
pub fn write_headers(header: &TimesheetHeader, sheet: &mut Worksheet, layout: &TemplateLayout) {
    for &row in &layout.period_rows {
        write_text(sheet, CellPosition { row, column: layout.period_column }, &header.period);
    }
    write_text(sheet, layout.furigana, &header.kana);
    write_text(sheet, layout.name, &header.name);
    write_text(sheet, layout.staff_id, &header.staff_id);
    write_text(sheet, layout.grade, &header.grade);
    write_text(sheet, layout.teacher_confirmation, &header.teacher_confirmation);
}

fn write_text(sheet: &mut Worksheet, at: CellPosition, text: &str) {
    if !text.trim().is_empty() {
        sheet.write_value(at.row, at.column, CellValue::text(text));
    }
}
