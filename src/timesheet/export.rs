//! End-to-end timesheet export.

use tracing::{info, warn};

use crate::calculation::merge_by_day_and_subject;
use crate::config::{EngineConfig, Grade};
use crate::error::{EngineError, EngineResult};
use crate::models::{ShiftRecord, UserProfile};

use super::era::{japanese_era, period_label};
use super::reconcile::{ReconciledRow, reconcile_rows};
use super::row::{HALF_ROW_WIDTH, SUBJECT_OFFSET, build_row};
use super::template::TemplateWorkbook;
use super::writer::{TimesheetHeader, WriteReport, write_headers, write_template};
use super::xlsx::render_workbook;

const FALLBACK_FILE_TOKEN: &str = "勤務表";

/// A rendered timesheet ready to be handed to the user.
#[derive(Debug, Clone)]
pub struct ExportedTimesheet {
    /// Suggested download name.
    pub file_name: String,
    /// xlsx file contents.
    pub bytes: Vec<u8>,
    /// What the writer placed and what it could not.
    pub report: WriteReport,
}

/// Builds the reconciled rows for one month of shifts.
///
/// Shifts outside the month are ignored. Same-day shifts of one subject are
/// merged before the rows are laid out.
pub fn build_timesheet_rows(shifts: &[ShiftRecord], year: i32, month: u32) -> Vec<ReconciledRow> {
    let month_shifts: Vec<ShiftRecord> = shifts
        .iter()
        .filter(|s| s.year == year && s.month == month)
        .cloned()
        .collect();

    let half_rows: Vec<_> = merge_by_day_and_subject(&month_shifts)
        .iter()
        .map(build_row)
        .collect();

    reconcile_rows(&half_rows)
}

/// File name for an exported timesheet, e.g. `令和7年4月_線形代数.xlsx`.
///
/// The token is the first non-empty subject in the first row; characters
/// not allowed in file names are replaced with `_`.
pub fn timesheet_file_name(year: i32, month: u32, rows: &[ReconciledRow]) -> String {
    let token = rows
        .first()
        .and_then(|row| {
            [SUBJECT_OFFSET, HALF_ROW_WIDTH + SUBJECT_OFFSET]
                .iter()
                .find_map(|&i| row.cells.get(i).and_then(|c| c.as_text()))
        })
        .map(sanitize)
        .unwrap_or_else(|| FALLBACK_FILE_TOKEN.to_string());

    format!("{}{}月_{}.xlsx", japanese_era(year, month), month, token)
}

fn sanitize(token: &str) -> String {
    token
        .chars()
        .map(|c| match c {
            '\\' | '/' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_whitespace() => '_',
            c => c,
        })
        .collect()
}

fn header_for(
    profile: &UserProfile,
    grade: &Grade,
    year: i32,
    month: u32,
    shifts: &[ShiftRecord],
) -> TimesheetHeader {
    let grade_line = match profile.bank.as_deref().map(str::trim) {
        Some(bank) if !bank.is_empty() => format!("{}　{}", grade.label, bank),
        _ => grade.label.clone(),
    };

    let mut teachers: Vec<&str> = Vec::new();
    for shift in shifts.iter().filter(|s| s.year == year && s.month == month) {
        let name = shift.teacher_name.trim();
        if !name.is_empty() && !teachers.contains(&name) {
            teachers.push(name);
        }
    }

    TimesheetHeader {
        period: period_label(year, month),
        kana: profile.kana.clone(),
        name: profile.name.clone(),
        staff_id: profile.staff_id.clone(),
        grade: grade_line,
        teacher_confirmation: teachers.join("、"),
    }
}

/// Exports one month of shifts as an xlsx timesheet.
///
/// The template is read from the configured path on every call. A missing
/// template or worksheet aborts before anything is rendered, and so does a
/// month with more rows than the template can hold.
///
/// # Errors
///
/// - [`EngineError::TemplateNotFound`](crate::error::EngineError::TemplateNotFound)
///   if the template file cannot be read
/// - [`EngineError::WorksheetNotFound`](crate::error::EngineError::WorksheetNotFound)
///   if the configured worksheet is absent
/// - [`EngineError::TemplateFull`](crate::error::EngineError::TemplateFull)
///   if some rows find neither a day row nor an overflow row
/// - [`EngineError::ExportError`](crate::error::EngineError::ExportError)
///   if rendering fails
pub fn export_timesheet(
    config: &EngineConfig,
    profile: &UserProfile,
    grade: &Grade,
    year: i32,
    month: u32,
    shifts: &[ShiftRecord],
) -> EngineResult<ExportedTimesheet> {
    let layout = config.layout();
    let mut template = TemplateWorkbook::load(config.template_path())?;
    let sheet = template.sheet_mut(&layout.worksheet)?;

    let rows = build_timesheet_rows(shifts, year, month);
    let report = write_template(&rows, sheet, layout);
    if !report.unplaced_days.is_empty() {
        warn!(
            unplaced = ?report.unplaced_days,
            "Timesheet rows did not fit the template, export aborted"
        );
        return Err(EngineError::TemplateFull {
            days: report.unplaced_days,
        });
    }

    write_headers(&header_for(profile, grade, year, month, shifts), sheet, layout);

    let bytes = render_workbook(&template)?;
    let file_name = timesheet_file_name(year, month, &rows);

    info!(
        file_name = %file_name,
        rows = rows.len(),
        rows_written = report.rows_written,
        bytes = bytes.len(),
        "Timesheet exported"
    );

    Ok(ExportedTimesheet {
        file_name,
        bytes,
        report,
    })
}
