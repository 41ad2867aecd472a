//! Timesheet row reconciler and export.
//!
//! Merged day records become 14-cell half rows, half rows are paired into
//! the template's 28-cell physical rows, and the rows are written onto a
//! copy of the template before it is rendered to xlsx.
//!
//! ```text
//! AggregatedSubjectShift -> HalfRow -> ReconciledRow -> Worksheet -> xlsx
//! ```

mod day_pairing;
mod era;
mod export;
mod formula;
mod reconcile;
mod row;
mod template;
mod writer;
mod xlsx;

pub use day_pairing::{DAY_PAIRING, pair_day};
pub use era::{EraYear, JapaneseEra, japanese_era, period_label};
pub use export::{ExportedTimesheet, build_timesheet_rows, export_timesheet, timesheet_file_name};
pub use formula::{cell_ref, column_letter, worked_hours_formula};
pub use reconcile::{ReconciledRow, reconcile_rows};
pub use row::{FULL_ROW_WIDTH, HALF_ROW_WIDTH, HalfRow, blank_filler, build_row, filler_half_row};
pub use template::{TemplateWorkbook, Worksheet};
pub use writer::{TimesheetHeader, WriteReport, write_headers, write_template};
pub use xlsx::render_workbook;
