//! Pairing of half rows into the template's physical rows.

use serde::{Deserialize, Serialize};

use crate::models::CellValue;

use super::row::{HalfRow, blank_filler, filler_half_row};
use super::pair_day;

/// One physical template row: two half rows side by side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconciledRow {
    /// Exactly [`FULL_ROW_WIDTH`](super::FULL_ROW_WIDTH) cells.
    pub cells: Vec<CellValue>,
}

impl ReconciledRow {
    /// Day number in the leading cell, matched against the template.
    pub fn leading_day(&self) -> Option<u32> {
        self.cells
            .first()
            .and_then(CellValue::as_integer)
            .and_then(|d| u32::try_from(d).ok())
    }
}

/// Lays half rows out into full rows using the day pairing.
///
/// Single pass over `half_rows` in input order. Each unplaced row is joined
/// with the first unplaced row carrying its partner day, lower day first.
/// A missing partner is replaced by a filler half row for the partner day.
/// Day 16, which has no partner, is followed by fourteen blanks. Every
/// output row is therefore 28 cells wide.
///
/// # Examples
///
/// ```
/// use timesheet_engine::timesheet::{filler_half_row, reconcile_rows, FULL_ROW_WIDTH};
///
/// let rows = reconcile_rows(&[filler_half_row(21), filler_half_row(5)]);
/// assert_eq!(rows.len(), 1);
/// assert_eq!(rows[0].cells.len(), FULL_ROW_WIDTH);
/// assert_eq!(rows[0].leading_day(), Some(5));
/// ```
pub fn reconcile_rows(half_rows: &[HalfRow]) -> Vec<ReconciledRow> {
    let mut placed = vec![false; half_rows.len()];
    let mut rows = Vec::new();

    for (i, row) in half_rows.iter().enumerate() {
        if placed[i] {
            continue;
        }
        placed[i] = true;

        let Some(partner_day) = pair_day(row.day) else {
            let mut cells = row.cells.clone();
            cells.extend(blank_filler());
            rows.push(ReconciledRow { cells });
            continue;
        };

        let partner = match (i + 1..half_rows.len())
            .find(|&j| !placed[j] && half_rows[j].day == partner_day)
        {
            Some(j) => {
                placed[j] = true;
                half_rows[j].clone()
            }
            None => filler_half_row(partner_day),
        };

        let (first, second) = if row.day < partner_day {
            (row.clone(), partner)
        } else {
            (partner, row.clone())
        };

        let mut cells = first.cells;
        cells.extend(second.cells);
        rows.push(ReconciledRow { cells });
    }

    rows
}
