//! Spreadsheet formula and cell-reference helpers.

use super::row::{
    BREAK_OFFSET, END_HOUR_OFFSET, END_MINUTE_OFFSET, START_HOUR_OFFSET, START_MINUTE_OFFSET,
};

/// Converts a 1-based column number into its letter name.
///
/// # Examples
///
/// ```
/// use timesheet_engine::timesheet::column_letter;
///
/// assert_eq!(column_letter(1), "A");
/// assert_eq!(column_letter(26), "Z");
/// assert_eq!(column_letter(28), "AB");
/// ```
pub fn column_letter(column: u32) -> String {
    let mut letters = Vec::new();
    let mut n = column;
    while n > 0 {
        let rem = (n - 1) % 26;
        letters.push(char::from(b'A' + rem as u8));
        n = (n - 1) / 26;
    }
    letters.iter().rev().collect()
}

/// A1-style reference for a 1-based row and column.
pub fn cell_ref(row: u32, column: u32) -> String {
    format!("{}{}", column_letter(column), row)
}

/// Worked-hours formula for the half row starting at `half_start_column`.
///
/// Hours are rounded to three decimals and then up to the next half hour.
///
/// # Examples
///
/// ```
/// use timesheet_engine::timesheet::worked_hours_formula;
///
/// assert_eq!(
///     worked_hours_formula(13, 1),
///     "CEILING(ROUND(((TIME(J13,L13,0)-TIME(F13,H13,0))*24-N13/60),3),0.5)"
/// );
/// ```
pub fn worked_hours_formula(row: u32, half_start_column: u32) -> String {
    let at = |offset: usize| cell_ref(row, half_start_column + offset as u32);
    format!(
        "CEILING(ROUND(((TIME({},{},0)-TIME({},{},0))*24-{}/60),3),0.5)",
        at(END_HOUR_OFFSET),
        at(END_MINUTE_OFFSET),
        at(START_HOUR_OFFSET),
        at(START_MINUTE_OFFSET),
        at(BREAK_OFFSET),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_letters() {
        assert_eq!(column_letter(14), "N");
        assert_eq!(column_letter(15), "O");
        assert_eq!(column_letter(27), "AA");
        assert_eq!(column_letter(52), "AZ");
        assert_eq!(column_letter(53), "BA");
    }

    #[test]
    fn test_cell_ref() {
        assert_eq!(cell_ref(47, 3), "C47");
    }

    #[test]
    fn test_right_half_formula_uses_right_half_cells() {
        assert_eq!(
            worked_hours_formula(20, 15),
            "CEILING(ROUND(((TIME(X20,Z20,0)-TIME(T20,V20,0))*24-AB20/60),3),0.5)"
        );
    }
}
