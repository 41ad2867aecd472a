//! Renders the in-memory template to xlsx bytes.

use rust_xlsxwriter::{Format, FormatAlign, FormatBorder, Workbook};

use crate::error::{EngineError, EngineResult};
use crate::models::{Align, CellStyle, CellValue};

use super::template::TemplateWorkbook;

/// Serializes the workbook into an xlsx file held in memory.
///
/// Each cell is written with a format built from its own style, so styles
/// survive any value overwrite made before rendering.
pub fn render_workbook(template: &TemplateWorkbook) -> EngineResult<Vec<u8>> {
    let mut workbook = Workbook::new();

    for sheet in template.sheets() {
        let target = workbook.add_worksheet();
        target.set_name(sheet.name())?;

        for (&column, &width) in sheet.column_widths() {
            target.set_column_width(to_col(column)?, width)?;
        }

        for cell in sheet.cells() {
            let format = cell.style.as_ref().map_or_else(Format::new, to_format);
            let row = cell.row.checked_sub(1).ok_or_else(|| out_of_range(cell.row, cell.column))?;
            let col = to_col(cell.column)?;

            match &cell.value {
                CellValue::Blank => {
                    target.write_blank(row, col, &format)?;
                }
                CellValue::Text(text) => {
                    target.write_string_with_format(row, col, text, &format)?;
                }
                CellValue::Integer(value) => {
                    target.write_number_with_format(row, col, *value as f64, &format)?;
                }
                CellValue::Formula(formula) => {
                    target.write_formula_with_format(row, col, formula.as_str(), &format)?;
                }
                CellValue::WorkedHoursPlaceholder => {
                    return Err(EngineError::ExportError {
                        message: format!(
                            "unresolved worked hours placeholder at row {} column {}",
                            cell.row, cell.column
                        ),
                    });
                }
            }
        }
    }

    Ok(workbook.save_to_buffer()?)
}

fn to_col(column: u32) -> EngineResult<u16> {
    column
        .checked_sub(1)
        .and_then(|c| u16::try_from(c).ok())
        .ok_or_else(|| out_of_range(0, column))
}

fn out_of_range(row: u32, column: u32) -> EngineError {
    EngineError::ExportError {
        message: format!("cell position out of range: row {} column {}", row, column),
    }
}

fn to_format(style: &CellStyle) -> Format {
    let mut format = Format::new();
    if style.bold {
        format = format.set_bold();
    }
    if let Some(size) = style.font_size {
        format = format.set_font_size(size);
    }
    format = match style.align {
        Align::General => format,
        Align::Left => format.set_align(FormatAlign::Left),
        Align::Center => format.set_align(FormatAlign::Center),
        Align::Right => format.set_align(FormatAlign::Right),
    };
    if style.border {
        format = format.set_border(FormatBorder::Thin);
    }
    if let Some(number_format) = &style.number_format {
        format = format.set_num_format(number_format);
    }
    if let Some(rgb) = style
        .background
        .as_deref()
        .and_then(|hex| u32::from_str_radix(hex.trim_start_matches('#'), 16).ok())
    {
        format = format.set_background_color(rgb);
    }
    format
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timesheet::Worksheet;

    fn workbook_with(value: CellValue) -> TemplateWorkbook {
        let mut sheet = Worksheet::new("勤務表");
        sheet.set_column_width(1, 4.0);
        let style = CellStyle {
            bold: true,
            border: true,
            background: Some("F2F2F2".to_string()),
            ..Default::default()
        };
        sheet.set_cell(1, 1, value, Some(style));
        sheet.set_cell(2, 1, CellValue::Blank, None);
        TemplateWorkbook::new(vec![sheet])
    }

    #[test]
    fn test_render_produces_zip_container() {
        let bytes = render_workbook(&workbook_with(CellValue::Integer(3))).unwrap();
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn test_render_formula_cell() {
        let formula = CellValue::Formula(
            "CEILING(ROUND(((TIME(J1,L1,0)-TIME(F1,H1,0))*24-N1/60),3),0.5)".to_string(),
        );
        assert!(render_workbook(&workbook_with(formula)).is_ok());
    }

    #[test]
    fn test_unresolved_placeholder_is_export_error() {
        assert!(matches!(
            render_workbook(&workbook_with(CellValue::WorkedHoursPlaceholder)),
            Err(EngineError::ExportError { .. })
        ));
    }

    #[test]
    fn test_zero_position_is_export_error() {
        let mut sheet = Worksheet::new("s");
        sheet.set_cell(0, 1, CellValue::text("x"), None);
        assert!(matches!(
            render_workbook(&TemplateWorkbook::new(vec![sheet])),
            Err(EngineError::ExportError { .. })
        ));
    }
}
