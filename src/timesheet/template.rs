//! In-memory timesheet template.
//!
//! The template is described in YAML: a table of named styles and a list of
//! worksheets, each with column widths and styled cells. It is loaded fresh
//! for every export and mutated in place by the writer.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{EngineError, EngineResult};
use crate::models::{CellStyle, CellValue, TemplateCell};

static BLANK: CellValue = CellValue::Blank;

/// A worksheet of the timesheet template.
#[derive(Debug, Clone, PartialEq)]
pub struct Worksheet {
    name: String,
    column_widths: BTreeMap<u32, f64>,
    cells: BTreeMap<(u32, u32), TemplateCell>,
}

impl Worksheet {
    /// Creates an empty worksheet.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            column_widths: BTreeMap::new(),
            cells: BTreeMap::new(),
        }
    }

    /// Worksheet name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Column widths by 1-based column.
    pub fn column_widths(&self) -> &BTreeMap<u32, f64> {
        &self.column_widths
    }

    /// Returns the cell at the given position, if the template defines one.
    pub fn cell(&self, row: u32, column: u32) -> Option<&TemplateCell> {
        self.cells.get(&(row, column))
    }

    /// Returns the value at the given position; undefined cells are blank.
    pub fn value(&self, row: u32, column: u32) -> &CellValue {
        self.cell(row, column).map_or(&BLANK, |cell| &cell.value)
    }

    /// Overwrites a cell's value, keeping whatever style it already has.
    ///
    /// # Examples
    ///
    /// ```
    /// use timesheet_engine::models::{CellStyle, CellValue};
    /// use timesheet_engine::timesheet::Worksheet;
    ///
    /// let mut sheet = Worksheet::new("勤務表");
    /// let bold = CellStyle { bold: true, ..Default::default() };
    /// sheet.set_cell(3, 2, CellValue::text("old"), Some(bold.clone()));
    ///
    /// sheet.write_value(3, 2, CellValue::Integer(9));
    /// let cell = sheet.cell(3, 2).unwrap();
    /// assert_eq!(cell.value, CellValue::Integer(9));
    /// assert_eq!(cell.style, Some(bold));
    /// ```
    pub fn write_value(&mut self, row: u32, column: u32, value: CellValue) {
        match self.cells.get_mut(&(row, column)) {
            Some(cell) => cell.value = value,
            None => self.set_cell(row, column, value, None),
        }
    }

    /// Replaces a cell outright, style included.
    pub fn set_cell(&mut self, row: u32, column: u32, value: CellValue, style: Option<CellStyle>) {
        self.cells.insert(
            (row, column),
            TemplateCell {
                row,
                column,
                value,
                style,
            },
        );
    }

    /// Sets the width of a 1-based column.
    pub fn set_column_width(&mut self, column: u32, width: f64) {
        self.column_widths.insert(column, width);
    }

    /// All defined cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &TemplateCell> {
        self.cells.values()
    }
}

/// The whole template workbook.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TemplateWorkbook {
    sheets: Vec<Worksheet>,
}

#[derive(Debug, Deserialize)]
struct TemplateFile {
    #[serde(default)]
    styles: BTreeMap<String, CellStyle>,
    sheets: Vec<SheetFile>,
}

#[derive(Debug, Deserialize)]
struct SheetFile {
    name: String,
    #[serde(default)]
    column_widths: BTreeMap<u32, f64>,
    #[serde(default)]
    cells: Vec<CellFile>,
}

#[derive(Debug, Deserialize)]
struct CellFile {
    row: u32,
    column: u32,
    #[serde(default)]
    value: CellValue,
    #[serde(default)]
    style: Option<String>,
}

impl TemplateWorkbook {
    /// Creates a workbook from worksheets.
    pub fn new(sheets: Vec<Worksheet>) -> Self {
        Self { sheets }
    }

    /// Loads the template from a YAML file.
    ///
    /// A missing or unreadable file is reported as [`EngineError::TemplateNotFound`].
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::TemplateNotFound {
            path: path_str.clone(),
        })?;

        Self::from_yaml(&content, &path_str)
    }

    /// Parses a template from YAML text; `source` names it in errors.
    pub fn from_yaml(content: &str, source: &str) -> EngineResult<Self> {
        let file: TemplateFile =
            serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
                path: source.to_string(),
                message: e.to_string(),
            })?;

        let mut sheets = Vec::with_capacity(file.sheets.len());
        for sheet_file in file.sheets {
            let mut sheet = Worksheet::new(sheet_file.name);
            sheet.column_widths = sheet_file.column_widths;

            for cell in sheet_file.cells {
                let style = match cell.style {
                    Some(name) => Some(file.styles.get(&name).cloned().ok_or_else(|| {
                        EngineError::ConfigParseError {
                            path: source.to_string(),
                            message: format!(
                                "unknown style '{}' at row {} column {}",
                                name, cell.row, cell.column
                            ),
                        }
                    })?),
                    None => None,
                };
                sheet.set_cell(cell.row, cell.column, cell.value, style);
            }
            sheets.push(sheet);
        }

        Ok(Self { sheets })
    }

    /// All worksheets in file order.
    pub fn sheets(&self) -> &[Worksheet] {
        &self.sheets
    }

    /// Looks up a worksheet by name.
    pub fn sheet(&self, name: &str) -> EngineResult<&Worksheet> {
        self.sheets
            .iter()
            .find(|s| s.name == name)
            .ok_or_else(|| EngineError::WorksheetNotFound {
                name: name.to_string(),
            })
    }

    /// Looks up a worksheet by name for writing.
    pub fn sheet_mut(&mut self, name: &str) -> EngineResult<&mut Worksheet> {
        self.sheets
            .iter_mut()
            .find(|s| s.name == name)
            .ok_or_else(|| EngineError::WorksheetNotFound {
                name: name.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const YAML: &str = r#"
styles:
  day:
    align: center
    border: true
sheets:
  - name: 勤務表
    column_widths:
      1: 4.5
    cells:
      - row: 13
        column: 1
        value: { type: integer, value: 1 }
        style: day
      - row: 13
        column: 7
        value: { type: text, value: ":" }
"#;

    #[test]
    fn test_from_yaml_resolves_named_styles() {
        let workbook = TemplateWorkbook::from_yaml(YAML, "inline").unwrap();
        let sheet = workbook.sheet("勤務表").unwrap();

        let day = sheet.cell(13, 1).unwrap();
        assert_eq!(day.value, CellValue::Integer(1));
        let style = day.style.as_ref().unwrap();
        assert!(style.border);
        assert_eq!(sheet.column_widths().get(&1), Some(&4.5));
        assert!(sheet.cell(13, 7).unwrap().style.is_none());
    }

    #[test]
    fn test_unknown_style_is_parse_error() {
        let yaml = "sheets:\n  - name: s\n    cells:\n      - { row: 1, column: 1, style: nope }\n";
        match TemplateWorkbook::from_yaml(yaml, "inline") {
            Err(EngineError::ConfigParseError { message, .. }) => assert!(message.contains("nope")),
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_sheet_is_error() {
        let mut workbook = TemplateWorkbook::from_yaml(YAML, "inline").unwrap();
        assert!(matches!(
            workbook.sheet_mut("Sheet1"),
            Err(EngineError::WorksheetNotFound { .. })
        ));
    }

    #[test]
    fn test_load_missing_file_is_template_not_found() {
        assert!(matches!(
            TemplateWorkbook::load("/nonexistent/template.yaml"),
            Err(EngineError::TemplateNotFound { .. })
        ));
    }

    #[test]
    fn test_undefined_cell_reads_blank_and_write_creates_it() {
        let mut sheet = Worksheet::new("s");
        assert!(sheet.value(4, 4).is_blank());

        sheet.write_value(4, 4, CellValue::text("x"));
        assert_eq!(sheet.value(4, 4), &CellValue::text("x"));
        assert!(sheet.cell(4, 4).unwrap().style.is_none());
    }
}
