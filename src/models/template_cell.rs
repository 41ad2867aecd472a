//! Timesheet template cell model.
//!
//! Cells are addressed by 1-based row and column. A cell keeps its visual
//! style when its value is overwritten.

use serde::{Deserialize, Serialize};

/// The value held by a template cell.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum CellValue {
    /// No value. Writing a blank leaves the destination untouched.
    #[default]
    Blank,
    /// Literal text.
    Text(String),
    /// Literal integer.
    Integer(i64),
    /// Spreadsheet formula, stored without the leading `=`.
    Formula(String),
    /// Worked-hours formula for the half row it sits in; replaced by a
    /// [`CellValue::Formula`] once the absolute row is known.
    WorkedHoursPlaceholder,
}

impl CellValue {
    /// Shorthand for a text value.
    pub fn text(value: impl Into<String>) -> Self {
        CellValue::Text(value.into())
    }

    /// Returns true for [`CellValue::Blank`].
    pub fn is_blank(&self) -> bool {
        matches!(self, CellValue::Blank)
    }

    /// Returns the integer value, also accepting numeric text.
    ///
    /// Template files often store day numbers as text, so both forms match.
    ///
    /// # Examples
    ///
    /// ```
    /// use timesheet_engine::models::CellValue;
    ///
    /// assert_eq!(CellValue::Integer(5).as_integer(), Some(5));
    /// assert_eq!(CellValue::text(" 21 ").as_integer(), Some(21));
    /// assert_eq!(CellValue::text(":").as_integer(), None);
    /// ```
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            CellValue::Integer(value) => Some(*value),
            CellValue::Text(text) => text.trim().parse().ok(),
            _ => None,
        }
    }

    /// Returns the text, or `None` for non-text values and empty text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(text) if !text.trim().is_empty() => Some(text.trim()),
            _ => None,
        }
    }
}

/// Horizontal alignment of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Align {
    /// Spreadsheet default.
    #[default]
    General,
    /// Left aligned.
    Left,
    /// Centered.
    Center,
    /// Right aligned.
    Right,
}

/// Visual style of a cell.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CellStyle {
    /// Bold font.
    pub bold: bool,
    /// Font size in points.
    pub font_size: Option<f64>,
    /// Horizontal alignment.
    pub align: Align,
    /// Thin border on all sides.
    pub border: bool,
    /// Excel number format, e.g. `0.0`.
    pub number_format: Option<String>,
    /// Background fill as `RRGGBB`.
    pub background: Option<String>,
}

/// One cell of the timesheet template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateCell {
    /// 1-based row.
    pub row: u32,
    /// 1-based column.
    pub column: u32,
    /// Current value.
    #[serde(default)]
    pub value: CellValue,
    /// Visual style, kept across overwrites.
    #[serde(default)]
    pub style: Option<CellStyle>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_value_serialization_is_tagged() {
        let json = serde_json::to_string(&CellValue::Integer(7)).unwrap();
        assert_eq!(json, r#"{"type":"integer","value":7}"#);

        let blank = serde_json::to_string(&CellValue::Blank).unwrap();
        assert_eq!(blank, r#"{"type":"blank"}"#);
    }

    #[test]
    fn test_as_text_ignores_whitespace_only() {
        assert_eq!(CellValue::text("  ").as_text(), None);
        assert_eq!(CellValue::text(" 線形代数 ").as_text(), Some("線形代数"));
        assert_eq!(CellValue::Integer(3).as_text(), None);
    }

    #[test]
    fn test_template_cell_yaml_defaults() {
        let yaml = "row: 3\ncolumn: 1\n";
        let cell: TemplateCell = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(cell.value, CellValue::Blank);
        assert!(cell.style.is_none());
    }
}
