//! Error types for the Timesheet Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for configuration, template and export failures. Business-rule
//! violations are not errors; see [`crate::calculation::Rejection`].

use thiserror::Error;

/// The main error type for the Timesheet Engine.
///
/// # Example
///
/// ```
/// use timesheet_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/grades.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/grades.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Grade code was not found in the wage table.
    #[error("Grade not found: {code}")]
    GradeNotFound {
        /// The grade code that was not found.
        code: String,
    },

    /// The timesheet template could not be read.
    #[error("Timesheet template not found: {path}")]
    TemplateNotFound {
        /// The template path.
        path: String,
    },

    /// The template does not contain the expected worksheet.
    #[error("Worksheet '{name}' not found in timesheet template")]
    WorksheetNotFound {
        /// The worksheet name that was looked up.
        name: String,
    },

    /// A shift record was invalid or contained inconsistent data.
    #[error("Invalid shift {shift_id} on {date}: {message}")]
    InvalidShift {
        /// The ID of the invalid shift.
        shift_id: u32,
        /// The shift date as `YYYY-MM-DD` (may be out of range).
        date: String,
        /// A description of what made the shift invalid.
        message: String,
    },

    /// The month has more rows than the template has day and overflow rows.
    #[error("No template row left for day(s) {}", join_days(.days))]
    TemplateFull {
        /// Leading days of the rows that did not fit.
        days: Vec<u32>,
    },

    /// Rendering the workbook failed.
    #[error("Export failed: {message}")]
    ExportError {
        /// A description of the failure.
        message: String,
    },
}

impl From<rust_xlsxwriter::XlsxError> for EngineError {
    fn from(error: rust_xlsxwriter::XlsxError) -> Self {
        EngineError::ExportError {
            message: error.to_string(),
        }
    }
}

fn join_days(days: &[u32]) -> String {
    days.iter().map(u32::to_string).collect::<Vec<_>>().join(", ")
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/grades.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/grades.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_grade_not_found_displays_code() {
        let error = EngineError::GradeNotFound {
            code: "12".to_string(),
        };
        assert_eq!(error.to_string(), "Grade not found: 12");
    }

    #[test]
    fn test_worksheet_not_found_displays_name() {
        let error = EngineError::WorksheetNotFound {
            name: "勤務表".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Worksheet '勤務表' not found in timesheet template"
        );
    }

    #[test]
    fn test_invalid_shift_displays_id_date_and_message() {
        let error = EngineError::InvalidShift {
            shift_id: 3,
            date: "2025-02-30".to_string(),
            message: "date does not exist".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid shift 3 on 2025-02-30: date does not exist"
        );
    }

    #[test]
    fn test_template_full_lists_days() {
        let error = EngineError::TemplateFull { days: vec![7, 23] };
        assert_eq!(error.to_string(), "No template row left for day(s) 7, 23");
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_template_not_found() -> EngineResult<()> {
            Err(EngineError::TemplateNotFound {
                path: "/test".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_template_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
