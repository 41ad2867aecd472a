//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the engine
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{EngineConfig, Grade, GradesConfig, ShiftLimits, TemplateLayout};

/// Loads and provides access to the engine configuration.
///
/// # Directory Structure
///
/// ```text
/// config/timesheet/
/// ├── grades.yaml     # Grade codes and hourly wages
/// ├── rules.yaml      # Per-day and per-week shift limits
/// ├── layout.yaml     # Worksheet name and reserved cells
/// └── template.yaml   # The timesheet template itself
/// ```
///
/// The template is only read when a timesheet is exported, so a missing
/// template surfaces as an export failure rather than a startup failure.
///
/// # Example
///
/// ```no_run
/// use timesheet_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/timesheet").unwrap();
/// let grade = loader.get_grade("1").unwrap();
/// println!("{}: {} per hour", grade.label, grade.hourly_wage);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - Any required field is missing from the configuration
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let grades = Self::load_yaml::<GradesConfig>(&path.join("grades.yaml"))?;
        let limits = Self::load_yaml::<ShiftLimits>(&path.join("rules.yaml"))?;
        let layout = Self::load_yaml::<TemplateLayout>(&path.join("layout.yaml"))?;

        let config = EngineConfig::new(grades.grades, limits, layout, path);

        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Gets a grade by its code.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use timesheet_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/timesheet")?;
    /// let grade = loader.get_grade("5")?;
    /// println!("Grade: {}", grade.label);
    /// # Ok::<(), timesheet_engine::error::EngineError>(())
    /// ```
    pub fn get_grade(&self, code: &str) -> EngineResult<&Grade> {
        self.config
            .grades()
            .get(code.trim())
            .ok_or_else(|| EngineError::GradeNotFound {
                code: code.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn config_path() -> &'static str {
        "./config/timesheet"
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.config().grades().len(), 9);
        assert_eq!(loader.config().layout().worksheet, "勤務表");
    }

    #[test]
    fn test_get_grade_one() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        let grade = loader.get_grade("1").unwrap();
        assert_eq!(grade.label, "学部1年");
        assert_eq!(grade.hourly_wage, dec("1010"));
    }

    #[test]
    fn test_get_grade_unknown_returns_error() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        match loader.get_grade("10") {
            Err(EngineError::GradeNotFound { code }) => assert_eq!(code, "10"),
            other => panic!("Expected GradeNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_rules_loaded() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        assert_eq!(*loader.config().limits(), ShiftLimits::default());
    }

    #[test]
    fn test_layout_reserved_rows() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let layout = loader.config().layout();

        assert_eq!(layout.period_rows, vec![11, 65]);
        assert_eq!(layout.furigana.row, 46);
        assert_eq!(layout.name.row, 47);
        assert_eq!(layout.staff_id.row, 48);
        assert_eq!(layout.grade.row, 49);
        assert_eq!(layout.teacher_confirmation.row, 53);
        assert_eq!(layout.max_data_row, 55);
        assert_eq!(layout.overflow_rows, (29..=36).collect::<Vec<u32>>());
    }

    #[test]
    fn test_template_path_is_resolved_against_config_dir() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        assert!(loader.config().template_path().ends_with("template.yaml"));
        assert!(loader.config().template_path().starts_with(config_path()));
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        match ConfigLoader::load("/nonexistent/path") {
            Err(EngineError::ConfigNotFound { path }) => assert!(path.contains("grades.yaml")),
            other => panic!("Expected ConfigNotFound error, got {:?}", other.err()),
        }
    }
}
