//! Configuration types for the timesheet engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::calculation::{MAX_SHIFTS_PER_DAY, WEEKLY_MINUTES_LIMIT};

/// An academic grade and the wage paid at it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grade {
    /// Human-readable grade (e.g. "学部1年").
    pub label: String,
    /// Wage per hour in whole currency units.
    pub hourly_wage: Decimal,
}

/// Grades configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct GradesConfig {
    /// Map of grade code ("1".."9") to grade details.
    pub grades: HashMap<String, Grade>,
}

/// Business-rule limits applied when shifts are added or edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftLimits {
    /// Maximum shift records per owner per date.
    pub max_shifts_per_day: usize,
    /// Maximum worked minutes per Monday-Sunday week.
    pub weekly_minutes_limit: u32,
}

impl Default for ShiftLimits {
    fn default() -> Self {
        Self {
            max_shifts_per_day: MAX_SHIFTS_PER_DAY,
            weekly_minutes_limit: WEEKLY_MINUTES_LIMIT,
        }
    }
}

/// A 1-based cell position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellPosition {
    /// Row.
    pub row: u32,
    /// Column.
    pub column: u32,
}

/// Where things go on the timesheet template.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TemplateLayout {
    /// Template file, relative to the configuration directory.
    pub template_file: String,
    /// Name of the worksheet holding the timesheet.
    pub worksheet: String,
    /// Last physical row that may carry day data.
    pub max_data_row: u32,
    /// Column holding the day number matched against row data.
    #[serde(default = "default_day_column")]
    pub day_column: u32,
    /// Rows without a day number that take entries no day row could hold,
    /// such as a second subject on the same date.
    #[serde(default)]
    pub overflow_rows: Vec<u32>,
    /// Rows carrying the period header (the sheet prints it twice).
    pub period_rows: Vec<u32>,
    /// Column of the period header.
    pub period_column: u32,
    /// Furigana header cell.
    pub furigana: CellPosition,
    /// Name header cell.
    pub name: CellPosition,
    /// Staff id header cell.
    pub staff_id: CellPosition,
    /// Grade and bank header cell.
    pub grade: CellPosition,
    /// Teacher confirmation cell.
    pub teacher_confirmation: CellPosition,
}

fn default_day_column() -> u32 {
    1
}

/// The complete engine configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Grade code to grade details.
    grades: HashMap<String, Grade>,
    /// Business-rule limits.
    limits: ShiftLimits,
    /// Template layout.
    layout: TemplateLayout,
    /// Resolved path of the template file.
    template_path: PathBuf,
}

impl EngineConfig {
    /// Creates a new EngineConfig from its component parts.
    pub fn new(
        grades: HashMap<String, Grade>,
        limits: ShiftLimits,
        layout: TemplateLayout,
        base_dir: &Path,
    ) -> Self {
        let template_path = base_dir.join(&layout.template_file);
        Self {
            grades,
            limits,
            layout,
            template_path,
        }
    }

    /// Returns all grades.
    pub fn grades(&self) -> &HashMap<String, Grade> {
        &self.grades
    }

    /// Returns the business-rule limits.
    pub fn limits(&self) -> &ShiftLimits {
        &self.limits
    }

    /// Returns the template layout.
    pub fn layout(&self) -> &TemplateLayout {
        &self.layout
    }

    /// Returns the resolved template path.
    pub fn template_path(&self) -> &Path {
        &self.template_path
    }
}
