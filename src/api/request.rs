//! Request types for the Timesheet Engine API.
//!
//! Every request carries the caller's record snapshot; the server keeps no
//! per-user state.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{ShiftKey, ShiftRecord, UserProfile, WorkTemplate};

/// Request body for `POST /shifts/validate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateShiftRequest {
    /// The owner's current shifts.
    #[serde(default)]
    pub shifts: Vec<ShiftRecord>,
    /// The shift being added, or the replacement when editing.
    pub candidate: ShiftRecord,
    /// Key of the shift being edited; absent when adding.
    #[serde(default)]
    pub original: Option<ShiftKey>,
}

/// Request body for `POST /works/promote`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromoteWorkRequest {
    /// The owner's current shifts.
    #[serde(default)]
    pub shifts: Vec<ShiftRecord>,
    /// The owner's registered work templates.
    #[serde(default)]
    pub works: Vec<WorkTemplate>,
    /// The template to register and promote.
    pub work: WorkTemplate,
    /// Target year.
    pub year: i32,
    /// Target month (1-12).
    pub month: u32,
}

/// Request body for `POST /summary`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryRequest {
    /// Grade code for the wage lookup.
    pub grade: String,
    /// Year to summarize.
    pub year: i32,
    /// Month to summarize (1-12).
    pub month: u32,
    /// The owner's shifts; other months are ignored.
    pub shifts: Vec<ShiftRecord>,
}

/// Request body for `POST /export`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportRequest {
    /// Profile printed in the header blocks; its grade selects the wage.
    pub profile: UserProfile,
    /// Year to export.
    pub year: i32,
    /// Month to export (1-12).
    pub month: u32,
    /// The owner's shifts; other months are ignored.
    pub shifts: Vec<ShiftRecord>,
}

/// Rejects shifts whose date triple is not a calendar date.
pub(crate) fn check_shift_dates(shifts: &[ShiftRecord]) -> EngineResult<()> {
    match shifts.iter().find(|s| s.date().is_none()) {
        Some(shift) => Err(EngineError::InvalidShift {
            shift_id: shift.id,
            date: format!("{:04}-{:02}-{:02}", shift.year, shift.month, shift.day),
            message: "not a valid calendar date".to_string(),
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_validate_request_without_original() {
        let json = r#"{
            "shifts": [],
            "candidate": {
                "id": 0,
                "year": 2025,
                "month": 4,
                "day": 7,
                "class_name": "Physics",
                "start_time": "09:00",
                "end_time": "10:30"
            }
        }"#;

        let request: ValidateShiftRequest = serde_json::from_str(json).unwrap();
        assert!(request.original.is_none());
        assert_eq!(request.candidate.class_name, "Physics");
    }

    #[test]
    fn test_deserialize_promote_request() {
        let json = r#"{
            "work": {
                "id": 1,
                "weekday": "Tue",
                "class_name": "Physics",
                "start_time": "09:00",
                "end_time": "10:30"
            },
            "year": 2025,
            "month": 4
        }"#;

        let request: PromoteWorkRequest = serde_json::from_str(json).unwrap();
        assert!(request.shifts.is_empty());
        assert!(request.works.is_empty());
        assert_eq!(request.work.weekday, chrono::Weekday::Tue);
    }

    #[test]
    fn test_check_shift_dates_flags_impossible_date() {
        let shift: ShiftRecord = serde_json::from_str(
            r#"{"id": 4, "year": 2025, "month": 2, "day": 30, "start_time": "09:00", "end_time": "10:00"}"#,
        )
        .unwrap();

        match check_shift_dates(&[shift]) {
            Err(EngineError::InvalidShift { shift_id, date, .. }) => {
                assert_eq!(shift_id, 4);
                assert_eq!(date, "2025-02-30");
            }
            other => panic!("Expected InvalidShift, got {:?}", other),
        }
    }
}
