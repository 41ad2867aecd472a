//! User profile model.
//!
//! The profile carries the fields printed in the header blocks of the
//! exported timesheet.

use serde::{Deserialize, Serialize};

/// The teaching assistant a timesheet belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Full name.
    pub name: String,
    /// Phonetic reading of the name (furigana).
    #[serde(default)]
    pub kana: String,
    /// Student or staff number.
    pub staff_id: String,
    /// Grade code used for the wage lookup (e.g. "1").
    pub grade: String,
    /// Optional bank account note printed beside the grade.
    #[serde(default)]
    pub bank: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_profile_without_optional_fields() {
        let json = r#"{
            "name": "山田 花子",
            "staff_id": "A1234567",
            "grade": "5"
        }"#;

        let profile: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.grade, "5");
        assert!(profile.kana.is_empty());
        assert_eq!(profile.bank, None);
    }
}
