use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const MIN_PROFICIENCY: i64 = 1;
pub const MAX_PROFICIENCY: i64 = 10;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Grade {
    Primary,
    Secondary,
    #[serde(rename = "High School")]
    HighSchool,
    Undergraduate,
    Postgraduate,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum LearningStyle {
    Visual,
    Auditory,
    #[serde(rename = "Reading/Writing")]
    ReadingWriting,
    Kinesthetic,
    Mixed,
}

/// A single self-rated skill.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Skill {
    /// 1 – 10, clamped on every write path.
    pub proficiency: u8,
    #[serde(default = "Utc::now")]
    pub date_added: DateTime<Utc>,
    /// Free-form progress notes; empty when the skill is first added.
    #[serde(default)]
    pub progress: Vec<Value>,
}

/// The student's self-reported profile. Field names are what the model sees
/// when the profile is embedded in a prompt.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Profile {
    pub name: String,
    pub age: u32,
    pub grade: Option<Grade>,
    pub skills: BTreeMap<String, Skill>,
    pub favorite_subjects: Vec<String>,
    pub interested_fields: Vec<String>,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub goals: Vec<String>,
    pub learning_style: Option<LearningStyle>,
    /// Hours per week.
    pub time_available: u32,
}

/// Partial profile used by `ProfileStore::update`. Every `Some` field replaces
/// the stored value; `None` leaves it untouched.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub age: Option<u32>,
    pub grade: Option<Grade>,
    pub skills: Option<BTreeMap<String, SkillInput>>,
    #[serde(alias = "fav_subject")]
    pub favorite_subjects: Option<Vec<String>>,
    pub interested_fields: Option<Vec<String>>,
    pub strengths: Option<Vec<String>>,
    pub weaknesses: Option<Vec<String>>,
    pub goals: Option<Vec<String>>,
    pub learning_style: Option<LearningStyle>,
    pub time_available: Option<u32>,
}

/// Skill as submitted by a caller. Proficiency is unclamped until it reaches the store.
#[derive(Debug, Clone, Deserialize)]
pub struct SkillInput {
    pub proficiency: i64,
    #[serde(default)]
    pub progress: Vec<Value>,
}

/// Quick stats shown next to the profile form.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ProfileSummary {
    pub name: Option<String>,
    pub skills_added: usize,
    pub favorite_subjects: usize,
    pub interested_fields: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_and_style_use_display_labels() {
        assert_eq!(serde_json::to_string(&Grade::HighSchool).unwrap(), r#""High School""#);
        let style: LearningStyle = serde_json::from_str(r#""Reading/Writing""#).unwrap();
        assert_eq!(style, LearningStyle::ReadingWriting);
    }

    #[test]
    fn test_empty_profile_serializes_every_field() {
        let value = serde_json::to_value(Profile::default()).unwrap();
        let obj = value.as_object().unwrap();
        for key in [
            "name",
            "age",
            "grade",
            "skills",
            "favorite_subjects",
            "interested_fields",
            "strengths",
            "weaknesses",
            "goals",
            "learning_style",
            "time_available",
        ] {
            assert!(obj.contains_key(key), "missing {key}");
        }
        assert!(obj["grade"].is_null());
    }

    #[test]
    fn test_update_accepts_legacy_subject_key() {
        let update: ProfileUpdate =
            serde_json::from_str(r#"{"fav_subject": ["Physics", "Art"]}"#).unwrap();
        assert_eq!(
            update.favorite_subjects,
            Some(vec!["Physics".to_string(), "Art".to_string()])
        );
    }

    #[test]
    fn test_update_rejects_unknown_fields() {
        let result = serde_json::from_str::<ProfileUpdate>(r#"{"nickname": "Ash"}"#);
        assert!(result.is_err());
    }
}
