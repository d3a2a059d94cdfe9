use crate::utils::validation::{validate_non_empty_string, validate_range, Validate};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::utils::error::{Result, TutorError};

/// How a student absorbs material best. Serialized with the snake_case wire
/// values the rest of the system (and stored profiles) use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LearningStyle {
    Visual,
    Auditory,
    Kinesthetic,
    ReadWrite,
}

impl LearningStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            LearningStyle::Visual => "visual",
            LearningStyle::Auditory => "auditory",
            LearningStyle::Kinesthetic => "kinesthetic",
            LearningStyle::ReadWrite => "read_write",
        }
    }
}

impl fmt::Display for LearningStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable snapshot of a student's profile, supplied by the identity
/// collaborator per request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentProfile {
    pub grade_level: u8,
    pub learning_style: LearningStyle,
    pub weak_subjects: Vec<String>,
    pub learning_goals: Option<String>,
}

impl Validate for StudentProfile {
    fn validate(&self) -> Result<()> {
        validate_range("grade_level", self.grade_level, 4, 9)?;
        if self.weak_subjects.is_empty() {
            return Err(TutorError::ValidationError {
                message: "weak_subjects: at least one weak subject is required".to_string(),
            });
        }
        for subject in &self.weak_subjects {
            validate_non_empty_string("weak_subjects", subject)?;
        }
        Ok(())
    }
}

/// One study slot on a weekday.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayPlan {
    pub subject: String,
    pub topic: String,
    pub activities: Vec<String>,
}

/// Monday through Friday schedule for one week. All five weekdays are
/// required; a generated plan missing one does not parse.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyBreakdown {
    pub monday: DayPlan,
    pub tuesday: DayPlan,
    pub wednesday: DayPlan,
    pub thursday: DayPlan,
    pub friday: DayPlan,
}

impl DailyBreakdown {
    pub fn days(&self) -> [&DayPlan; 5] {
        [
            &self.monday,
            &self.tuesday,
            &self.wednesday,
            &self.thursday,
            &self.friday,
        ]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklyPlan {
    pub week_number: u32,
    pub focus_areas: Vec<String>,
    pub learning_objectives: Vec<String>,
    pub daily_breakdown: DailyBreakdown,
    pub resources_needed: Vec<String>,
}

/// Profile snapshot attached to a plan after successful extraction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentMetadata {
    pub grade_level: u8,
    pub learning_style: LearningStyle,
    pub weak_subjects: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurriculumPlan {
    pub title: String,
    pub description: String,
    pub weekly_plans: Vec<WeeklyPlan>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student_metadata: Option<StudentMetadata>,
}

impl CurriculumPlan {
    pub fn duration_weeks(&self) -> usize {
        self.weekly_plans.len()
    }
}

/// Multiple-choice options keyed A through D.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerOptions {
    #[serde(rename = "A")]
    pub a: String,
    #[serde(rename = "B")]
    pub b: String,
    #[serde(rename = "C")]
    pub c: String,
    #[serde(rename = "D")]
    pub d: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PracticeQuestion {
    pub question: String,
    pub options: AnswerOptions,
    pub correct_answer: String,
    pub explanation: String,
    pub hint: String,
}

/// One study event. Immutable once logged; only ever aggregated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressRecord {
    pub weekly_plan_id: i64,
    pub subject: String,
    pub topic: String,
    pub proficiency_score: Option<f64>,
    pub time_spent_minutes: u32,
    pub completed: bool,
    pub feedback: Option<String>,
    pub logged_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubjectStats {
    pub total_time: u64,
    pub completed: u32,
    pub total: u32,
    pub average_score: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProgressAnalytics {
    pub total_study_time: u64,
    pub average_proficiency: f64,
    pub completed_topics: u32,
    pub total_topics: u32,
    pub subject_breakdown: HashMap<String, SubjectStats>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_profile() -> StudentProfile {
        StudentProfile {
            grade_level: 6,
            learning_style: LearningStyle::Visual,
            weak_subjects: vec!["Math".to_string(), "Science".to_string()],
            learning_goals: None,
        }
    }

    #[test]
    fn learning_style_wire_values_round_trip() {
        let style: LearningStyle = serde_json::from_str("\"read_write\"").unwrap();
        assert_eq!(style, LearningStyle::ReadWrite);
        assert_eq!(style.to_string(), "read_write");
        assert_eq!(
            serde_json::to_string(&LearningStyle::Kinesthetic).unwrap(),
            "\"kinesthetic\""
        );
    }

    #[test]
    fn profile_validation_checks_grade_and_subjects() {
        assert!(sample_profile().validate().is_ok());

        let mut out_of_range = sample_profile();
        out_of_range.grade_level = 3;
        assert!(out_of_range.validate().is_err());

        let mut no_subjects = sample_profile();
        no_subjects.weak_subjects.clear();
        assert!(no_subjects.validate().is_err());

        let mut blank_subject = sample_profile();
        blank_subject.weak_subjects = vec!["  ".to_string()];
        assert!(blank_subject.validate().is_err());
    }

    #[test]
    fn duration_weeks_tracks_plan_length() {
        let plan = CurriculumPlan {
            title: "t".to_string(),
            description: "d".to_string(),
            weekly_plans: vec![],
            student_metadata: None,
        };
        assert_eq!(plan.duration_weeks(), 0);
    }
}
