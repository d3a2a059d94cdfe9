// Deterministic curriculum synthesis, used when nothing parseable comes back
// from the generative service. Always 8 weeks, whatever duration was asked
// for upstream.

use crate::domain::model::{
    CurriculumPlan, DailyBreakdown, DayPlan, StudentProfile, WeeklyPlan,
};

pub const FALLBACK_WEEKS: u32 = 8;

const FALLBACK_RESOURCES: [&str; 3] = ["Textbooks", "Online resources", "Practice worksheets"];

const FALLBACK_ACTIVITIES: [&str; 3] = ["Reading", "Practice problems", "Review"];

/// Builds a complete plan from the profile's weak subjects. Never fails; an
/// empty weak-subjects list degrades to a single generic subject so every
/// weekday still gets a slot.
pub fn fallback_curriculum(profile: &StudentProfile) -> CurriculumPlan {
    let weekly_plans = (1..=FALLBACK_WEEKS)
        .map(|week_number| WeeklyPlan {
            week_number,
            focus_areas: profile.weak_subjects.clone(),
            learning_objectives: profile
                .weak_subjects
                .iter()
                .map(|subject| format!("Master basic concepts in {}", subject))
                .collect(),
            daily_breakdown: fallback_week(&profile.weak_subjects),
            resources_needed: FALLBACK_RESOURCES.iter().map(|r| r.to_string()).collect(),
        })
        .collect();

    CurriculumPlan {
        title: format!("Grade {} Personalized Curriculum", profile.grade_level),
        description: format!(
            "Focus on improving {}",
            profile.weak_subjects.join(", ")
        ),
        weekly_plans,
        student_metadata: None,
    }
}

/// Weekday subjects cycle round-robin through the weak-subjects list: short
/// lists repeat, anything past the fifth slot is dropped for the week.
fn fallback_week(subjects: &[String]) -> DailyBreakdown {
    let general = ["General Study".to_string()];
    let pool: &[String] = if subjects.is_empty() { &general } else { subjects };

    let day = |slot: usize| {
        let subject = &pool[slot % pool.len()];
        DayPlan {
            subject: subject.clone(),
            topic: format!("Introduction to {}", subject),
            activities: FALLBACK_ACTIVITIES.iter().map(|a| a.to_string()).collect(),
        }
    };

    DailyBreakdown {
        monday: day(0),
        tuesday: day(1),
        wednesday: day(2),
        thursday: day(3),
        friday: day(4),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::LearningStyle;

    fn profile(subjects: &[&str]) -> StudentProfile {
        StudentProfile {
            grade_level: 5,
            learning_style: LearningStyle::Visual,
            weak_subjects: subjects.iter().map(|s| s.to_string()).collect(),
            learning_goals: None,
        }
    }

    #[test]
    fn always_eight_weeks_with_full_weekdays() {
        let plan = fallback_curriculum(&profile(&["Math", "Science"]));

        assert_eq!(plan.duration_weeks(), 8);
        for (i, week) in plan.weekly_plans.iter().enumerate() {
            assert_eq!(week.week_number, i as u32 + 1);
            assert_eq!(week.focus_areas, vec!["Math", "Science"]);
            for day in week.daily_breakdown.days() {
                assert!(!day.subject.is_empty());
                assert_eq!(day.activities, vec!["Reading", "Practice problems", "Review"]);
            }
        }
    }

    #[test]
    fn weekdays_cycle_through_subjects() {
        let plan = fallback_curriculum(&profile(&["Math", "Science"]));
        let week = &plan.weekly_plans[0];
        let days = week.daily_breakdown.days();

        let subjects: Vec<&str> = days.iter().map(|d| d.subject.as_str()).collect();
        assert_eq!(subjects, vec!["Math", "Science", "Math", "Science", "Math"]);
        assert_eq!(days[0].topic, "Introduction to Math");
        assert_eq!(days[1].topic, "Introduction to Science");
    }

    #[test]
    fn subjects_beyond_five_are_dropped_for_the_week() {
        let plan = fallback_curriculum(&profile(&["A", "B", "C", "D", "E", "F"]));
        let days = plan.weekly_plans[0].daily_breakdown.days();

        let subjects: Vec<&str> = days.iter().map(|d| d.subject.as_str()).collect();
        assert_eq!(subjects, vec!["A", "B", "C", "D", "E"]);
        // The sixth subject still shows up in the week's focus areas.
        assert!(plan.weekly_plans[0].focus_areas.contains(&"F".to_string()));
    }

    #[test]
    fn one_objective_per_weak_subject() {
        let plan = fallback_curriculum(&profile(&["Math", "History"]));
        assert_eq!(
            plan.weekly_plans[3].learning_objectives,
            vec![
                "Master basic concepts in Math",
                "Master basic concepts in History"
            ]
        );
    }

    #[test]
    fn title_and_description_are_templated() {
        let plan = fallback_curriculum(&profile(&["Math"]));
        assert_eq!(plan.title, "Grade 5 Personalized Curriculum");
        assert_eq!(plan.description, "Focus on improving Math");
        assert!(plan.student_metadata.is_none());
    }

    #[test]
    fn resources_use_the_fixed_template() {
        let plan = fallback_curriculum(&profile(&["Math"]));
        assert_eq!(
            plan.weekly_plans[0].resources_needed,
            vec!["Textbooks", "Online resources", "Practice worksheets"]
        );
    }

    #[test]
    fn deterministic_for_identical_input() {
        let a = fallback_curriculum(&profile(&["Math", "Science"]));
        let b = fallback_curriculum(&profile(&["Math", "Science"]));
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }
}
