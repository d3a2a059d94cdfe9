// Prompt construction for the three generation tasks. Pure text assembly:
// callers are responsible for handing in sane profile data.

use crate::domain::model::{LearningStyle, StudentProfile};

pub const CURRICULUM_SYSTEM_PROMPT: &str =
    "You are an expert educational curriculum designer for grades 4-9.";

pub const PRACTICE_SYSTEM_PROMPT: &str = "You are a helpful tutor creating educational content.";

pub const CHAT_SYSTEM_PROMPT: &str =
    "You are an expert tutor who explains concepts clearly and patiently.";

pub const DEFAULT_LEARNING_GOALS: &str = "Improve overall academic performance";

pub const DEFAULT_ACTIVITY_PREFERENCES: &str = "varied teaching methods";

const ACTIVITY_PREFERENCES: [(LearningStyle, &str); 4] = [
    (LearningStyle::Visual, "visual aids, diagrams, videos"),
    (
        LearningStyle::Auditory,
        "explanations, discussions, audio materials",
    ),
    (
        LearningStyle::Kinesthetic,
        "hands-on activities, experiments, physical examples",
    ),
    (
        LearningStyle::ReadWrite,
        "reading materials, writing exercises, notes",
    ),
];

/// Style-to-preference lookup; any style without a table entry falls back to
/// the generic phrase.
pub fn activity_preferences(style: LearningStyle) -> &'static str {
    ACTIVITY_PREFERENCES
        .iter()
        .find(|(s, _)| *s == style)
        .map(|(_, phrase)| *phrase)
        .unwrap_or(DEFAULT_ACTIVITY_PREFERENCES)
}

const CURRICULUM_RESPONSE_FORMAT: &str = r#"{
    "title": "Personalized Learning Curriculum",
    "description": "Overview of the curriculum",
    "weekly_plans": [
        {
            "week_number": 1,
            "focus_areas": ["subject1", "subject2"],
            "learning_objectives": ["objective1", "objective2"],
            "daily_breakdown": {
                "monday": {"subject": "Math", "topic": "Basic Arithmetic", "activities": ["..."]},
                "tuesday": {"subject": "Science", "topic": "Introduction to Biology", "activities": ["..."]},
                "wednesday": {"subject": "...", "topic": "...", "activities": ["..."]},
                "thursday": {"subject": "...", "topic": "...", "activities": ["..."]},
                "friday": {"subject": "...", "topic": "...", "activities": ["..."]}
            },
            "resources_needed": ["textbook1", "online_resource2"]
        }
    ]
}"#;

const PRACTICE_RESPONSE_FORMAT: &str = r#"{
    "question": "question text",
    "options": {
        "A": "option A",
        "B": "option B",
        "C": "option C",
        "D": "option D"
    },
    "correct_answer": "A",
    "explanation": "detailed explanation",
    "hint": "helpful hint"
}"#;

pub fn curriculum_prompt(profile: &StudentProfile) -> String {
    let subjects = profile.weak_subjects.join(", ");
    let preferences = activity_preferences(profile.learning_style);
    let goals = profile
        .learning_goals
        .as_deref()
        .unwrap_or(DEFAULT_LEARNING_GOALS);

    format!(
        "Create a comprehensive 8-week personalized study plan for a grade {grade} student.\n\
         \n\
         STUDENT PROFILE:\n\
         - Grade Level: {grade}\n\
         - Learning Style: {style}\n\
         - Weak Subjects: {subjects}\n\
         - Learning Goals: {goals}\n\
         - Preferred Methods: {preferences}\n\
         \n\
         CURRICULUM REQUIREMENTS:\n\
         - 8-week duration with weekly focus areas\n\
         - Daily breakdown (Monday-Friday, 60-90 minutes daily)\n\
         - Include {subjects} as primary focus\n\
         - Balance with reinforcement of strong subjects\n\
         - Progressive difficulty (simple to complex)\n\
         - Include practice exercises and assessments\n\
         - Incorporate {preferences} for engagement\n\
         \n\
         RESPONSE FORMAT (JSON):\n\
         {format}\n\
         \n\
         Make it engaging, age-appropriate, and effective for knowledge retention.",
        grade = profile.grade_level,
        style = profile.learning_style,
        subjects = subjects,
        goals = goals,
        preferences = preferences,
        format = CURRICULUM_RESPONSE_FORMAT,
    )
}

pub fn practice_question_prompt(topic: &str, difficulty: &str) -> String {
    format!(
        "Create a {difficulty} difficulty practice question about {topic} for middle school students.\n\
         \n\
         Include:\n\
         - A clear question\n\
         - Multiple choice options (A, B, C, D)\n\
         - Detailed explanation of the correct answer\n\
         - Hint for struggling students\n\
         \n\
         Format as JSON:\n\
         {format}",
        difficulty = difficulty,
        topic = topic,
        format = PRACTICE_RESPONSE_FORMAT,
    )
}

pub fn chat_prompt(message: &str, context: &serde_json::Value) -> String {
    let grade_level = context
        .get("grade_level")
        .and_then(|v| v.as_i64())
        .unwrap_or(6);
    let context_str =
        serde_json::to_string_pretty(context).unwrap_or_else(|_| context.to_string());

    format!(
        "You are a friendly, patient tutor for grade {grade} students.\n\
         \n\
         Student Context:\n\
         {context}\n\
         \n\
         Current Question: {message}\n\
         \n\
         Provide:\n\
         - Clear, age-appropriate explanation\n\
         - Step-by-step guidance if it's a problem\n\
         - Encouraging tone\n\
         - Related examples if helpful\n\
         - Ask follow-up questions to check understanding\n\
         \n\
         Keep responses under 300 words.",
        grade = grade_level,
        context = context_str,
        message = message,
    )
}
