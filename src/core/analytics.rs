// Progress aggregation. Pure and synchronous; operates on one student's
// records in logging order.
//
// The two averages use different filters on purpose: the overall proficiency
// counts only completed records with a score, while each subject's average
// counts every scored record for that subject whether completed or not.

use crate::domain::model::{ProgressAnalytics, ProgressRecord, SubjectStats};
use std::collections::HashMap;

/// Aggregates a student's progress records. Returns `None` for an empty
/// collection; callers map that to an all-zero payload.
pub fn aggregate(records: &[ProgressRecord]) -> Option<ProgressAnalytics> {
    if records.is_empty() {
        return None;
    }

    let total_study_time = records
        .iter()
        .map(|r| r.time_spent_minutes as u64)
        .sum::<u64>();
    let completed_topics = records.iter().filter(|r| r.completed).count() as u32;
    let total_topics = records.len() as u32;

    let completed_scores: Vec<f64> = records
        .iter()
        .filter(|r| r.completed)
        .filter_map(|r| r.proficiency_score)
        .collect();
    let average_proficiency = mean(&completed_scores);

    let mut subject_breakdown: HashMap<String, SubjectStats> = HashMap::new();
    for record in records {
        let stats = subject_breakdown.entry(record.subject.clone()).or_default();
        stats.total_time += record.time_spent_minutes as u64;
        stats.total += 1;
        if record.completed {
            stats.completed += 1;
        }
    }

    for (subject, stats) in subject_breakdown.iter_mut() {
        let subject_scores: Vec<f64> = records
            .iter()
            .filter(|r| &r.subject == subject)
            .filter_map(|r| r.proficiency_score)
            .collect();
        stats.average_score = mean(&subject_scores);
    }

    Some(ProgressAnalytics {
        total_study_time,
        average_proficiency,
        completed_topics,
        total_topics,
        subject_breakdown,
    })
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}
