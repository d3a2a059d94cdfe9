use crate::domain::model::ProgressRecord;
use crate::utils::error::Result;
use std::path::Path;

/// Reads progress records from a CSV export. Expected header:
/// `weekly_plan_id,subject,topic,proficiency_score,time_spent_minutes,completed,feedback,logged_at`
/// with empty cells for missing scores/feedback and RFC 3339 timestamps.
pub fn read_progress_csv(path: &Path) -> Result<Vec<ProgressRecord>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut records = Vec::new();

    for row in reader.deserialize() {
        let record: ProgressRecord = row?;
        records.push(record);
    }

    tracing::debug!("Read {} progress records from {}", records.len(), path.display());
    Ok(records)
}
