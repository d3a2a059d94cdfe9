use crate::core::analytics;
use crate::core::chat::ChatAssistant;
use crate::core::curriculum::CurriculumPipeline;
use crate::core::practice::PracticeQuestionGenerator;
use crate::domain::model::{CurriculumPlan, PracticeQuestion, ProgressAnalytics, ProgressRecord, StudentProfile};
use crate::domain::ports::{GenerativeClient, PlanStore};
use crate::utils::error::Result;

/// Front door for the tutoring core: owns the three generation components
/// and the persistence handoff. Construction wires the collaborators in
/// explicitly; nothing here is process-global.
pub struct TutorEngine<G: GenerativeClient, S: PlanStore> {
    curriculum: CurriculumPipeline<G>,
    practice: PracticeQuestionGenerator<G>,
    chat: ChatAssistant<G>,
    store: S,
}

impl<G: GenerativeClient + Clone, S: PlanStore> TutorEngine<G, S> {
    pub fn new(client: G, store: S, model: impl Into<String>) -> Self {
        let model = model.into();
        Self {
            curriculum: CurriculumPipeline::new(client.clone(), model.clone()),
            practice: PracticeQuestionGenerator::new(client.clone(), model.clone()),
            chat: ChatAssistant::new(client, model),
            store,
        }
    }

    /// Materializes a plan (generated or fallback) and hands it to the
    /// store. Returns the durable id with the plan so callers can reference
    /// the stored row.
    pub async fn generate_curriculum(
        &self,
        student_id: i64,
        profile: &StudentProfile,
    ) -> Result<(i64, CurriculumPlan)> {
        tracing::info!("Generating curriculum for student {}", student_id);
        let plan = self.curriculum.generate(profile).await?;
        tracing::info!(
            "Materialized {}-week plan: {}",
            plan.duration_weeks(),
            plan.title
        );

        let curriculum_id = self.store.save_curriculum(student_id, &plan).await?;
        tracing::info!("Saved curriculum {} for student {}", curriculum_id, student_id);

        Ok((curriculum_id, plan))
    }

    pub async fn practice_question(
        &self,
        topic: &str,
        difficulty: &str,
    ) -> Result<PracticeQuestion> {
        self.practice.generate(topic, difficulty).await
    }

    pub async fn chat_reply(&self, message: &str, context: &serde_json::Value) -> String {
        self.chat.reply(message, context).await
    }

    pub async fn log_progress(&self, student_id: i64, record: &ProgressRecord) -> Result<i64> {
        tracing::debug!(
            "Logging progress for student {}: {} / {}",
            student_id,
            record.subject,
            record.topic
        );
        self.store.save_progress(student_id, record).await
    }

    /// Aggregated view of a student's study history. An empty history maps
    /// to the all-zero payload rather than an error.
    pub async fn progress_analytics(&self, student_id: i64) -> Result<ProgressAnalytics> {
        let records = self.store.progress_for(student_id).await?;
        tracing::debug!(
            "Aggregating {} progress records for student {}",
            records.len(),
            student_id
        );
        Ok(analytics::aggregate(&records).unwrap_or_default())
    }
}
