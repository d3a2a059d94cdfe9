use crate::domain::model::{CurriculumPlan, ProgressRecord};
use crate::domain::ports::PlanStore;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

/// In-memory implementation of the persistence collaborator. Assigns
/// sequential durable ids and keeps records in logging order, standing in
/// for a database-backed store.
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Default)]
struct Inner {
    next_curriculum_id: i64,
    next_progress_id: i64,
    curricula: Vec<StoredCurriculum>,
    progress: Vec<StoredProgress>,
}

struct StoredCurriculum {
    id: i64,
    student_id: i64,
    plan: CurriculumPlan,
}

struct StoredProgress {
    #[allow(dead_code)]
    id: i64,
    student_id: i64,
    record: ProgressRecord,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Plans saved for one student, oldest first. Mainly for tests and the
    /// CLI; not part of the `PlanStore` contract.
    pub async fn curricula_for(&self, student_id: i64) -> Vec<(i64, CurriculumPlan)> {
        let inner = self.inner.lock().await;
        inner
            .curricula
            .iter()
            .filter(|c| c.student_id == student_id)
            .map(|c| (c.id, c.plan.clone()))
            .collect()
    }
}

#[async_trait]
impl PlanStore for MemoryStore {
    async fn save_curriculum(&self, student_id: i64, plan: &CurriculumPlan) -> Result<i64> {
        let mut inner = self.inner.lock().await;
        inner.next_curriculum_id += 1;
        let id = inner.next_curriculum_id;
        inner.curricula.push(StoredCurriculum {
            id,
            student_id,
            plan: plan.clone(),
        });
        Ok(id)
    }

    async fn save_progress(&self, student_id: i64, record: &ProgressRecord) -> Result<i64> {
        let mut inner = self.inner.lock().await;
        inner.next_progress_id += 1;
        let id = inner.next_progress_id;
        inner.progress.push(StoredProgress {
            id,
            student_id,
            record: record.clone(),
        });
        Ok(id)
    }

    async fn progress_for(&self, student_id: i64) -> Result<Vec<ProgressRecord>> {
        let inner = self.inner.lock().await;
        Ok(inner
            .progress
            .iter()
            .filter(|p| p.student_id == student_id)
            .map(|p| p.record.clone())
            .collect())
    }
}
