use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{errors::AppResult, models::domain::SubmissionReceipt};

/// Reporting sink for submitted attempts. The exam flow never depends on
/// what happens to a receipt; a sink that drops everything is valid.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmissionRepository: Send + Sync {
    async fn record(&self, receipt: SubmissionReceipt) -> AppResult<SubmissionReceipt>;
    async fn find_by_session(&self, session_id: Uuid) -> AppResult<Option<SubmissionReceipt>>;
}

/// Keeps receipts for the lifetime of the process. Nothing in the platform
/// contract requires durability beyond that.
pub struct InMemorySubmissionRepository {
    receipts: RwLock<HashMap<Uuid, SubmissionReceipt>>,
}

impl InMemorySubmissionRepository {
    pub fn new() -> Self {
        Self {
            receipts: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemorySubmissionRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SubmissionRepository for InMemorySubmissionRepository {
    async fn record(&self, receipt: SubmissionReceipt) -> AppResult<SubmissionReceipt> {
        log::info!(
            "Recording submission for session {} (exam '{}', {} answers, forced: {})",
            receipt.session_id,
            receipt.exam_id,
            receipt.answer_count,
            receipt.forced
        );
        let mut receipts = self.receipts.write().await;
        receipts.insert(receipt.session_id, receipt.clone());
        Ok(receipt)
    }

    async fn find_by_session(&self, session_id: Uuid) -> AppResult<Option<SubmissionReceipt>> {
        let receipts = self.receipts.read().await;
        Ok(receipts.get(&session_id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::domain::ExamSession;
    use crate::test_utils::fixtures::demo_questions;

    fn make_receipt() -> SubmissionReceipt {
        let mut session = ExamSession::new("demo-exam", demo_questions(), 60);
        session.record_answer("demo-q1", "50 msw");
        session.submit(false);
        SubmissionReceipt::from_session(&session)
    }

    #[tokio::test]
    async fn record_then_find_round_trips() {
        let repo = InMemorySubmissionRepository::new();
        let receipt = make_receipt();

        repo.record(receipt.clone()).await.expect("record should work");

        let found = repo
            .find_by_session(receipt.session_id)
            .await
            .expect("find should work");
        assert_eq!(found, Some(receipt));
    }

    #[tokio::test]
    async fn unknown_session_has_no_receipt() {
        let repo = InMemorySubmissionRepository::new();

        let found = repo
            .find_by_session(Uuid::new_v4())
            .await
            .expect("find should work");

        assert!(found.is_none());
    }
}
