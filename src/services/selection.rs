use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{errors::AppResult, models::domain::Question, repositories::QuestionBank};

/// Per-question performance history for one learner. Carried through the
/// selection seam so a real spaced-repetition scheduler can be dropped in
/// without touching the session state machine.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct LearnerHistory {
    pub entries: Vec<QuestionPerformance>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuestionPerformance {
    pub question_id: String,
    pub times_seen: u32,
    pub times_correct: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_seen_at: Option<DateTime<Utc>>,
}

impl LearnerHistory {
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Decides which questions a new session gets, in display order.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuestionSelector: Send + Sync {
    async fn select_questions(
        &self,
        exam_id: &str,
        history: &LearnerHistory,
    ) -> AppResult<Vec<Question>>;
}

/// Passthrough selector: the entire configured set, bank order, every time.
/// This matches current platform behavior exactly; the history parameter is
/// accepted and ignored.
// TODO: rank by per-question ease/interval once performance history is persisted.
pub struct FullSetSelector {
    bank: Arc<dyn QuestionBank>,
}

impl FullSetSelector {
    pub fn new(bank: Arc<dyn QuestionBank>) -> Self {
        Self { bank }
    }
}

#[async_trait]
impl QuestionSelector for FullSetSelector {
    async fn select_questions(
        &self,
        exam_id: &str,
        _history: &LearnerHistory,
    ) -> AppResult<Vec<Question>> {
        self.bank.questions_for_exam(exam_id).await
    }
}
