use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::domain::ExamSession;

/// Durable-ish record of a submitted attempt. The source platform never
/// persisted results, so this receipt is an extension, not parity; the exam
/// flow works identically if the sink drops it.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct SubmissionReceipt {
    pub id: Uuid,
    pub session_id: Uuid,
    pub exam_id: String,
    pub answer_count: usize,
    pub time_remaining_seconds_at_submit: u32,
    pub forced: bool,
    pub submitted_at: DateTime<Utc>,
}

impl SubmissionReceipt {
    pub fn from_session(session: &ExamSession) -> Self {
        SubmissionReceipt {
            id: Uuid::new_v4(),
            session_id: session.id,
            exam_id: session.exam_id.clone(),
            answer_count: session.answers.len(),
            time_remaining_seconds_at_submit: session.time_remaining_seconds,
            forced: session.forced,
            submitted_at: session.submitted_at.unwrap_or_else(Utc::now),
        }
    }
}
