use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::domain::Question;

/// One timed examination attempt. All mutation goes through the methods
/// below; every one of them is a benign no-op once the session has been
/// submitted, so stale UI events can never corrupt a finished attempt.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct ExamSession {
    pub id: Uuid,
    pub exam_id: String,
    /// Fixed at session start; selection happens exactly once.
    pub questions: Vec<Question>,
    pub current_index: usize,
    /// Question id -> the learner's latest answer text. Last write wins.
    pub answers: HashMap<String, String>,
    pub time_remaining_seconds: u32,
    pub status: SessionStatus,
    pub started_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submitted_at: Option<DateTime<Utc>>,
    /// True when the countdown forced the submission rather than the learner.
    pub forced: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, Copy)]
pub enum SessionStatus {
    InProgress,
    Submitted,
}

/// What a countdown tick did to the session.
#[derive(Clone, Debug, PartialEq, Eq, Copy)]
pub enum TickOutcome {
    /// Decremented, still running.
    Ticking,
    /// This tick brought the clock to zero and force-submitted the session.
    ForcedSubmit,
    /// Session was already submitted; nothing changed.
    Ignored,
}

impl ExamSession {
    pub fn new(exam_id: &str, questions: Vec<Question>, time_limit_seconds: u32) -> Self {
        ExamSession {
            id: Uuid::new_v4(),
            exam_id: exam_id.to_string(),
            questions,
            current_index: 0,
            answers: HashMap::new(),
            time_remaining_seconds: time_limit_seconds,
            status: SessionStatus::InProgress,
            started_at: Utc::now(),
            submitted_at: None,
            forced: false,
        }
    }

    pub fn is_in_progress(&self) -> bool {
        self.status == SessionStatus::InProgress
    }

    /// Records (or overwrites) an answer. Values are accepted verbatim, even
    /// when they match none of the question's options; grading simply will
    /// not mark them correct. Unknown question ids and submitted sessions
    /// are no-ops.
    pub fn record_answer(&mut self, question_id: &str, value: &str) {
        if !self.is_in_progress() {
            return;
        }
        if !self.questions.iter().any(|q| q.id == question_id) {
            return;
        }
        self.answers
            .insert(question_id.to_string(), value.to_string());
    }

    /// Advances to the next question, clamped at the last index.
    pub fn go_to_next(&mut self) {
        if !self.is_in_progress() {
            return;
        }
        if self.current_index + 1 < self.questions.len() {
            self.current_index += 1;
        }
    }

    /// Steps back one question, clamped at zero.
    pub fn go_to_previous(&mut self) {
        if !self.is_in_progress() {
            return;
        }
        self.current_index = self.current_index.saturating_sub(1);
    }

    /// Applies one second of countdown. Reaching zero force-submits the
    /// session; further ticks never decrement again.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.is_in_progress() {
            return TickOutcome::Ignored;
        }

        self.time_remaining_seconds = self.time_remaining_seconds.saturating_sub(1);
        if self.time_remaining_seconds == 0 {
            self.submit(true);
            return TickOutcome::ForcedSubmit;
        }

        TickOutcome::Ticking
    }

    /// Transitions to `Submitted`. Partial submissions are allowed; there is
    /// no completeness precondition. Returns true only on the call that
    /// actually performed the transition, so side effects keyed off
    /// submission happen exactly once.
    pub fn submit(&mut self, forced: bool) -> bool {
        if !self.is_in_progress() {
            return false;
        }
        self.status = SessionStatus::Submitted;
        self.submitted_at = Some(Utc::now());
        self.forced = forced;
        true
    }

    pub fn answer_for(&self, question_id: &str) -> Option<&str> {
        self.answers.get(question_id).map(String::as_str)
    }
}
