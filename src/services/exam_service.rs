use std::{collections::HashMap, sync::Arc, time::Duration};

use tokio::{
    sync::{Mutex, RwLock},
    task::JoinHandle,
    time::MissedTickBehavior,
};
use uuid::Uuid;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::{ExamSession, SubmissionReceipt, TickOutcome},
        dto::response::{ReviewViewDto, SessionViewDto},
    },
    repositories::{QuestionBank, SubmissionRepository},
    services::selection::{LearnerHistory, QuestionSelector},
};

type SessionMap = Arc<RwLock<HashMap<Uuid, ExamSession>>>;
type TimerMap = Arc<Mutex<HashMap<Uuid, JoinHandle<()>>>>;

/// Owns every live exam attempt: one `ExamSession` plus one countdown task
/// per attempt. All the degraded states (unknown exam, stale mutation,
/// clamped navigation, unrecognized answer values) stay inside the session
/// methods as no-ops; the only hard error this service produces is
/// `NotFound` for a session id it has never seen or has discarded.
pub struct ExamService {
    selector: Arc<dyn QuestionSelector>,
    bank: Arc<dyn QuestionBank>,
    submissions: Arc<dyn SubmissionRepository>,
    sessions: SessionMap,
    timers: TimerMap,
    tick_interval: Duration,
}

impl ExamService {
    pub fn new(
        selector: Arc<dyn QuestionSelector>,
        bank: Arc<dyn QuestionBank>,
        submissions: Arc<dyn SubmissionRepository>,
        tick_interval_ms: u64,
    ) -> Self {
        Self {
            selector,
            bank,
            submissions,
            sessions: Arc::new(RwLock::new(HashMap::new())),
            timers: Arc::new(Mutex::new(HashMap::new())),
            tick_interval: Duration::from_millis(tick_interval_ms),
        }
    }

    /// Creates a session for `exam_id` and starts its countdown. Unknown or
    /// broken exams degrade to a zero-question session with no countdown;
    /// the caller renders that as "not found".
    pub async fn start_session(&self, exam_id: &str) -> AppResult<SessionViewDto> {
        // Selection happens exactly once, here. A failing bank is treated
        // the same as an unknown exam id.
        let questions = match self
            .selector
            .select_questions(exam_id, &LearnerHistory::empty())
            .await
        {
            Ok(questions) => questions,
            Err(err) => {
                log::warn!("Question selection failed for exam '{}': {}", exam_id, err);
                vec![]
            }
        };

        let time_limit = match self.bank.time_limit_seconds(exam_id).await {
            Ok(limit) => limit,
            Err(err) => {
                log::warn!("Time-limit lookup failed for exam '{}': {}", exam_id, err);
                crate::constants::bank::DEFAULT_TIME_LIMIT_SECONDS
            }
        };

        let has_questions = !questions.is_empty();
        let session = ExamSession::new(exam_id, questions, time_limit);
        let session_id = session.id;
        let view = SessionViewDto::from(&session);

        self.sessions.write().await.insert(session_id, session);

        if has_questions {
            self.spawn_countdown(session_id).await;
            log::info!(
                "Started session {} for exam '{}' ({} questions, {}s)",
                session_id,
                exam_id,
                view.question_count,
                time_limit
            );
        } else {
            log::info!(
                "Started empty session {} for unknown exam '{}'",
                session_id,
                exam_id
            );
        }

        Ok(view)
    }

    pub async fn get_session(&self, session_id: Uuid) -> AppResult<SessionViewDto> {
        let sessions = self.sessions.read().await;
        let session = sessions
            .get(&session_id)
            .ok_or_else(|| AppError::NotFound(format!("Session '{}' not found", session_id)))?;
        Ok(SessionViewDto::from(session))
    }

    /// Last write wins; values are accepted verbatim. Stale or misdirected
    /// answers are swallowed by the session itself.
    pub async fn record_answer(
        &self,
        session_id: Uuid,
        question_id: &str,
        value: &str,
    ) -> AppResult<SessionViewDto> {
        self.with_session(session_id, |session| {
            session.record_answer(question_id, value);
        })
        .await
    }

    pub async fn go_to_next(&self, session_id: Uuid) -> AppResult<SessionViewDto> {
        self.with_session(session_id, |session| session.go_to_next())
            .await
    }

    pub async fn go_to_previous(&self, session_id: Uuid) -> AppResult<SessionViewDto> {
        self.with_session(session_id, |session| session.go_to_previous())
            .await
    }

    /// Explicit submission. Idempotent; partial answer sets are fine. The
    /// countdown is cancelled and a receipt recorded only on the call that
    /// actually performs the transition.
    pub async fn submit(&self, session_id: Uuid) -> AppResult<ReviewViewDto> {
        let (view, receipt) = {
            let mut sessions = self.sessions.write().await;
            let session = sessions
                .get_mut(&session_id)
                .ok_or_else(|| AppError::NotFound(format!("Session '{}' not found", session_id)))?;

            let transitioned = session.submit(false);
            let receipt = transitioned.then(|| SubmissionReceipt::from_session(session));
            (ReviewViewDto::from(&*session), receipt)
        };

        if let Some(receipt) = receipt {
            self.cancel_countdown(session_id).await;
            self.record_receipt(receipt).await;
        }

        Ok(view)
    }

    /// Applies one countdown second. Driven by the per-session task on a
    /// 1-second cadence; exposed so the contract is testable without real
    /// time. Ticking a submitted session changes nothing.
    pub async fn tick(&self, session_id: Uuid) -> AppResult<TickOutcome> {
        let (outcome, receipt) = {
            let mut sessions = self.sessions.write().await;
            let session = sessions
                .get_mut(&session_id)
                .ok_or_else(|| AppError::NotFound(format!("Session '{}' not found", session_id)))?;

            let outcome = session.tick();
            let receipt = (outcome == TickOutcome::ForcedSubmit)
                .then(|| SubmissionReceipt::from_session(session));
            (outcome, receipt)
        };

        if let Some(receipt) = receipt {
            log::info!("Session {} timed out, forcing submission", session_id);
            self.cancel_countdown(session_id).await;
            self.record_receipt(receipt).await;
        }

        Ok(outcome)
    }

    /// Per-question review data. Before submission the entries carry the
    /// learner's answers but no answer key.
    pub async fn review(&self, session_id: Uuid) -> AppResult<ReviewViewDto> {
        let sessions = self.sessions.read().await;
        let session = sessions
            .get(&session_id)
            .ok_or_else(|| AppError::NotFound(format!("Session '{}' not found", session_id)))?;
        Ok(ReviewViewDto::from(session))
    }

    /// Navigating away destroys the attempt. Idempotent; discarding an
    /// already-gone session is not an error.
    pub async fn discard(&self, session_id: Uuid) {
        let removed = self.sessions.write().await.remove(&session_id);
        self.cancel_countdown(session_id).await;
        if removed.is_some() {
            log::info!("Discarded session {}", session_id);
        }
    }

    async fn with_session<F>(&self, session_id: Uuid, mutate: F) -> AppResult<SessionViewDto>
    where
        F: FnOnce(&mut ExamSession),
    {
        let mut sessions = self.sessions.write().await;
        let session = sessions
            .get_mut(&session_id)
            .ok_or_else(|| AppError::NotFound(format!("Session '{}' not found", session_id)))?;
        mutate(session);
        Ok(SessionViewDto::from(&*session))
    }

    async fn spawn_countdown(&self, session_id: Uuid) {
        let sessions = Arc::clone(&self.sessions);
        let submissions = Arc::clone(&self.submissions);
        let timers = Arc::clone(&self.timers);
        let tick_interval = self.tick_interval;

        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(tick_interval);
            // Ticks must land in order; a stalled runtime catches up one
            // tick at a time instead of bursting.
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            interval.tick().await; // completes immediately

            loop {
                interval.tick().await;

                let (outcome, receipt) = {
                    let mut sessions = sessions.write().await;
                    match sessions.get_mut(&session_id) {
                        Some(session) => {
                            let outcome = session.tick();
                            let receipt = (outcome == TickOutcome::ForcedSubmit)
                                .then(|| SubmissionReceipt::from_session(session));
                            (outcome, receipt)
                        }
                        // Session discarded; the countdown dies with it.
                        None => break,
                    }
                };

                match outcome {
                    TickOutcome::Ticking => {}
                    TickOutcome::ForcedSubmit => {
                        log::info!("Session {} timed out, forcing submission", session_id);
                        if let Some(receipt) = receipt {
                            if let Err(err) = submissions.record(receipt).await {
                                log::warn!(
                                    "Failed to record forced submission for {}: {}",
                                    session_id,
                                    err
                                );
                            }
                        }
                        break;
                    }
                    TickOutcome::Ignored => break,
                }
            }

            timers.lock().await.remove(&session_id);
        });

        self.timers.lock().await.insert(session_id, handle);
    }

    async fn cancel_countdown(&self, session_id: Uuid) {
        if let Some(handle) = self.timers.lock().await.remove(&session_id) {
            handle.abort();
        }
    }

    async fn record_receipt(&self, receipt: SubmissionReceipt) {
        // Reporting is best-effort; a failed sink never breaks the attempt.
        if let Err(err) = self.submissions.record(receipt).await {
            log::warn!("Failed to record submission receipt: {}", err);
        }
    }

    #[cfg(test)]
    pub async fn countdown_running(&self, session_id: Uuid) -> bool {
        self.timers.lock().await.contains_key(&session_id)
    }
}
