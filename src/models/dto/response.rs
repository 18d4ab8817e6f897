use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::domain::{ExamSession, Question, QuestionKind, SessionStatus};

/// Question as the learner sees it while the clock is running: no answer
/// key, no explanation.
#[derive(Debug, Clone, Serialize)]
pub struct PublicQuestionDto {
    pub id: String,
    pub kind: QuestionKind,
    pub prompt: String,
    pub options: Vec<String>,
    pub points: i16,
    pub order: i16,
}

impl From<&Question> for PublicQuestionDto {
    fn from(question: &Question) -> Self {
        PublicQuestionDto {
            id: question.id.clone(),
            kind: question.kind,
            prompt: question.prompt.clone(),
            options: question.options.clone(),
            points: question.points,
            order: question.order,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionViewDto {
    pub id: Uuid,
    pub exam_id: String,
    pub status: SessionStatus,
    pub current_index: usize,
    pub time_remaining_seconds: u32,
    pub question_count: usize,
    pub answered_count: usize,
    pub questions: Vec<PublicQuestionDto>,
    pub started_at: DateTime<Utc>,
}

impl From<&ExamSession> for SessionViewDto {
    fn from(session: &ExamSession) -> Self {
        SessionViewDto {
            id: session.id,
            exam_id: session.exam_id.clone(),
            status: session.status,
            current_index: session.current_index,
            time_remaining_seconds: session.time_remaining_seconds,
            question_count: session.questions.len(),
            answered_count: session.answers.len(),
            questions: session.questions.iter().map(PublicQuestionDto::from).collect(),
            started_at: session.started_at,
        }
    }
}

/// Per-question review row. The answer key fields stay `None` until the
/// session is submitted; grading here is display-only, no aggregate score.
#[derive(Debug, Clone, Serialize)]
pub struct ReviewEntryDto {
    pub question_id: String,
    pub kind: QuestionKind,
    pub prompt: String,
    pub options: Vec<String>,
    pub points: i16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub learner_answer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correct_answer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_correct: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReviewViewDto {
    pub session_id: Uuid,
    pub exam_id: String,
    pub status: SessionStatus,
    pub entries: Vec<ReviewEntryDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submitted_at: Option<DateTime<Utc>>,
    pub forced: bool,
}

impl From<&ExamSession> for ReviewViewDto {
    fn from(session: &ExamSession) -> Self {
        let submitted = session.status == SessionStatus::Submitted;

        let entries = session
            .questions
            .iter()
            .map(|question| {
                let learner_answer = session.answer_for(&question.id).map(str::to_string);
                let (correct_answer, is_correct, explanation) = if submitted {
                    (
                        question.correct_answer.clone(),
                        question.is_correct(session.answer_for(&question.id)),
                        question.explanation.clone(),
                    )
                } else {
                    // Answer key is withheld while the clock is running.
                    (None, None, None)
                };

                ReviewEntryDto {
                    question_id: question.id.clone(),
                    kind: question.kind,
                    prompt: question.prompt.clone(),
                    options: question.options.clone(),
                    points: question.points,
                    learner_answer,
                    correct_answer,
                    is_correct,
                    explanation,
                }
            })
            .collect();

        ReviewViewDto {
            session_id: session.id,
            exam_id: session.exam_id.clone(),
            status: session.status,
            entries,
            submitted_at: session.submitted_at,
            forced: session.forced,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TutorReplyDto {
    pub track_id: String,
    pub persona: String,
    pub reply: String,
}

#[derive(Debug, Serialize)]
pub struct DiscardResponse {
    pub message: String,
}
