use async_trait::async_trait;

use crate::{constants::bank, errors::AppResult, models::domain::Question};

/// Read-only lookup from exam id to its authored question set and time limit.
/// Implementations must return the full set ordered by the `order` field and
/// degrade to an empty list / default limit for unknown ids, never an error.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuestionBank: Send + Sync {
    async fn questions_for_exam(&self, exam_id: &str) -> AppResult<Vec<Question>>;
    async fn time_limit_seconds(&self, exam_id: &str) -> AppResult<u32>;
}

/// Build-time-embedded bank over the static content tables.
pub struct StaticQuestionBank {
    default_time_limit_seconds: u32,
}

impl StaticQuestionBank {
    pub fn new(default_time_limit_seconds: u32) -> Self {
        Self {
            default_time_limit_seconds,
        }
    }
}

impl Default for StaticQuestionBank {
    fn default() -> Self {
        Self::new(bank::DEFAULT_TIME_LIMIT_SECONDS)
    }
}

#[async_trait]
impl QuestionBank for StaticQuestionBank {
    async fn questions_for_exam(&self, exam_id: &str) -> AppResult<Vec<Question>> {
        let mut questions = match bank::QUESTION_SETS.get(exam_id) {
            Some(questions) => questions.clone(),
            None => {
                log::debug!("No question set for exam '{}'", exam_id);
                vec![]
            }
        };
        questions.sort_by_key(|q| q.order);
        Ok(questions)
    }

    async fn time_limit_seconds(&self, exam_id: &str) -> AppResult<u32> {
        Ok(bank::TIME_LIMITS
            .get(exam_id)
            .copied()
            .unwrap_or(self.default_time_limit_seconds))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn returns_full_set_in_order() {
        let bank = StaticQuestionBank::default();

        let questions = bank
            .questions_for_exam("air-diving-fundamentals")
            .await
            .expect("lookup should work");

        assert_eq!(questions.len(), 5);
        for pair in questions.windows(2) {
            assert!(pair[0].order < pair[1].order);
        }
    }

    #[tokio::test]
    async fn unknown_exam_yields_empty_list_not_error() {
        let bank = StaticQuestionBank::default();

        let questions = bank
            .questions_for_exam("nonexistent-exam-id")
            .await
            .expect("unknown ids must not error");

        assert!(questions.is_empty());
    }

    #[tokio::test]
    async fn unknown_exam_gets_default_time_limit() {
        let bank = StaticQuestionBank::default();

        let limit = bank
            .time_limit_seconds("nonexistent-exam-id")
            .await
            .expect("lookup should work");

        assert_eq!(limit, bank::DEFAULT_TIME_LIMIT_SECONDS);
    }

    #[tokio::test]
    async fn mapped_exam_gets_its_configured_limit() {
        let bank = StaticQuestionBank::default();

        let limit = bank
            .time_limit_seconds("demo-exam")
            .await
            .expect("lookup should work");

        assert_eq!(limit, 5);
    }
}
