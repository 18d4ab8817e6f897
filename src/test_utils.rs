#[cfg(test)]
pub mod fixtures {
    use crate::constants::bank::QUESTION_SETS;
    use crate::models::domain::{ExamSession, Question};

    /// The three-question demo exam set (choice, true/false, written).
    pub fn demo_questions() -> Vec<Question> {
        QUESTION_SETS["demo-exam"].clone()
    }

    /// A fresh in-progress demo session with the given time limit.
    pub fn demo_session(time_limit_seconds: u32) -> ExamSession {
        ExamSession::new("demo-exam", demo_questions(), time_limit_seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use crate::models::domain::QuestionKind;

    #[test]
    fn test_fixtures_demo_questions() {
        let questions = demo_questions();

        assert_eq!(questions.len(), 3);
        assert_eq!(questions[0].kind, QuestionKind::MultipleChoice);
        assert_eq!(questions[1].kind, QuestionKind::TrueFalse);
        assert_eq!(questions[2].kind, QuestionKind::Written);
    }

    #[test]
    fn test_fixtures_demo_session() {
        let session = demo_session(60);

        assert_eq!(session.exam_id, "demo-exam");
        assert_eq!(session.time_remaining_seconds, 60);
    }
}
