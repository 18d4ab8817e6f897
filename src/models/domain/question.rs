use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Question {
    pub id: String,
    pub kind: QuestionKind,
    pub prompt: String,
    /// Ordered option texts. Empty for `Written`; conventionally
    /// `["True", "False"]` for `TrueFalse`.
    pub options: Vec<String>,
    /// Verbatim member of `options` for the two choice kinds, `None` for
    /// `Written`. The controller never checks this invariant; question bank
    /// content owns it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correct_answer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    pub points: i16,
    pub order: i16,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, Copy)]
pub enum QuestionKind {
    MultipleChoice,
    Written,
    TrueFalse,
}

impl Question {
    pub fn choice(
        id: &str,
        prompt: &str,
        options: &[&str],
        correct_answer: &str,
        explanation: &str,
        points: i16,
        order: i16,
    ) -> Self {
        Question {
            id: id.to_string(),
            kind: QuestionKind::MultipleChoice,
            prompt: prompt.to_string(),
            options: options.iter().map(|o| o.to_string()).collect(),
            correct_answer: Some(correct_answer.to_string()),
            explanation: Some(explanation.to_string()),
            points,
            order,
        }
    }

    pub fn true_false(
        id: &str,
        prompt: &str,
        correct_answer: bool,
        explanation: &str,
        points: i16,
        order: i16,
    ) -> Self {
        Question {
            id: id.to_string(),
            kind: QuestionKind::TrueFalse,
            prompt: prompt.to_string(),
            options: vec!["True".to_string(), "False".to_string()],
            correct_answer: Some(if correct_answer { "True" } else { "False" }.to_string()),
            explanation: Some(explanation.to_string()),
            points,
            order,
        }
    }

    pub fn written(id: &str, prompt: &str, points: i16, order: i16) -> Self {
        Question {
            id: id.to_string(),
            kind: QuestionKind::Written,
            prompt: prompt.to_string(),
            options: vec![],
            correct_answer: None,
            explanation: None,
            points,
            order,
        }
    }

    /// Display-only comparison used by the review view. `Written` questions
    /// are not auto-gradable and always come back `None`.
    pub fn is_correct(&self, answer: Option<&str>) -> Option<bool> {
        let correct = self.correct_answer.as_deref()?;
        Some(answer == Some(correct))
    }
}
