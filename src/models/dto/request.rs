use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RecordAnswerRequest {
    #[validate(length(min = 1, max = 100))]
    pub question_id: String,

    /// Free text for written questions, the exact option string for the
    /// choice kinds. Not validated against the options on purpose; the UI
    /// constrains input, the contract stays permissive.
    #[validate(length(max = 10000))]
    pub value: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct TutorMessageRequest {
    #[validate(length(min = 1, max = 2000))]
    pub message: String,
}
