pub mod question_bank;
pub mod submission_repository;

pub use question_bank::{QuestionBank, StaticQuestionBank};
pub use submission_repository::{InMemorySubmissionRepository, SubmissionRepository};

#[cfg(test)]
pub use question_bank::MockQuestionBank;
#[cfg(test)]
pub use submission_repository::MockSubmissionRepository;
