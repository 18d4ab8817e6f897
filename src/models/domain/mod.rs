pub mod exam_session;
pub mod question;
pub mod submission;
pub mod track;
pub mod tutor;

pub use exam_session::{ExamSession, SessionStatus, TickOutcome};
pub use question::{Question, QuestionKind};
pub use submission::SubmissionReceipt;
pub use track::Track;
pub use tutor::{TutorPersona, TutorRule};
