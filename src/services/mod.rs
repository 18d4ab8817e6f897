pub mod catalog_service;
pub mod exam_service;
pub mod selection;
pub mod tutor_service;

pub use catalog_service::CatalogService;
pub use exam_service::ExamService;
pub use selection::{FullSetSelector, LearnerHistory, QuestionPerformance, QuestionSelector};
pub use tutor_service::TutorService;
