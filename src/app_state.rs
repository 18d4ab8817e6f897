use std::sync::Arc;

use crate::{
    config::Config,
    repositories::{InMemorySubmissionRepository, StaticQuestionBank},
    services::{ExamService, FullSetSelector},
};

#[derive(Clone)]
pub struct AppState {
    pub exam_service: Arc<ExamService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let bank = Arc::new(StaticQuestionBank::new(config.default_time_limit_seconds));
        let selector = Arc::new(FullSetSelector::new(bank.clone()));
        let submissions = Arc::new(InMemorySubmissionRepository::new());

        let exam_service = Arc::new(ExamService::new(
            selector,
            bank,
            submissions,
            config.tick_interval_ms,
        ));

        Self {
            exam_service,
            config: Arc::new(config),
        }
    }
}
