//! Application layer - use cases and workflow orchestration

pub mod bootstrap;
pub mod scoring;
pub mod service;
pub mod session;

pub use bootstrap::seed_default_admin;
pub use scoring::{score_answers, score_knowledge, score_likert, RawAnswers};
pub use service::SurveyService;
pub use session::Session;
