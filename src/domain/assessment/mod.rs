//! Assessment aggregate
//!
//! Submitted questionnaire scores and the response store contract.

pub mod model;
pub mod repository;

pub use model::{AssessmentResponse, ScoreAverages, ScoreReport};
pub use repository::ResponseStore;
