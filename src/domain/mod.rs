//! Domain layer - entities, store contracts, and errors

pub mod assessment;
pub mod error;
pub mod repositories;
pub mod user;

// Re-export commonly used types
pub use assessment::{AssessmentResponse, ResponseStore, ScoreAverages, ScoreReport};
pub use error::{DomainError, DomainResult};
pub use repositories::StoreProvider;
pub use user::{CredentialStore, User, UserRole};
