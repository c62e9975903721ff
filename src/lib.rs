//! # Dental Infection Control Survey core
//!
//! Role-gated survey core: students answer a fixed infection-control
//! questionnaire, responses are persisted, an administrator views all rows
//! plus per-column averages. Rendering (forms, tables, charts) is a
//! presentation-layer concern; this crate exposes the operations it calls.
//!
//! ## Architecture
//!
//! - **domain**: entities, store contracts and errors
//! - **application**: scoring, session state machine, survey service, seed
//! - **infrastructure**: SeaORM persistence, migrations, bcrypt hashing,
//!   in-memory stores for tests and prototyping
//! - **config**: TOML application configuration

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{default_config_path, AdminConfig, AppConfig};

// Re-export database types for easy access
pub use infrastructure::{init_database, DatabaseConfig, MemoryStoreProvider, SeaOrmStoreProvider};

// Re-export the core surface the presentation layer talks to
pub use application::{seed_default_admin, RawAnswers, Session, SurveyService};
pub use domain::{
    AssessmentResponse, DomainError, DomainResult, ScoreAverages, ScoreReport, User, UserRole,
};
