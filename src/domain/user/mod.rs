//! User aggregate
//!
//! Contains the User entity, role enum, and the credential store contract.

pub mod model;
pub mod repository;

pub use model::{User, UserRole};
pub use repository::CredentialStore;
