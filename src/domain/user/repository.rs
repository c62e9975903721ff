use async_trait::async_trait;

use super::{User, UserRole};
use crate::domain::DomainResult;

/// Persistence contract for user credentials.
///
/// `email` is the natural key: unique, case-sensitive as stored.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Exact-match lookup by email.
    async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>>;

    /// Verify a plaintext password against the stored hash.
    ///
    /// Returns the same [`DomainError::AuthFailure`] for an unknown email
    /// and for a wrong password, so callers cannot probe which emails are
    /// registered.
    ///
    /// [`DomainError::AuthFailure`]: crate::domain::DomainError::AuthFailure
    async fn verify(&self, email: &str, password: &str) -> DomainResult<User>;

    /// Create a user, hashing the password with a fresh random salt.
    ///
    /// Fails with [`DomainError::DuplicateEmail`] if the email is taken.
    ///
    /// [`DomainError::DuplicateEmail`]: crate::domain::DomainError::DuplicateEmail
    async fn create(&self, email: &str, password: &str, role: UserRole) -> DomainResult<User>;
}
