//! First-run seeding
//!
//! Guarantees the credential store holds an administrator account before the
//! presentation layer ever shows a login form.

use tracing::{info, warn};

use crate::config::AdminConfig;
use crate::domain::{CredentialStore, DomainError, DomainResult, UserRole};

/// Create the default admin account if it does not exist yet.
///
/// Idempotent: running it again (or racing another instance) is a no-op,
/// not an error. Returns whether an account was created.
pub async fn seed_default_admin(
    store: &dyn CredentialStore,
    admin: &AdminConfig,
) -> DomainResult<bool> {
    if store.find_by_email(&admin.email).await?.is_some() {
        return Ok(false);
    }

    match store
        .create(&admin.email, &admin.password, UserRole::Admin)
        .await
    {
        Ok(user) => {
            info!(user_id = user.id, email = %admin.email, "default admin created");
            warn!("default admin uses the documented password; change it before production use");
            Ok(true)
        }
        // Another instance seeded between our lookup and insert.
        Err(DomainError::DuplicateEmail(_)) => Ok(false),
        Err(e) => Err(e),
    }
}
