//! Unified store provider
//!
//! One trait bundling the per-aggregate stores so the application layer
//! stays decoupled from the concrete persistence backend.

use crate::domain::assessment::ResponseStore;
use crate::domain::user::CredentialStore;

pub trait StoreProvider: Send + Sync {
    fn credentials(&self) -> &dyn CredentialStore;
    fn responses(&self) -> &dyn ResponseStore;
}
