//! SeaORM implementation of StoreProvider

use sea_orm::DatabaseConnection;

use crate::domain::{CredentialStore, ResponseStore, StoreProvider};

use super::response_repository::SeaOrmResponseStore;
use super::user_repository::SeaOrmCredentialStore;

/// Unified store provider backed by SeaORM.
///
/// Holds one connection pool and exposes per-aggregate store accessors.
///
/// ```ignore
/// let stores = SeaOrmStoreProvider::new(db.clone());
/// let user = stores.credentials().verify("student@uni.edu", "pw").await?;
/// let rows = stores.responses().list_all().await?;
/// ```
pub struct SeaOrmStoreProvider {
    credentials: SeaOrmCredentialStore,
    responses: SeaOrmResponseStore,
}

impl SeaOrmStoreProvider {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            credentials: SeaOrmCredentialStore::new(db.clone()),
            responses: SeaOrmResponseStore::new(db),
        }
    }
}

impl StoreProvider for SeaOrmStoreProvider {
    fn credentials(&self) -> &dyn CredentialStore {
        &self.credentials
    }

    fn responses(&self) -> &dyn ResponseStore {
        &self.responses
    }
}
