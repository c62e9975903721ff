//! In-memory store implementations for development and testing
//!
//! Writes are serialized through a Mutex, so concurrent appends still get
//! distinct, strictly increasing identifiers, matching the contract of the
//! SQLite stores.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::{
    AssessmentResponse, CredentialStore, DomainError, DomainResult, ResponseStore, ScoreAverages,
    ScoreReport, StoreProvider, User, UserRole,
};
use crate::infrastructure::crypto::password::{hash_password, verify_password, DUMMY_HASH};

fn lock_err() -> DomainError {
    DomainError::Persistence("in-memory store lock poisoned".to_string())
}

/// In-memory credential store.
#[derive(Default)]
pub struct MemoryCredentialStore {
    users: Mutex<Vec<User>>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CredentialStore for MemoryCredentialStore {
    async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>> {
        let users = self.users.lock().map_err(|_| lock_err())?;
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn verify(&self, email: &str, password: &str) -> DomainResult<User> {
        let Some(user) = self.find_by_email(email).await? else {
            let _ = verify_password(password, DUMMY_HASH);
            return Err(DomainError::AuthFailure);
        };

        if verify_password(password, &user.password_hash).unwrap_or(false) {
            Ok(user)
        } else {
            Err(DomainError::AuthFailure)
        }
    }

    async fn create(&self, email: &str, password: &str, role: UserRole) -> DomainResult<User> {
        let password_hash = hash_password(password)
            .map_err(|e| DomainError::Validation(format!("Failed to hash password: {}", e)))?;

        let mut users = self.users.lock().map_err(|_| lock_err())?;
        if users.iter().any(|u| u.email == email) {
            return Err(DomainError::DuplicateEmail(email.to_string()));
        }

        // Users are never deleted, so length + 1 is the next id.
        let user = User {
            id: users.len() as i32 + 1,
            email: email.to_string(),
            password_hash,
            role,
            created_at: Utc::now(),
        };
        users.push(user.clone());
        Ok(user)
    }
}

/// In-memory response store.
#[derive(Default)]
pub struct MemoryResponseStore {
    rows: Mutex<Vec<AssessmentResponse>>,
}

impl MemoryResponseStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ResponseStore for MemoryResponseStore {
    async fn append(&self, scores: ScoreReport) -> DomainResult<AssessmentResponse> {
        let mut rows = self.rows.lock().map_err(|_| lock_err())?;
        // Rows are never deleted, so length + 1 is the next id; assigning
        // it under the lock keeps ids and insertion order aligned.
        let row = AssessmentResponse {
            id: rows.len() as i32 + 1,
            knowledge: scores.knowledge,
            awareness: scores.awareness,
            practice: scores.practice,
            submitted_at: Utc::now(),
        };
        rows.push(row.clone());
        Ok(row)
    }

    async fn list_all(&self) -> DomainResult<Vec<AssessmentResponse>> {
        let rows = self.rows.lock().map_err(|_| lock_err())?;
        Ok(rows.clone())
    }

    async fn averages(&self) -> DomainResult<Option<ScoreAverages>> {
        let rows = self.rows.lock().map_err(|_| lock_err())?;
        Ok(ScoreAverages::from_rows(&rows))
    }
}

/// In-memory provider bundling both stores.
#[derive(Default)]
pub struct MemoryStoreProvider {
    credentials: MemoryCredentialStore,
    responses: MemoryResponseStore,
}

impl MemoryStoreProvider {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StoreProvider for MemoryStoreProvider {
    fn credentials(&self) -> &dyn CredentialStore {
        &self.credentials
    }

    fn responses(&self) -> &dyn ResponseStore {
        &self.responses
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn create_verify_and_duplicate() {
        let store = MemoryCredentialStore::new();
        store
            .create("a@uni.edu", "pw-one-two", UserRole::Student)
            .await
            .unwrap();

        assert!(store.verify("a@uni.edu", "pw-one-two").await.is_ok());
        assert!(matches!(
            store.verify("a@uni.edu", "nope").await,
            Err(DomainError::AuthFailure)
        ));
        assert!(matches!(
            store.verify("b@uni.edu", "nope").await,
            Err(DomainError::AuthFailure)
        ));
        assert!(matches!(
            store.create("a@uni.edu", "again", UserRole::Admin).await,
            Err(DomainError::DuplicateEmail(_))
        ));
    }

    #[tokio::test]
    async fn concurrent_appends_keep_ids_distinct_and_increasing() {
        let store = Arc::new(MemoryResponseStore::new());

        let mut handles = Vec::new();
        for _ in 0..16 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store
                    .append(ScoreReport {
                        knowledge: 1,
                        awareness: 4,
                        practice: 4,
                    })
                    .await
                    .unwrap()
                    .id
            }));
        }
        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap());
        }
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 16);

        let rows = store.list_all().await.unwrap();
        assert_eq!(rows.len(), 16);
        assert!(rows.windows(2).all(|w| w[0].id < w[1].id));
    }

    #[tokio::test]
    async fn averages_none_when_empty() {
        let store = MemoryResponseStore::new();
        assert!(store.averages().await.unwrap().is_none());

        store
            .append(ScoreReport {
                knowledge: 2,
                awareness: 6,
                practice: 2,
            })
            .await
            .unwrap();
        let avg = store.averages().await.unwrap().unwrap();
        assert_eq!(avg.knowledge, 2.0);
    }
}
