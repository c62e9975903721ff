//! SeaORM implementation of CredentialStore

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use tracing::debug;

use crate::domain::{CredentialStore, DomainError, DomainResult, User, UserRole};
use crate::infrastructure::crypto::password::{hash_password, verify_password, DUMMY_HASH};
use crate::infrastructure::database::entities::user;

pub struct SeaOrmCredentialStore {
    db: DatabaseConnection,
}

impl SeaOrmCredentialStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn entity_role_to_domain(role: user::UserRole) -> UserRole {
    match role {
        user::UserRole::Student => UserRole::Student,
        user::UserRole::Admin => UserRole::Admin,
    }
}

fn domain_role_to_entity(role: UserRole) -> user::UserRole {
    match role {
        UserRole::Student => user::UserRole::Student,
        UserRole::Admin => user::UserRole::Admin,
    }
}

fn model_to_domain(model: user::Model) -> User {
    User {
        id: model.id,
        email: model.email,
        password_hash: model.password_hash,
        role: entity_role_to_domain(model.role),
        created_at: model.created_at,
    }
}

// ── CredentialStore impl ────────────────────────────────────────

#[async_trait]
impl CredentialStore for SeaOrmCredentialStore {
    async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>> {
        let model = user::Entity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await?;

        Ok(model.map(model_to_domain))
    }

    async fn verify(&self, email: &str, password: &str) -> DomainResult<User> {
        let Some(user) = self.find_by_email(email).await? else {
            // Burn a hash comparison so an unknown email takes as long as a
            // wrong password.
            let _ = verify_password(password, DUMMY_HASH);
            return Err(DomainError::AuthFailure);
        };

        let valid = verify_password(password, &user.password_hash).unwrap_or(false);
        if !valid {
            return Err(DomainError::AuthFailure);
        }

        Ok(user)
    }

    async fn create(&self, email: &str, password: &str, role: UserRole) -> DomainResult<User> {
        let password_hash = hash_password(password)
            .map_err(|e| DomainError::Validation(format!("Failed to hash password: {}", e)))?;

        let new_user = user::ActiveModel {
            email: Set(email.to_string()),
            password_hash: Set(password_hash),
            role: Set(domain_role_to_entity(role)),
            created_at: Set(Utc::now()),
            ..Default::default()
        };

        let model = new_user.insert(&self.db).await.map_err(|e| {
            if e.to_string().contains("UNIQUE") || e.to_string().contains("duplicate") {
                DomainError::DuplicateEmail(email.to_string())
            } else {
                DomainError::from(e)
            }
        })?;

        debug!(user_id = model.id, "user created");
        Ok(model_to_domain(model))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::database::migrator::Migrator;
    use sea_orm::{ConnectOptions, Database};
    use sea_orm_migration::MigratorTrait;

    async fn store() -> SeaOrmCredentialStore {
        let mut opts = ConnectOptions::new("sqlite::memory:");
        opts.max_connections(1);
        let db = Database::connect(opts).await.unwrap();
        Migrator::up(&db, None).await.unwrap();
        SeaOrmCredentialStore::new(db)
    }

    #[tokio::test]
    async fn create_and_verify() {
        let store = store().await;
        let user = store
            .create("s1@uni.edu", "correct-horse", UserRole::Student)
            .await
            .unwrap();
        assert_eq!(user.role, UserRole::Student);
        assert_ne!(user.password_hash, "correct-horse");

        let verified = store.verify("s1@uni.edu", "correct-horse").await.unwrap();
        assert_eq!(verified.id, user.id);
    }

    #[tokio::test]
    async fn wrong_password_and_unknown_email_fail_identically() {
        let store = store().await;
        store
            .create("s1@uni.edu", "correct-horse", UserRole::Student)
            .await
            .unwrap();

        let wrong_password = store.verify("s1@uni.edu", "battery-staple").await.unwrap_err();
        let unknown_email = store.verify("ghost@uni.edu", "anything").await.unwrap_err();
        assert!(matches!(wrong_password, DomainError::AuthFailure));
        assert!(matches!(unknown_email, DomainError::AuthFailure));
        assert_eq!(wrong_password.to_string(), unknown_email.to_string());
    }

    #[tokio::test]
    async fn duplicate_email_is_rejected() {
        let store = store().await;
        store
            .create("dup@uni.edu", "first", UserRole::Student)
            .await
            .unwrap();

        let err = store
            .create("dup@uni.edu", "second", UserRole::Admin)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::DuplicateEmail(ref e) if e == "dup@uni.edu"));
    }

    #[tokio::test]
    async fn find_by_email_is_exact_match() {
        let store = store().await;
        store
            .create("Case@uni.edu", "pw123456", UserRole::Student)
            .await
            .unwrap();

        assert!(store.find_by_email("Case@uni.edu").await.unwrap().is_some());
        assert!(store.find_by_email("nobody@uni.edu").await.unwrap().is_none());
    }
}
