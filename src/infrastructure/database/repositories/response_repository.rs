//! SeaORM implementation of ResponseStore

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};
use tracing::debug;

use crate::domain::{AssessmentResponse, DomainResult, ResponseStore, ScoreAverages, ScoreReport};
use crate::infrastructure::database::entities::response;

pub struct SeaOrmResponseStore {
    db: DatabaseConnection,
}

impl SeaOrmResponseStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn model_to_domain(model: response::Model) -> AssessmentResponse {
    AssessmentResponse {
        id: model.id,
        knowledge: model.knowledge,
        awareness: model.awareness,
        practice: model.practice,
        submitted_at: model.submitted_at,
    }
}

// ── ResponseStore impl ──────────────────────────────────────────

#[async_trait]
impl ResponseStore for SeaOrmResponseStore {
    async fn append(&self, scores: ScoreReport) -> DomainResult<AssessmentResponse> {
        // One INSERT: either all three fields persist or none do. SQLite's
        // single-writer model keeps the id sequence gapless under
        // concurrent submissions.
        let row = response::ActiveModel {
            knowledge: Set(scores.knowledge),
            awareness: Set(scores.awareness),
            practice: Set(scores.practice),
            submitted_at: Set(Utc::now()),
            ..Default::default()
        };

        let model = row.insert(&self.db).await?;
        debug!(response_id = model.id, "response appended");
        Ok(model_to_domain(model))
    }

    async fn list_all(&self) -> DomainResult<Vec<AssessmentResponse>> {
        let models = response::Entity::find()
            .order_by_asc(response::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(model_to_domain).collect())
    }

    async fn averages(&self) -> DomainResult<Option<ScoreAverages>> {
        // Full-table mean; the table stays tiny (one row per submission).
        let rows = self.list_all().await?;
        Ok(ScoreAverages::from_rows(&rows))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::database::migrator::Migrator;
    use sea_orm::{ConnectOptions, Database};
    use sea_orm_migration::MigratorTrait;
    use std::sync::Arc;

    async fn store() -> SeaOrmResponseStore {
        let mut opts = ConnectOptions::new("sqlite::memory:");
        opts.max_connections(1);
        let db = Database::connect(opts).await.unwrap();
        Migrator::up(&db, None).await.unwrap();
        SeaOrmResponseStore::new(db)
    }

    fn report(knowledge: i32, awareness: i32, practice: i32) -> ScoreReport {
        ScoreReport {
            knowledge,
            awareness,
            practice,
        }
    }

    #[tokio::test]
    async fn append_assigns_increasing_ids() {
        let store = store().await;
        let first = store.append(report(2, 6, 6)).await.unwrap();
        let second = store.append(report(0, 2, 2)).await.unwrap();
        assert!(second.id > first.id);
    }

    #[tokio::test]
    async fn list_all_is_oldest_first() {
        let store = store().await;
        for k in 0..3 {
            store.append(report(k, 4, 4)).await.unwrap();
        }

        let rows = store.list_all().await.unwrap();
        assert_eq!(rows.len(), 3);
        assert!(rows.windows(2).all(|w| w[0].id < w[1].id));
        assert_eq!(rows[0].knowledge, 0);
        assert_eq!(rows[2].knowledge, 2);
    }

    #[tokio::test]
    async fn averages_empty_is_none() {
        let store = store().await;
        assert!(store.averages().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn averages_match_columns() {
        let store = store().await;
        store.append(report(0, 2, 6)).await.unwrap();
        store.append(report(2, 6, 2)).await.unwrap();

        let avg = store.averages().await.unwrap().unwrap();
        assert_eq!(avg.knowledge, 1.0);
        assert_eq!(avg.awareness, 4.0);
        assert_eq!(avg.practice, 4.0);
    }

    #[tokio::test]
    async fn concurrent_appends_get_distinct_ids() {
        let store = Arc::new(store().await);

        let mut handles = Vec::new();
        for i in 0..8 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store.append(report(i % 3, 4, 4)).await.unwrap().id
            }));
        }

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap());
        }
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 8);

        let rows = store.list_all().await.unwrap();
        assert_eq!(rows.len(), 8);
        assert!(rows.windows(2).all(|w| w[0].id < w[1].id));
    }
}
