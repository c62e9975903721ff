use async_trait::async_trait;

use super::{AssessmentResponse, ScoreAverages, ScoreReport};
use crate::domain::DomainResult;

/// Persistence contract for submitted assessments.
///
/// Implementations must serialize their own writes so that concurrent
/// appends each receive a distinct, monotonically increasing identifier.
#[async_trait]
pub trait ResponseStore: Send + Sync {
    /// Insert a new immutable row and return it with its assigned id.
    ///
    /// All three score fields persist atomically or not at all.
    async fn append(&self, scores: ScoreReport) -> DomainResult<AssessmentResponse>;

    /// All rows, oldest-first by id.
    async fn list_all(&self) -> DomainResult<Vec<AssessmentResponse>>;

    /// Per-column means, `None` when the store is empty.
    async fn averages(&self) -> DomainResult<Option<ScoreAverages>>;
}
