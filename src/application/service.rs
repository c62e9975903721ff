//! Survey service — application-layer orchestration
//!
//! All survey workflows live here. The presentation layer should be a thin
//! wrapper that collects raw input and delegates to this service; role gates
//! are enforced here, not by which buttons the UI chooses to render.

use std::sync::Arc;

use tracing::info;

use crate::application::scoring::{score_answers, RawAnswers};
use crate::application::session::Session;
use crate::domain::{AssessmentResponse, DomainResult, ScoreAverages, ScoreReport, StoreProvider};

/// Survey service — orchestrates login, submission, and the admin view.
///
/// Backed by a [`StoreProvider`] so the SeaORM and in-memory stores
/// interchange freely.
pub struct SurveyService {
    stores: Arc<dyn StoreProvider>,
}

impl SurveyService {
    pub fn new(stores: Arc<dyn StoreProvider>) -> Self {
        Self { stores }
    }

    // ── Authentication ──────────────────────────────────────────

    /// Verify credentials and return the authenticated session.
    ///
    /// On failure the caller's state is unchanged: no partially
    /// authenticated session exists.
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<Session> {
        let user = self.stores.credentials().verify(email, password).await?;
        info!(user_id = user.id, role = %user.role, "login");
        Ok(Session::for_user(&user))
    }

    /// Valid from any state; always yields `LoggedOut`.
    pub fn logout(&self, session: Session) -> Session {
        session.logout()
    }

    // ── Student workflow ────────────────────────────────────────

    /// Score the raw answers and persist the result.
    ///
    /// Student sessions only. Validation runs before the write, so a
    /// rejected submission leaves the response store untouched.
    pub async fn submit_assessment(
        &self,
        session: &Session,
        answers: &RawAnswers,
    ) -> DomainResult<ScoreReport> {
        let user_id = session.require_student()?;
        let report = score_answers(answers)?;
        let row = self.stores.responses().append(report).await?;
        info!(user_id, response_id = row.id, "assessment submitted");
        Ok(report)
    }

    // ── Admin workflow ──────────────────────────────────────────

    /// All collected responses (oldest first) plus per-column averages.
    ///
    /// Admin sessions only; read-only. Averages are `None` when nothing
    /// has been submitted yet.
    pub async fn view_responses(
        &self,
        session: &Session,
    ) -> DomainResult<(Vec<AssessmentResponse>, Option<ScoreAverages>)> {
        session.require_admin()?;
        let rows = self.stores.responses().list_all().await?;
        let averages = ScoreAverages::from_rows(&rows);
        Ok((rows, averages))
    }
}
