//! Remote service interface.
//!
//! Defines the trait the application layer talks to. The concrete
//! implementation (an HTTP client) lives in the API crate; tests provide
//! in-memory mocks.

use crate::chart::{GroupCount, UsagePoint};
use crate::chat::{ChatAnswer, DocumentContext};
use crate::error::LegisError;
use crate::history::ChatSessionRecord;
use crate::user::{OnboardingProfile, User};

/// Client for the LegisBot HTTP API.
///
/// The bearer credential is shared mutable state attached to the client:
/// written only by the session operations (`set_token`/`clear_token`),
/// read by every authenticated request.
#[async_trait::async_trait]
pub trait LegisApi: Send + Sync {
    /// Attaches the bearer token used for subsequent requests.
    fn set_token(&self, token: &str);

    /// Detaches the bearer token.
    fn clear_token(&self);

    /// `POST /auth/token` with form-encoded credentials; returns the
    /// access token on success.
    async fn obtain_token(&self, username: &str, password: &str) -> Result<String, LegisError>;

    /// `GET /auth/users/me`.
    async fn current_user(&self) -> Result<User, LegisError>;

    /// `POST /auth/register`. The created-user confirmation body is not
    /// used by any flow; callers follow up with `obtain_token`.
    async fn register(&self, email: &str, password: &str) -> Result<(), LegisError>;

    /// `POST /auth/onboarding`; returns the updated user.
    async fn complete_onboarding(&self, profile: &OnboardingProfile) -> Result<User, LegisError>;

    /// `GET /documents/contexts`.
    async fn list_contexts(&self) -> Result<Vec<DocumentContext>, LegisError>;

    /// `POST /chat/query`.
    async fn submit_query(
        &self,
        query: &str,
        history_id: Option<i64>,
    ) -> Result<ChatAnswer, LegisError>;

    /// `GET /chat/history`.
    async fn chat_history(&self) -> Result<Vec<ChatSessionRecord>, LegisError>;

    /// `GET /admin/stats/demographics`.
    async fn demographics(&self) -> Result<Vec<GroupCount>, LegisError>;

    /// `GET /admin/stats/usage`.
    async fn usage(&self) -> Result<Vec<UsagePoint>, LegisError>;

    /// `GET /admin/stats/top-queries`.
    async fn top_queries(&self) -> Result<Vec<GroupCount>, LegisError>;
}
