//! Request/response wire types.
//!
//! Only shapes that exist purely on the wire live here; shapes the rest of
//! the client consumes (User, ChatAnswer, history records, stat rows) are
//! the domain models from the core crate.

use serde::{Deserialize, Serialize};

use legisbot_core::chat::DocumentContext;

/// Response of `POST /auth/token`.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
}

/// Body of `POST /auth/register`.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Body of `POST /chat/query`.
///
/// `history_id` is serialized as an explicit `null` when absent, matching
/// the service contract.
#[derive(Debug, Clone, Serialize)]
pub struct ChatQueryRequest<'a> {
    pub query: &'a str,
    pub history_id: Option<i64>,
}

/// Response of `GET /documents/contexts`.
#[derive(Debug, Clone, Deserialize)]
pub struct ContextsResponse {
    #[serde(default)]
    pub contexts: Vec<DocumentContext>,
}
