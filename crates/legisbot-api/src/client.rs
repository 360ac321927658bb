//! Reqwest-backed implementation of the `LegisApi` trait.

use std::sync::RwLock;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use legisbot_core::LegisError;
use legisbot_core::api::LegisApi;
use legisbot_core::chart::{GroupCount, UsagePoint};
use legisbot_core::chat::{ChatAnswer, DocumentContext};
use legisbot_core::history::ChatSessionRecord;
use legisbot_core::user::{OnboardingProfile, User};

use crate::dto::{ChatQueryRequest, ContextsResponse, RegisterRequest, TokenResponse};

/// HTTP client for the LegisBot service.
///
/// The token slot is single-writer (session operations), many-reader
/// (every request); the bearer header is recomputed from it per request
/// instead of being mutated on shared client defaults.
pub struct ApiClient {
    http: Client,
    base_url: String,
    token: RwLock<Option<String>>,
}

impl ApiClient {
    /// Creates a client for the service at `base_url` (trailing slash
    /// tolerated), with no token attached.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: Client::new(),
            base_url,
            token: RwLock::new(None),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn bearer(&self) -> Option<String> {
        self.token.read().unwrap().clone()
    }

    /// Sends a request, attaching the current bearer token, and maps
    /// transport failures and non-success statuses into `LegisError`.
    async fn execute(&self, request: RequestBuilder) -> Result<reqwest::Response, LegisError> {
        let request = match self.bearer() {
            Some(token) => request.bearer_auth(token),
            None => request,
        };

        let response = request
            .send()
            .await
            .map_err(|err| LegisError::network(err.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body_text = response.text().await.unwrap_or_default();
            return Err(LegisError::api(status, extract_server_message(&body_text)));
        }

        Ok(response)
    }

    async fn execute_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, LegisError> {
        let response = self.execute(request).await?;
        response.json().await.map_err(|err| LegisError::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        })
    }
}

#[async_trait]
impl LegisApi for ApiClient {
    fn set_token(&self, token: &str) {
        *self.token.write().unwrap() = Some(token.to_string());
    }

    fn clear_token(&self) {
        *self.token.write().unwrap() = None;
    }

    async fn obtain_token(&self, username: &str, password: &str) -> Result<String, LegisError> {
        let request = self
            .http
            .post(self.url("/auth/token"))
            .form(&[("username", username), ("password", password)]);
        let response: TokenResponse = self.execute_json(request).await?;
        Ok(response.access_token)
    }

    async fn current_user(&self) -> Result<User, LegisError> {
        self.execute_json(self.http.get(self.url("/auth/users/me")))
            .await
    }

    async fn register(&self, email: &str, password: &str) -> Result<(), LegisError> {
        let request = self
            .http
            .post(self.url("/auth/register"))
            .json(&RegisterRequest { email, password });
        // The created-user confirmation body is not consumed.
        self.execute(request).await?;
        Ok(())
    }

    async fn complete_onboarding(&self, profile: &OnboardingProfile) -> Result<User, LegisError> {
        let request = self.http.post(self.url("/auth/onboarding")).json(profile);
        self.execute_json(request).await
    }

    async fn list_contexts(&self) -> Result<Vec<DocumentContext>, LegisError> {
        let response: ContextsResponse = self
            .execute_json(self.http.get(self.url("/documents/contexts")))
            .await?;
        Ok(response.contexts)
    }

    async fn submit_query(
        &self,
        query: &str,
        history_id: Option<i64>,
    ) -> Result<ChatAnswer, LegisError> {
        let request = self
            .http
            .post(self.url("/chat/query"))
            .json(&ChatQueryRequest { query, history_id });
        self.execute_json(request).await
    }

    async fn chat_history(&self) -> Result<Vec<ChatSessionRecord>, LegisError> {
        self.execute_json(self.http.get(self.url("/chat/history")))
            .await
    }

    async fn demographics(&self) -> Result<Vec<GroupCount>, LegisError> {
        self.execute_json(self.http.get(self.url("/admin/stats/demographics")))
            .await
    }

    async fn usage(&self) -> Result<Vec<UsagePoint>, LegisError> {
        self.execute_json(self.http.get(self.url("/admin/stats/usage")))
            .await
    }

    async fn top_queries(&self) -> Result<Vec<GroupCount>, LegisError> {
        self.execute_json(self.http.get(self.url("/admin/stats/top-queries")))
            .await
    }
}

/// Extracts the server's human-readable message from an error body.
///
/// The service reports business errors as JSON with a `detail` (FastAPI
/// convention) or `message` string field; anything else yields `None` and
/// callers fall back to a generic localized string.
fn extract_server_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    for key in ["detail", "message"] {
        if let Some(text) = value.get(key).and_then(|v| v.as_str()) {
            return Some(text.to_string());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_detail_field() {
        assert_eq!(
            extract_server_message(r#"{"detail":"Email ya registrado"}"#),
            Some("Email ya registrado".to_string())
        );
    }

    #[test]
    fn test_extract_message_field() {
        assert_eq!(
            extract_server_message(r#"{"message":"Credenciales inválidas"}"#),
            Some("Credenciales inválidas".to_string())
        );
    }

    #[test]
    fn test_extract_prefers_detail() {
        assert_eq!(
            extract_server_message(r#"{"detail":"a","message":"b"}"#),
            Some("a".to_string())
        );
    }

    #[test]
    fn test_extract_ignores_non_string_detail() {
        // FastAPI validation errors put an array under `detail`.
        assert_eq!(
            extract_server_message(r#"{"detail":[{"loc":["body","email"]}]}"#),
            None
        );
        assert_eq!(extract_server_message("not json"), None);
        assert_eq!(extract_server_message(""), None);
    }
}
