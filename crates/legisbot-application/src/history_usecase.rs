//! History use case: one-shot fetch of stored chat sessions.

use std::sync::Arc;

use chrono::{DateTime, Local};

use legisbot_core::api::LegisApi;
use legisbot_core::history::ChatSessionRecord;

/// Placeholder shown when the user has no stored sessions (or the fetch
/// failed and degraded to none).
pub const EMPTY_HISTORY_MESSAGE: &str = "No tenés consultas todavía.";

/// Use case for the history screen.
pub struct HistoryUseCase {
    api: Arc<dyn LegisApi>,
}

impl HistoryUseCase {
    pub fn new(api: Arc<dyn LegisApi>) -> Self {
        Self { api }
    }

    /// Fetches the stored sessions. A failed fetch is logged and degrades
    /// to an empty list; no retry, no cache.
    pub async fn fetch(&self) -> Vec<ChatSessionRecord> {
        match self.api.chat_history().await {
            Ok(history) => history,
            Err(err) => {
                tracing::warn!("could not load chat history: {err}");
                Vec::new()
            }
        }
    }
}

/// Formats a session timestamp for display as a local date-time, falling
/// back to the raw string when it cannot be parsed.
pub fn format_session_timestamp(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(parsed) => parsed
            .with_timezone(&Local)
            .format("%d/%m/%Y %H:%M")
            .to_string(),
        Err(_) => raw.to_string(),
    }
}
