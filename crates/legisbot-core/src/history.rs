//! Chat history domain models.
//!
//! Shapes returned by `GET /chat/history`: one record per stored chat
//! session, each with its ordered messages and optional source citations
//! on bot messages.

use serde::{Deserialize, Serialize};

use crate::transcript::SourceRef;

/// Who produced a stored history message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

/// A single stored message within a history session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessageRecord {
    #[serde(default)]
    pub id: Option<i64>,
    pub sender: Sender,
    pub content: String,
    #[serde(default)]
    pub sources: Vec<SourceRef>,
}

/// A stored chat session with its nested messages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatSessionRecord {
    pub id: i64,
    pub created_at: String,
    #[serde(default)]
    pub messages: Vec<ChatMessageRecord>,
}
