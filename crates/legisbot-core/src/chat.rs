//! Chat exchange domain models.

use serde::{Deserialize, Serialize};

use crate::transcript::SourceRef;

/// A named grouping of indexed documents that queries can be scoped to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentContext {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
}

impl DocumentContext {
    /// Display label: the name when present, otherwise the id.
    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }
}

/// A resolved answer from `POST /chat/query`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatAnswer {
    pub answer: String,
    #[serde(default)]
    pub sources: Vec<SourceRef>,
    /// Server-side history this exchange was appended to. Threaded into
    /// subsequent queries of the same chat session.
    #[serde(default)]
    pub history_id: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_answer_without_sources_or_history() {
        let answer: ChatAnswer = serde_json::from_str(r#"{"answer":"Sí."}"#).unwrap();
        assert_eq!(answer.answer, "Sí.");
        assert!(answer.sources.is_empty());
        assert_eq!(answer.history_id, None);
    }

    #[test]
    fn test_context_label_falls_back_to_id() {
        let ctx: DocumentContext = serde_json::from_str(r#"{"id":"vt-2024"}"#).unwrap();
        assert_eq!(ctx.label(), "vt-2024");
    }
}
