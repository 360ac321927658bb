//! Chat use case: the query submitter.
//!
//! Owns the transcript for the current chat session and the per-submission
//! state machine. One submission may be in flight at a time; while it is,
//! the transcript shows a placeholder turn that is later replaced in place
//! by the answer or by the fixed error text.

use std::sync::Arc;

use uuid::Uuid;

use legisbot_core::api::LegisApi;
use legisbot_core::chat::DocumentContext;
use legisbot_core::transcript::{SourceRef, Transcript};

/// Placeholder text shown while a query is in flight.
pub const PENDING_MESSAGE: &str = "LegisBot está buscando la respuesta...";

/// Fixed text shown when a query fails; the actual failure is only logged.
pub const QUERY_ERROR_MESSAGE: &str = "Error: no se pudo consultar el servidor.";

/// State of the current submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SubmissionState {
    /// No query in flight; submission enabled.
    Idle,
    /// A query is in flight; the placeholder turn has this id.
    Pending { turn_id: Uuid },
    /// The response was reconciled into the transcript; transitions to
    /// `Idle` unconditionally before `submit` returns.
    Resolved,
}

/// Use case for the chat screen.
///
/// Created per chat session; the transcript dies with it and is never
/// persisted client-side.
pub struct ChatUseCase {
    api: Arc<dyn LegisApi>,
    transcript: Transcript,
    state: SubmissionState,
    /// Server-side history the session's queries are appended to, learned
    /// from the first successful answer.
    history_id: Option<i64>,
    contexts: Vec<DocumentContext>,
    selected_context: Option<String>,
}

impl ChatUseCase {
    pub fn new(api: Arc<dyn LegisApi>) -> Self {
        Self {
            api,
            transcript: Transcript::new(),
            state: SubmissionState::Idle,
            history_id: None,
            contexts: Vec::new(),
            selected_context: None,
        }
    }

    /// Loads the available document contexts and preselects the first.
    ///
    /// A failed fetch degrades silently to an empty list.
    pub async fn load_contexts(&mut self) {
        match self.api.list_contexts().await {
            Ok(contexts) => {
                self.selected_context = contexts.first().map(|ctx| ctx.id.clone());
                self.contexts = contexts;
            }
            Err(err) => {
                tracing::warn!("could not load document contexts: {err}");
            }
        }
    }

    pub fn contexts(&self) -> &[DocumentContext] {
        &self.contexts
    }

    pub fn selected_context(&self) -> Option<&DocumentContext> {
        let selected = self.selected_context.as_deref()?;
        self.contexts.iter().find(|ctx| ctx.id == selected)
    }

    /// Selects a context by id. Returns `false` for unknown ids.
    pub fn select_context(&mut self, id: &str) -> bool {
        if self.contexts.iter().any(|ctx| ctx.id == id) {
            self.selected_context = Some(id.to_string());
            true
        } else {
            false
        }
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.state, SubmissionState::Pending { .. })
    }

    /// Submits a query.
    ///
    /// Returns `false` without any side effect when the input is empty or
    /// whitespace-only, or when a submission is already pending. Otherwise
    /// appends the user turn and the placeholder, issues the request, and
    /// reconciles the placeholder with the answer or the fixed error text.
    /// Submission is re-enabled unconditionally once resolution completes.
    pub async fn submit(&mut self, input: &str) -> bool {
        let question = input.trim();
        if question.is_empty() || self.is_pending() {
            return false;
        }

        self.transcript.push_user(question);
        let pending_id = self.transcript.push_pending(PENDING_MESSAGE);
        self.state = SubmissionState::Pending {
            turn_id: pending_id,
        };

        match self.api.submit_query(question, self.history_id).await {
            Ok(answer) => {
                if self.history_id.is_none() {
                    self.history_id = answer.history_id;
                }
                self.resolve(pending_id, answer.answer, answer.sources);
            }
            Err(err) => {
                tracing::error!("chat query failed: {err}");
                self.resolve(pending_id, QUERY_ERROR_MESSAGE.to_string(), Vec::new());
            }
        }

        // Resolution always re-enables submission.
        self.state = SubmissionState::Idle;
        true
    }

    fn resolve(&mut self, pending_id: Uuid, text: String, sources: Vec<SourceRef>) {
        self.transcript.resolve(pending_id, text, sources);
        self.state = SubmissionState::Resolved;
    }
}
