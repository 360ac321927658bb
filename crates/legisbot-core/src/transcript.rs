//! Chat transcript types.
//!
//! The transcript is an append-only sequence of turns, with one exception:
//! the placeholder turn appended while a query is in flight is replaced
//! in place once the query resolves. The pending turn is addressed by its
//! id, never by scanning for a role tag.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents the role of a turn in the transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnRole {
    /// A question typed by the user.
    User,
    /// An answer (or the fixed error text) from the service.
    Assistant,
    /// Placeholder shown while a query is in flight.
    Pending,
}

/// A document citation attached to an assistant answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceRef {
    /// Document the passage came from.
    pub source: String,
    /// Page within the document.
    pub page: i64,
}

/// A single turn in the transcript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Turn {
    pub id: Uuid,
    pub role: TurnRole,
    pub text: String,
    #[serde(default)]
    pub sources: Vec<SourceRef>,
}

impl Turn {
    fn new(role: TurnRole, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role,
            text: text.into(),
            sources: Vec::new(),
        }
    }
}

/// The ordered list of chat turns for the current chat session.
///
/// Created empty per session and never persisted client-side; it grows
/// unboundedly for the duration of the session.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    turns: Vec<Turn>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Appends a user turn and returns its id.
    pub fn push_user(&mut self, text: impl Into<String>) -> Uuid {
        let turn = Turn::new(TurnRole::User, text);
        let id = turn.id;
        self.turns.push(turn);
        id
    }

    /// Appends a pending placeholder turn and returns its id.
    pub fn push_pending(&mut self, text: impl Into<String>) -> Uuid {
        let turn = Turn::new(TurnRole::Pending, text);
        let id = turn.id;
        self.turns.push(turn);
        id
    }

    /// Replaces the turn with the given id by an assistant turn.
    ///
    /// The id keeps its place in the transcript; only role, text, and
    /// sources change. Returns `false` when no turn with that id exists
    /// (e.g. the view was torn down and the transcript discarded), in
    /// which case nothing is mutated.
    pub fn resolve(&mut self, id: Uuid, text: impl Into<String>, sources: Vec<SourceRef>) -> bool {
        match self.turns.iter_mut().find(|turn| turn.id == id) {
            Some(turn) => {
                turn.role = TurnRole::Assistant;
                turn.text = text.into();
                turn.sources = sources;
                true
            }
            None => false,
        }
    }
}
