//! Annotation interaction session
//!
//! Explicit state machine for the admin annotation flow: a text selection
//! enters `Selecting`, choosing an annotation kind from the menu enters
//! `Drafting`, and committing the kind-specific payload produces the
//! `AnnotationRequest` the caller sends to the annotate endpoint. The
//! engine performs no I/O; committing only builds the request body.
//!
//! All interaction state lives here instead of in mutable fields scattered
//! across event callbacks, so every transition is checked and reportable.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::annotation::AnnotationKind;
use crate::models::error::{validate_span, AnnotationError};
use crate::models::story::{AnnotationRequest, Footnote, GrammarItem, VocabularyItem};

/// The selected text a pending annotation will cover
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineSelection {
    pub line_number: u32,
    /// `[start, end)` char offsets into the line text
    pub start: usize,
    pub end: usize,
    /// The selected text itself (becomes the vocabulary word or footnote
    /// reference)
    pub text: String,
}

/// Kind-specific fields entered in the annotation modal
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftPayload {
    /// Vocabulary: dictionary form of the selected word
    #[serde(default)]
    pub lexical_form: Option<String>,
    /// Grammar or footnote: descriptive text
    #[serde(default)]
    pub text: Option<String>,
    /// Grammar: optional cross-reference id
    #[serde(default)]
    pub ref_id: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum SessionState {
    Idle,
    Selecting { selection: LineSelection },
    Drafting { selection: LineSelection, kind: AnnotationKind },
}

impl SessionState {
    fn name(&self) -> &'static str {
        match self {
            SessionState::Idle => "idle",
            SessionState::Selecting { .. } => "selecting",
            SessionState::Drafting { .. } => "drafting",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("cannot {action} while {state}")]
    InvalidTransition {
        state: &'static str,
        action: &'static str,
    },

    #[error(transparent)]
    InvalidSpan(#[from] AnnotationError),

    #[error("missing {field} for {kind:?} annotation")]
    MissingField {
        kind: AnnotationKind,
        field: &'static str,
    },

    #[error("cannot create annotations of kind {0:?}")]
    UnsupportedKind(AnnotationKind),
}

/// One user's annotation interaction, from selection to committed request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotationSession {
    state: SessionState,
}

impl AnnotationSession {
    pub fn new() -> Self {
        Self {
            state: SessionState::Idle,
        }
    }

    /// Current state name for UI binding: "idle", "selecting", "drafting"
    pub fn state_name(&self) -> &'static str {
        self.state.name()
    }

    /// The pending selection, if any
    pub fn selection(&self) -> Option<&LineSelection> {
        match &self.state {
            SessionState::Idle => None,
            SessionState::Selecting { selection } | SessionState::Drafting { selection, .. } => {
                Some(selection)
            }
        }
    }

    /// Enter `Selecting` with a resolved selection.
    ///
    /// Allowed from any state: a new selection replaces whatever was
    /// pending. The span is validated against the line length up front so
    /// a stale selection fails here instead of at commit.
    pub fn begin(
        &mut self,
        selection: LineSelection,
        line_len: usize,
    ) -> Result<(), SessionError> {
        validate_span(selection.start, selection.end, line_len)?;
        self.state = SessionState::Selecting { selection };
        Ok(())
    }

    /// Choose the annotation kind for the pending selection.
    ///
    /// Allowed from `Selecting`, or from `Drafting` to switch kinds.
    pub fn draft(&mut self, kind: AnnotationKind) -> Result<(), SessionError> {
        if kind == AnnotationKind::Other {
            return Err(SessionError::UnsupportedKind(kind));
        }
        match std::mem::replace(&mut self.state, SessionState::Idle) {
            SessionState::Selecting { selection } | SessionState::Drafting { selection, .. } => {
                self.state = SessionState::Drafting { selection, kind };
                Ok(())
            }
            idle => {
                self.state = idle;
                Err(SessionError::InvalidTransition {
                    state: "idle",
                    action: "draft",
                })
            }
        }
    }

    /// Commit the draft, producing the write request for the annotate
    /// endpoint and returning the session to `Idle`.
    pub fn commit(&mut self, payload: DraftPayload) -> Result<AnnotationRequest, SessionError> {
        let (selection, kind) = match &self.state {
            SessionState::Drafting { selection, kind } => (selection.clone(), *kind),
            other => {
                return Err(SessionError::InvalidTransition {
                    state: other.name(),
                    action: "commit",
                })
            }
        };

        let mut request = AnnotationRequest {
            line_number: selection.line_number,
            ..Default::default()
        };

        match kind {
            AnnotationKind::Vocabulary => {
                let lexical_form =
                    payload
                        .lexical_form
                        .filter(|f| !f.is_empty())
                        .ok_or(SessionError::MissingField {
                            kind,
                            field: "lexicalForm",
                        })?;
                request.vocabulary = Some(VocabularyItem {
                    word: selection.text,
                    lexical_form,
                    position: [selection.start, selection.end],
                });
            }
            AnnotationKind::Grammar => {
                let text = payload
                    .text
                    .filter(|t| !t.is_empty())
                    .ok_or(SessionError::MissingField { kind, field: "text" })?;
                request.grammar = Some(GrammarItem {
                    text,
                    position: [selection.start, selection.end],
                    ref_id: payload.ref_id,
                });
            }
            AnnotationKind::Footnote => {
                let text = payload
                    .text
                    .filter(|t| !t.is_empty())
                    .ok_or(SessionError::MissingField { kind, field: "text" })?;
                // Server assigns the footnote id
                request.footnote = Some(Footnote {
                    id: 0,
                    text,
                    references: Some(vec![selection.text]),
                });
            }
            AnnotationKind::Other => return Err(SessionError::UnsupportedKind(kind)),
        }

        self.state = SessionState::Idle;
        Ok(request)
    }

    /// Abandon the pending selection or draft
    pub fn cancel(&mut self) {
        self.state = SessionState::Idle;
    }
}

impl Default for AnnotationSession {
    fn default() -> Self {
        Self::new()
    }
}
