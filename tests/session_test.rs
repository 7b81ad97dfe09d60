// Annotation session flow: selection → draft → committed request, plus
// the transitions the UI must not be able to make.

use annotator_wasm::models::annotation::AnnotationKind;
use annotator_wasm::session::{AnnotationSession, DraftPayload, LineSelection, SessionError};

fn quick_selection() -> LineSelection {
    LineSelection {
        line_number: 7,
        start: 4,
        end: 9,
        text: "quick".to_string(),
    }
}

#[test]
fn test_full_vocabulary_flow() {
    let mut session = AnnotationSession::new();
    assert_eq!(session.state_name(), "idle");

    session.begin(quick_selection(), 13).unwrap();
    assert_eq!(session.state_name(), "selecting");

    session.draft(AnnotationKind::Vocabulary).unwrap();
    assert_eq!(session.state_name(), "drafting");

    let request = session
        .commit(DraftPayload {
            lexical_form: Some("quick".to_string()),
            ..Default::default()
        })
        .unwrap();

    assert_eq!(session.state_name(), "idle");
    assert_eq!(request.line_number, 7);
    let vocabulary = request.vocabulary.expect("vocabulary request");
    assert_eq!(vocabulary.word, "quick");
    assert_eq!(vocabulary.position, [4, 9]);
    assert!(request.grammar.is_none());
    assert!(request.footnote.is_none());
}

#[test]
fn test_grammar_flow_carries_ref_id() {
    let mut session = AnnotationSession::new();
    session.begin(quick_selection(), 13).unwrap();
    session.draft(AnnotationKind::Grammar).unwrap();

    let request = session
        .commit(DraftPayload {
            text: Some("adjective before noun".to_string()),
            ref_id: Some(42),
            ..Default::default()
        })
        .unwrap();

    let grammar = request.grammar.expect("grammar request");
    assert_eq!(grammar.text, "adjective before noun");
    assert_eq!(grammar.ref_id, Some(42));
    assert_eq!(grammar.position, [4, 9]);
}

#[test]
fn test_commit_without_draft_is_rejected() {
    let mut session = AnnotationSession::new();
    session.begin(quick_selection(), 13).unwrap();

    let result = session.commit(DraftPayload::default());
    assert_eq!(
        result,
        Err(SessionError::InvalidTransition {
            state: "selecting",
            action: "commit"
        })
    );
    // The selection survives the rejected commit
    assert_eq!(session.state_name(), "selecting");
}

#[test]
fn test_cancel_returns_to_idle() {
    let mut session = AnnotationSession::new();
    session.begin(quick_selection(), 13).unwrap();
    session.draft(AnnotationKind::Footnote).unwrap();

    session.cancel();
    assert_eq!(session.state_name(), "idle");
    assert!(session.selection().is_none());
}

#[test]
fn test_switching_kind_keeps_selection() {
    let mut session = AnnotationSession::new();
    session.begin(quick_selection(), 13).unwrap();
    session.draft(AnnotationKind::Vocabulary).unwrap();
    session.draft(AnnotationKind::Grammar).unwrap();

    assert_eq!(session.state_name(), "drafting");
    assert_eq!(session.selection().unwrap().text, "quick");
}
