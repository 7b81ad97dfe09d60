//! Annotation session operations
//!
//! The admin annotation flow: `beginAnnotation` resolves the live selection
//! into the session, `draftAnnotation` picks the kind from the menu, and
//! `commitAnnotation` produces the request body for the caller's PUT to the
//! annotate endpoint. The session is WASM-owned; the page holds no
//! annotation state between events.

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::api::helpers::{deserialize, lock_session, serialize, validation_error};
use crate::models::annotation::AnnotationKind;
use crate::selection::resolve_selection_offsets;
use crate::session::{DraftPayload, LineSelection, SessionError};
use crate::{wasm_info, wasm_log};

fn session_error(e: SessionError) -> JsValue {
    validation_error(e.to_string())
}

/// Start an annotation from the current selection inside a line container.
///
/// Returns the resolved selection `{lineNumber, start, end, text}` or
/// `null` when there is no usable selection.
#[wasm_bindgen(js_name = beginAnnotation)]
pub fn begin_annotation(line_number: u32, container: &Element) -> Result<JsValue, JsValue> {
    let Some((start, end)) = resolve_selection_offsets(container) else {
        wasm_log!("beginAnnotation: no usable selection on line {}", line_number);
        return Ok(JsValue::NULL);
    };

    let line_text = container.text_content().unwrap_or_default();
    let line_len = line_text.chars().count();
    let text: String = line_text.chars().skip(start).take(end - start).collect();

    let selection = LineSelection {
        line_number,
        start,
        end,
        text,
    };

    wasm_info!(
        "beginAnnotation: line {} [{}, {}) \"{}\"",
        line_number,
        start,
        end,
        selection.text
    );

    lock_session()?
        .begin(selection.clone(), line_len)
        .map_err(session_error)?;

    serialize(&selection, "Selection serialization error")
}

/// Choose the annotation kind for the pending selection
/// ("vocab", "grammar", or "footnote")
#[wasm_bindgen(js_name = draftAnnotation)]
pub fn draft_annotation(kind_js: JsValue) -> Result<(), JsValue> {
    let kind: AnnotationKind = deserialize(kind_js, "Invalid annotation kind")?;
    wasm_info!("draftAnnotation: {:?}", kind);

    lock_session()?.draft(kind).map_err(session_error)
}

/// Commit the draft with the modal's payload fields, returning the
/// `AnnotationRequest` body for the annotate endpoint
#[wasm_bindgen(js_name = commitAnnotation)]
pub fn commit_annotation(payload_js: JsValue) -> Result<JsValue, JsValue> {
    let payload: DraftPayload = deserialize(payload_js, "Invalid draft payload")?;

    let request = lock_session()?.commit(payload).map_err(session_error)?;
    wasm_info!("commitAnnotation: line {}", request.line_number);

    serialize(&request, "Annotation request serialization error")
}

/// Abandon the pending selection or draft
#[wasm_bindgen(js_name = cancelAnnotation)]
pub fn cancel_annotation() -> Result<(), JsValue> {
    wasm_log!("cancelAnnotation");
    lock_session()?.cancel();
    Ok(())
}

/// Current session state for UI binding: "idle", "selecting", "drafting"
#[wasm_bindgen(js_name = annotationState)]
pub fn annotation_state() -> Result<String, JsValue> {
    Ok(lock_session()?.state_name().to_string())
}
