//! Selection resolution operations
//!
//! Maps the live browser selection back to absolute char offsets into the
//! annotated line rendered inside a container element.

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::api::helpers::serialize;
use crate::selection::resolve_selection_offsets;
use crate::wasm_log;

/// A selection resolved to absolute char offsets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedSelection {
    pub start: usize,
    pub end: usize,
}

/// Resolve the current selection against an annotated-line container.
///
/// Returns `{start, end}` or `null` when there is no usable selection
/// (collapsed, outside the container, or stale).
#[wasm_bindgen(js_name = resolveSelection)]
pub fn resolve_selection(container: &Element) -> Result<JsValue, JsValue> {
    match resolve_selection_offsets(container) {
        Some((start, end)) => {
            wasm_log!("resolveSelection: [{}, {})", start, end);
            serialize(
                &ResolvedSelection { start, end },
                "Selection serialization error",
            )
        }
        None => Ok(JsValue::NULL),
    }
}
