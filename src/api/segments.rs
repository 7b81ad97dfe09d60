//! Segment building and line rendering operations
//!
//! JavaScript-facing wrappers over the segment builder and the two
//! renderers. The reader and admin views call `renderLine`/`renderSegments`
//! for display lists; the server-rendered pages call `highlightLineHtml`.

use wasm_bindgen::prelude::*;

use crate::api::helpers::{deserialize, serialize};
use crate::models::annotation::Annotation;
use crate::models::story::{GrammarItem, StoryLine, VocabularyItem};
use crate::renderers::{render_line, render_line_html, render_segments};
use crate::segmenter::build_segments;
use crate::wasm_log;

/// Build the raw segment list for a line.
///
/// Returns `[{start, end, text, active}]` where `active` holds indices
/// into the supplied annotation array.
#[wasm_bindgen(js_name = buildSegments)]
pub fn build_segments_js(text: &str, annotations_js: JsValue) -> Result<JsValue, JsValue> {
    let annotations: Vec<Annotation> =
        deserialize(annotations_js, "Invalid annotation list")?;
    wasm_log!(
        "buildSegments: {} chars, {} annotations",
        text.chars().count(),
        annotations.len()
    );

    let segments = build_segments(text, &annotations);
    serialize(&segments, "Segment serialization error")
}

/// Build render segments (classes, tooltips, data attributes) for a line
#[wasm_bindgen(js_name = renderSegments)]
pub fn render_segments_js(text: &str, annotations_js: JsValue) -> Result<JsValue, JsValue> {
    let annotations: Vec<Annotation> =
        deserialize(annotations_js, "Invalid annotation list")?;
    let segments = render_segments(text, &annotations);
    serialize(&segments, "Render segment serialization error")
}

/// Build the display list for one story line as fetched from the API
#[wasm_bindgen(js_name = renderLine)]
pub fn render_line_js(line_js: JsValue) -> Result<JsValue, JsValue> {
    let line: StoryLine = deserialize(line_js, "Invalid story line")?;
    wasm_log!(
        "renderLine: line {} with {} vocab / {} grammar",
        line.line_number,
        line.vocabulary.len(),
        line.grammar.len()
    );

    let display_list = render_line(&line);
    serialize(&display_list, "Display list serialization error")
}

/// Render one line to an HTML fragment (server-rendered reader pages).
///
/// Takes the line's vocabulary and grammar arrays as stored in the page's
/// data attributes.
#[wasm_bindgen(js_name = highlightLineHtml)]
pub fn highlight_line_html(
    text: &str,
    vocabulary_js: JsValue,
    grammar_js: JsValue,
) -> Result<String, JsValue> {
    let vocabulary: Vec<VocabularyItem> =
        deserialize(vocabulary_js, "Invalid vocabulary list")?;
    let grammar: Vec<GrammarItem> = deserialize(grammar_js, "Invalid grammar list")?;

    let line = StoryLine {
        line_number: 0,
        text: text.to_string(),
        vocabulary,
        grammar,
        footnotes: Vec::new(),
        audio_file: None,
    };

    Ok(render_line_html(text, &line.annotations()))
}
