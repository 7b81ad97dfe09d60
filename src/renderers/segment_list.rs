//! Display list for annotated-line rendering
//!
//! This module defines the output structure returned from the engine to
//! JavaScript. Each render segment carries its text, the combined CSS
//! class list, tooltip content, and data attributes, so the JavaScript
//! side can emit one wrapping element per segment without any range math
//! or tag reopening.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::annotation::{Annotation, AnnotationKind, AnnotationPayload};
use crate::models::story::StoryLine;
use crate::segmenter::{build_segments, Segment};

/// A single line ready to render
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct LineDisplayList {
    /// Line number for identification
    pub line_number: u32,

    /// Segments in reading order; concatenating their text reproduces the
    /// line exactly
    pub segments: Vec<RenderSegment>,
}

/// A segment with all rendering information
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RenderSegment {
    /// The text to display
    pub text: String,

    /// CSS class names to apply; empty for unannotated text
    pub classes: Vec<String>,

    /// Tooltip text (newline-joined lexical forms of active vocabulary)
    pub tooltip: Option<String>,

    /// Data attributes (data-* attributes)
    pub dataset: HashMap<String, String>,
}

/// Build the display list for one story line
pub fn render_line(line: &StoryLine) -> LineDisplayList {
    let annotations = line.annotations();
    LineDisplayList {
        line_number: line.line_number,
        segments: render_segments(&line.text, &annotations),
    }
}

/// Build render segments for a line of text and its annotations
pub fn render_segments(text: &str, annotations: &[Annotation]) -> Vec<RenderSegment> {
    build_segments(text, annotations)
        .into_iter()
        .map(|segment| render_segment(&segment, annotations))
        .collect()
}

fn render_segment(segment: &Segment, annotations: &[Annotation]) -> RenderSegment {
    let active: Vec<&Annotation> = segment.active.iter().map(|&i| &annotations[i]).collect();

    // One class per distinct kind, in active order
    let mut classes: Vec<String> = Vec::new();
    for annotation in &active {
        let class = annotation.kind.css_class().to_string();
        if !classes.contains(&class) {
            classes.push(class);
        }
    }

    let lexical_forms: Vec<&str> = active
        .iter()
        .filter_map(|a| match &a.payload {
            AnnotationPayload::Vocabulary { lexical_form, .. } => Some(lexical_form.as_str()),
            _ => None,
        })
        .collect();
    let grammar_notes: Vec<&str> = active
        .iter()
        .filter_map(|a| match &a.payload {
            AnnotationPayload::Grammar { text, .. } => Some(text.as_str()),
            _ => None,
        })
        .collect();
    let footnote_ids: Vec<String> = active
        .iter()
        .filter_map(|a| match (&a.kind, &a.payload) {
            (AnnotationKind::Footnote, AnnotationPayload::Footnote { id }) => Some(id.to_string()),
            _ => None,
        })
        .collect();

    let mut dataset = HashMap::new();
    if !lexical_forms.is_empty() {
        dataset.insert("lexical".to_string(), lexical_forms.join("\n"));
    }
    if !grammar_notes.is_empty() {
        dataset.insert("grammar".to_string(), grammar_notes.join("\n"));
    }
    if !footnote_ids.is_empty() {
        dataset.insert("footnote".to_string(), footnote_ids.join(" "));
    }

    // No tooltip when no vocabulary is active
    let tooltip = if lexical_forms.is_empty() {
        None
    } else {
        Some(lexical_forms.join("\n"))
    };

    RenderSegment {
        text: segment.text.clone(),
        classes,
        tooltip,
        dataset,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::annotation::AnnotationKind;

    fn vocab(start: usize, end: usize, lexical_form: &str) -> Annotation {
        Annotation::new(
            AnnotationKind::Vocabulary,
            start,
            end,
            AnnotationPayload::Vocabulary {
                word: String::new(),
                lexical_form: lexical_form.to_string(),
            },
        )
    }

    #[test]
    fn test_unannotated_segment_is_bare() {
        let segments = render_segments("hello", &[]);
        assert_eq!(segments.len(), 1);
        assert!(segments[0].classes.is_empty());
        assert!(segments[0].tooltip.is_none());
        assert!(segments[0].dataset.is_empty());
    }

    #[test]
    fn test_duplicate_kind_class_emitted_once() {
        let segments = render_segments("abcdef", &[vocab(1, 4, "one"), vocab(1, 4, "two")]);
        let annotated = &segments[1];
        assert_eq!(annotated.classes, vec!["vocab-highlight".to_string()]);
        assert_eq!(annotated.tooltip.as_deref(), Some("one\ntwo"));
    }
}
