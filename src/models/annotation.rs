//! Annotation data model
//!
//! An annotation is a labeled half-open character interval over a single
//! story line. Annotations never span line boundaries; they may overlap,
//! nest, or share exact boundaries with other annotations on the same line.
//!
//! Offsets count Unicode scalar values (`char`s), matching the positions
//! the story API stores in its `position` arrays for BMP text.

use serde::{Deserialize, Serialize};

/// Category of annotation.
///
/// The segmenter treats this as an opaque discriminator; only the rendering
/// layer maps kinds to CSS classes and tooltip content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnnotationKind {
    #[serde(rename = "vocab")]
    Vocabulary,
    Grammar,
    Footnote,
    /// A kind this build does not know yet. Still flows through
    /// segmentation and gets a generic highlight class.
    #[serde(other)]
    Other,
}

impl AnnotationKind {
    /// CSS class the rendering layer applies for this kind
    pub fn css_class(&self) -> &'static str {
        match self {
            AnnotationKind::Vocabulary => "vocab-highlight",
            AnnotationKind::Grammar => "grammar-highlight",
            AnnotationKind::Footnote => "footnote-highlight",
            AnnotationKind::Other => "annotation-highlight",
        }
    }
}

/// Kind-specific annotation data. Opaque to the segmenter.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnnotationPayload {
    /// Vocabulary: the surface form as it appears in the line, plus the
    /// dictionary (lexical) form shown in tooltips.
    Vocabulary {
        word: String,
        #[serde(rename = "lexicalForm")]
        lexical_form: String,
    },
    /// Grammar note: descriptive text and an optional cross-reference id
    /// into the course's grammar index.
    Grammar {
        text: String,
        #[serde(rename = "refId", skip_serializing_if = "Option::is_none", default)]
        ref_id: Option<u32>,
    },
    /// Footnote reference: points at a footnote by id.
    Footnote { id: u32 },
    /// No payload (unknown kinds).
    #[default]
    Empty,
}

/// A labeled half-open character interval `[start, end)` over one line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    pub kind: AnnotationKind,
    pub start: usize,
    pub end: usize,
    #[serde(default)]
    pub payload: AnnotationPayload,
}

impl Annotation {
    pub fn new(kind: AnnotationKind, start: usize, end: usize, payload: AnnotationPayload) -> Self {
        Self {
            kind,
            start,
            end,
            payload,
        }
    }

    /// Clamp bounds to `[0, line_len]`, dropping spans that collapse.
    ///
    /// Returns `None` for degenerate spans (`start >= end` after clamping).
    /// A zero-width span carries no renderable text.
    pub fn clamped(&self, line_len: usize) -> Option<Annotation> {
        let start = self.start.min(line_len);
        let end = self.end.min(line_len);
        if start >= end {
            return None;
        }
        let mut clamped = self.clone();
        clamped.start = start;
        clamped.end = end;
        Some(clamped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocab(start: usize, end: usize) -> Annotation {
        Annotation::new(
            AnnotationKind::Vocabulary,
            start,
            end,
            AnnotationPayload::Vocabulary {
                word: "quick".to_string(),
                lexical_form: "quick".to_string(),
            },
        )
    }

    #[test]
    fn test_degenerate_span_dropped() {
        assert_eq!(vocab(3, 3).clamped(10), None);
    }

    #[test]
    fn test_inverted_span_dropped() {
        assert_eq!(vocab(7, 2).clamped(10), None);
    }

    #[test]
    fn test_out_of_range_clamped() {
        let clamped = vocab(4, 99).clamped(10).unwrap();
        assert_eq!(clamped.start, 4);
        assert_eq!(clamped.end, 10);
    }

    #[test]
    fn test_span_past_line_end_collapses() {
        // Both bounds beyond the line clamp to the same offset and drop
        assert_eq!(vocab(20, 25).clamped(10), None);
    }

    #[test]
    fn test_kind_json_names() {
        let kind: AnnotationKind = serde_json::from_str("\"vocab\"").unwrap();
        assert_eq!(kind, AnnotationKind::Vocabulary);
        let kind: AnnotationKind = serde_json::from_str("\"grammar\"").unwrap();
        assert_eq!(kind, AnnotationKind::Grammar);
        // Unknown kinds deserialize to Other instead of failing the line
        let kind: AnnotationKind = serde_json::from_str("\"idiom\"").unwrap();
        assert_eq!(kind, AnnotationKind::Other);
    }
}
