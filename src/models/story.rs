//! Story content wire model
//!
//! JSON shapes exchanged with the story API (camelCase field names). The
//! engine only reads per-line text and annotation positions from these;
//! persistence, scoring, and id assignment live on the server.

use serde::{Deserialize, Serialize};

use super::annotation::{Annotation, AnnotationKind, AnnotationPayload};

/// Story content: all lines of one story
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoryContent {
    pub lines: Vec<StoryLine>,
}

/// A single story line with its annotations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryLine {
    pub line_number: u32,
    pub text: String,
    #[serde(default)]
    pub vocabulary: Vec<VocabularyItem>,
    #[serde(default)]
    pub grammar: Vec<GrammarItem>,
    #[serde(default)]
    pub footnotes: Vec<Footnote>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub audio_file: Option<String>,
}

/// Vocabulary annotation as stored by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VocabularyItem {
    pub word: String,
    pub lexical_form: String,
    /// `[start, end)` char offsets into the line text
    pub position: [usize; 2],
}

/// Grammar annotation as stored by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrammarItem {
    pub text: String,
    /// `[start, end)` char offsets into the line text
    pub position: [usize; 2],
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub ref_id: Option<u32>,
}

/// Footnote attached to a line.
///
/// Footnotes carry no positions; `references` holds the referenced text
/// verbatim and spans are derived by locating it in the line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Footnote {
    pub id: u32,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub references: Option<Vec<String>>,
}

/// Write request for the admin annotate endpoint.
///
/// Exactly one of the annotation fields is set per request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AnnotationRequest {
    pub line_number: u32,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub vocabulary: Option<VocabularyItem>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub grammar: Option<GrammarItem>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub footnote: Option<Footnote>,
}

impl StoryLine {
    /// Flatten this line's vocabulary, grammar, and footnote references
    /// into one annotation list for the segmenter.
    pub fn annotations(&self) -> Vec<Annotation> {
        let mut annotations = Vec::new();

        for vocab in &self.vocabulary {
            annotations.push(Annotation::new(
                AnnotationKind::Vocabulary,
                vocab.position[0],
                vocab.position[1],
                AnnotationPayload::Vocabulary {
                    word: vocab.word.clone(),
                    lexical_form: vocab.lexical_form.clone(),
                },
            ));
        }

        for grammar in &self.grammar {
            annotations.push(Annotation::new(
                AnnotationKind::Grammar,
                grammar.position[0],
                grammar.position[1],
                AnnotationPayload::Grammar {
                    text: grammar.text.clone(),
                    ref_id: grammar.ref_id,
                },
            ));
        }

        // Footnote references have no stored position; take the first
        // occurrence of each referenced text in the line.
        for footnote in &self.footnotes {
            for reference in footnote.references.iter().flatten() {
                if let Some((start, end)) = find_char_span(&self.text, reference) {
                    annotations.push(Annotation::new(
                        AnnotationKind::Footnote,
                        start,
                        end,
                        AnnotationPayload::Footnote { id: footnote.id },
                    ));
                }
            }
        }

        annotations
    }
}

/// Locate `needle` in `haystack` and return its char-offset span
fn find_char_span(haystack: &str, needle: &str) -> Option<(usize, usize)> {
    if needle.is_empty() {
        return None;
    }
    let byte_start = haystack.find(needle)?;
    let char_start = haystack[..byte_start].chars().count();
    let char_len = needle.chars().count();
    Some((char_start, char_start + char_len))
}
