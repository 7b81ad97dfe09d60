//! Segment builder: the core annotation overlay algorithm
//!
//! Converts a line of text plus an unordered list of annotations into an
//! ordered list of segments that exactly tile the line, each carrying the
//! set of annotations active over it. Both rendering targets (the segment
//! display list for the virtual-DOM views and the HTML string renderer for
//! server-rendered pages) consume this one output, replacing the two
//! duplicated highlighter implementations.
//!
//! The sweep visits only the distinct start/end offsets of the annotations
//! rather than every character, so it is O(a log a) in annotation count.

pub mod offsets;

pub use offsets::CharMap;

use serde::{Deserialize, Serialize};

use crate::models::annotation::Annotation;

/// A maximal contiguous run of line text over which the active annotation
/// set does not change.
///
/// `active` holds indices into the caller's annotation slice, ordered by
/// `(start, end)` of the clamped span. Annotations rejected at ingestion
/// never appear.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    /// Char-offset range `[start, end)` of this segment in the line
    pub start: usize,
    pub end: usize,
    /// Line text covered by this segment
    pub text: String,
    /// Indices of annotations active over this segment
    pub active: Vec<usize>,
}

/// Build the segment list for one line.
///
/// Deterministic for a given input regardless of annotation order; the
/// returned segments tile `[0, char_len)` with no gaps or overlaps.
/// Malformed annotations are dropped and out-of-range bounds clamped to
/// the line (see `Annotation::clamped`); an empty line yields no segments.
pub fn build_segments(text: &str, annotations: &[Annotation]) -> Vec<Segment> {
    let map = CharMap::new(text);
    let len = map.char_len();
    if len == 0 {
        return Vec::new();
    }

    // Ingestion: clamp bounds, drop degenerate spans, remember source indices
    let clamped: Vec<(usize, Annotation)> = annotations
        .iter()
        .enumerate()
        .filter_map(|(index, annotation)| {
            let clamped = annotation.clamped(len);
            if clamped.is_none() {
                log::warn!(
                    "dropping annotation {} with degenerate span [{}, {}) (line length {})",
                    index,
                    annotation.start,
                    annotation.end,
                    len
                );
            }
            clamped.map(|c| (index, c))
        })
        .collect();

    if clamped.is_empty() {
        return vec![Segment {
            start: 0,
            end: len,
            text: text.to_string(),
            active: Vec::new(),
        }];
    }

    // Distinct boundary offsets, ascending
    let mut boundaries: Vec<usize> = clamped
        .iter()
        .flat_map(|(_, a)| [a.start, a.end])
        .collect();
    boundaries.sort_unstable();
    boundaries.dedup();

    let mut segments = Vec::new();
    // Positions into `clamped` of the annotations active at the cursor
    let mut active: Vec<usize> = Vec::new();
    let mut last_emitted = 0;

    for &pos in &boundaries {
        // Emit the span before this boundary with the set active during it
        if pos > last_emitted {
            segments.push(emit(&map, &clamped, &active, last_emitted, pos));
        }

        // Spans are exclusive at `end`: annotations ending here stop first,
        // then annotations starting here join
        active.retain(|&slot| clamped[slot].1.end > pos);
        for (slot, (_, annotation)) in clamped.iter().enumerate() {
            if annotation.start == pos {
                active.push(slot);
            }
        }

        last_emitted = pos;
    }

    // Trailing unannotated text; every span has ended by its own boundary
    if last_emitted < len {
        segments.push(Segment {
            start: last_emitted,
            end: len,
            text: map.slice(last_emitted, len).to_string(),
            active: Vec::new(),
        });
    }

    segments
}

fn emit(
    map: &CharMap,
    clamped: &[(usize, Annotation)],
    active: &[usize],
    start: usize,
    end: usize,
) -> Segment {
    let mut slots: Vec<usize> = active.to_vec();
    slots.sort_by_key(|&slot| {
        let (source, annotation) = &clamped[slot];
        (annotation.start, annotation.end, *source)
    });

    Segment {
        start,
        end,
        text: map.slice(start, end).to_string(),
        active: slots.iter().map(|&slot| clamped[slot].0).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::annotation::{AnnotationKind, AnnotationPayload};

    fn plain(kind: AnnotationKind, start: usize, end: usize) -> Annotation {
        Annotation::new(kind, start, end, AnnotationPayload::Empty)
    }

    #[test]
    fn test_boundaries_at_line_edges() {
        let text = "hello";
        let segments = build_segments(text, &[plain(AnnotationKind::Vocabulary, 0, 5)]);
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].text, "hello");
        assert_eq!(segments[0].active, vec![0]);
    }

    #[test]
    fn test_adjacent_spans_do_not_merge() {
        let text = "abcdef";
        let segments = build_segments(
            text,
            &[
                plain(AnnotationKind::Vocabulary, 0, 3),
                plain(AnnotationKind::Vocabulary, 3, 6),
            ],
        );
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].active, vec![0]);
        assert_eq!(segments[1].active, vec![1]);
    }

    #[test]
    fn test_nested_span_splits_outer() {
        let text = "abcdefgh";
        let segments = build_segments(
            text,
            &[
                plain(AnnotationKind::Grammar, 0, 8),
                plain(AnnotationKind::Vocabulary, 2, 5),
            ],
        );
        let texts: Vec<&str> = segments.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(texts, vec!["ab", "cde", "fgh"]);
        assert_eq!(segments[0].active, vec![0]);
        assert_eq!(segments[1].active, vec![0, 1]);
        assert_eq!(segments[2].active, vec![0]);
    }

    #[test]
    fn test_multibyte_line() {
        let text = "ἡ ὁδός ἐστι";
        let segments = build_segments(text, &[plain(AnnotationKind::Vocabulary, 2, 6)]);
        let texts: Vec<&str> = segments.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(texts, vec!["ἡ ", "ὁδός", " ἐστι"]);
    }

    #[test]
    fn test_empty_line_yields_no_segments() {
        assert!(build_segments("", &[plain(AnnotationKind::Vocabulary, 0, 3)]).is_empty());
        assert!(build_segments("", &[]).is_empty());
    }
}
