//! Error taxonomy for the annotation engine
//!
//! The render path never fails on bad annotation data (malformed spans are
//! dropped at ingestion), so these errors only surface from the write-side
//! operations: span validation for new annotations and the interaction
//! session state machine.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnnotationError {
    #[error("empty span: start {start} >= end {end}")]
    EmptySpan { start: usize, end: usize },

    #[error("span [{start}, {end}) out of bounds for line of length {len}")]
    OutOfRange { start: usize, end: usize, len: usize },
}

/// Validate a span for a new annotation before it is drafted.
///
/// Unlike render-path sanitization this rejects instead of clamping: a
/// selection that resolved outside the line indicates a stale DOM, and
/// silently clamping it would annotate the wrong text.
pub fn validate_span(start: usize, end: usize, line_len: usize) -> Result<(), AnnotationError> {
    if start >= end {
        return Err(AnnotationError::EmptySpan { start, end });
    }
    if end > line_len {
        return Err(AnnotationError::OutOfRange {
            start,
            end,
            len: line_len,
        });
    }
    Ok(())
}
