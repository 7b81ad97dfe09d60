//! Story Annotation Engine WASM API
//!
//! This module provides the JavaScript-facing API for the annotation
//! engine. It includes shared utilities for serialization, validation,
//! error handling, and logging, as well as the API functions organized by
//! functional domain.
//!
//! # Module Structure
//!
//! - `helpers`: serialization, validation, logging, and the session mutex
//! - `segments`: segment building and line rendering operations
//! - `selection`: selection-to-offset resolution
//! - `session`: the annotation interaction session (begin/draft/commit)

pub mod helpers;
pub mod segments;
pub mod selection;
pub mod session;

// Re-export all public functions so JS bindings live in one place
pub use segments::{build_segments_js, highlight_line_html, render_line_js, render_segments_js};
pub use selection::resolve_selection;
pub use session::{
    annotation_state, begin_annotation, cancel_annotation, commit_annotation, draft_annotation,
};
