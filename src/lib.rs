//! Story Annotation Engine WASM Module
//!
//! This is the WASM module backing the story platform's annotated-text
//! views. It computes per-line segment lists from vocabulary/grammar/
//! footnote annotations and resolves browser selections back to character
//! offsets so the admin tool can create new annotations.

pub mod models;
pub mod segmenter;
pub mod renderers;
pub mod selection;
pub mod session;
pub mod api;

// Re-export commonly used types
pub use models::annotation::{Annotation, AnnotationKind, AnnotationPayload};
pub use models::story::*;
pub use segmenter::{build_segments, Segment};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Debug).expect("failed to initialize logger");

    log::info!("Story annotation engine WASM module initialized");
}
