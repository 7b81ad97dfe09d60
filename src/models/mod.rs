//! Models module for the story annotation engine
//!
//! This module contains the data models shared between the segmenter,
//! the renderers, and the WASM API layer.

pub mod annotation;
pub mod error;
pub mod story;

// Re-export commonly used types
pub use annotation::*;
pub use error::*;
pub use story::*;
