//! Renderers module for the annotation engine
//!
//! Two rendering targets consume the segment builder's output: a display
//! list for the virtual-DOM reader/admin views, and an HTML string for
//! server-rendered reader pages. Neither re-derives any range math.

pub mod html;
pub mod segment_list;

// Re-export commonly used types
pub use html::render_line_html;
pub use segment_list::{render_line, render_segments, LineDisplayList, RenderSegment};
