//! Selection-to-offset resolution
//!
//! The segment builder fragments a line into multiple text-bearing nodes,
//! so a browser selection's endpoints can land in different fragments.
//! `walk` maps (fragment, offset) endpoint pairs back to absolute char
//! offsets into the original line; `dom` feeds it from the live browser
//! selection.

pub mod dom;
pub mod walk;

pub use dom::resolve_selection_offsets;
pub use walk::FragmentWalk;
