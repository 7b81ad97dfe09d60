//! DOM adapter for the selection resolver
//!
//! Reads the live browser selection and walks the annotatable container's
//! text leaves in document order, then delegates the offset math to
//! `FragmentWalk`. Best-effort throughout: any absent or foreign selection
//! state resolves to `None`, never an error.

use web_sys::{Element, Node};

use super::walk::FragmentWalk;

/// Resolve the current browser selection to absolute char offsets into the
/// line rendered inside `container`.
///
/// Returns `None` when there is no selection, the selection is collapsed,
/// or either endpoint lies outside `container`.
pub fn resolve_selection_offsets(container: &Element) -> Option<(usize, usize)> {
    let selection = web_sys::window()?.get_selection().ok()??;
    if selection.is_collapsed() || selection.range_count() == 0 {
        return None;
    }
    let range = selection.get_range_at(0).ok()?;

    let start_node = range.start_container().ok()?;
    let end_node = range.end_container().ok()?;
    let start_offset = range.start_offset().ok()? as usize;
    let end_offset = range.end_offset().ok()? as usize;

    let mut leaves = TextLeaves::default();
    leaves.collect(container.as_ref(), &start_node, &end_node);

    let walk = FragmentWalk::from_lengths(leaves.lengths);
    walk.resolve(leaves.start_leaf?, start_offset, leaves.end_leaf?, end_offset)
}

/// Text leaves of the container in document order, with the positions of
/// the selection's endpoint nodes among them
#[derive(Default)]
struct TextLeaves {
    lengths: Vec<usize>,
    start_leaf: Option<usize>,
    end_leaf: Option<usize>,
}

impl TextLeaves {
    fn collect(&mut self, node: &Node, start_node: &Node, end_node: &Node) {
        if node.node_type() == Node::TEXT_NODE {
            let index = self.lengths.len();
            let text = node.text_content().unwrap_or_default();
            self.lengths.push(text.chars().count());

            if node.is_same_node(Some(start_node)) {
                self.start_leaf = Some(index);
            }
            if node.is_same_node(Some(end_node)) {
                self.end_leaf = Some(index);
            }
            return;
        }

        // Non-text leaves (inline form controls etc.) contribute nothing
        let children = node.child_nodes();
        for i in 0..children.length() {
            if let Some(child) = children.item(i) {
                self.collect(&child, start_node, end_node);
            }
        }
    }
}
