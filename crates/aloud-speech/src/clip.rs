//! Overflow clipping
//!
//! Words scrolled outside the readable viewport are replaced by equal-length
//! runs of spaces, so downstream offset math stays valid while the words go
//! unspoken.

use aloud_text::WordSegmenter;
use aloud_tree::{NodeId, Rect, TreeSnapshot};

use crate::group::{
    NodeGroupItem, find_inline_text_node_by_character_index, start_char_index_in_parent,
};
use crate::locale::Localization;
use crate::name::node_name;

/// Bounding rectangles for rendered character ranges.
///
/// Must answer synchronously with exactly one rect per call; an adapter over
/// a callback-based host API presents an already-available geometry
/// snapshot. When no better answer exists, return the node's own bounds;
/// the word is then never clipped.
pub trait TextGeometry {
    /// Bounding rect of chars `[start, end)` of `node`'s rendered text
    fn bounds_for_range(&self, node: NodeId, start: usize, end: usize) -> Rect;
}

/// Speakable text for `item` with out-of-view words blanked.
///
/// Without a reference rect (no block parent, or none with a location) the
/// name passes through unchanged. A node entirely outside the reference
/// rect becomes an all-space string of the same char length. Anything in
/// between is scanned word by word.
pub(crate) fn clipped_name(
    tree: &TreeSnapshot,
    locale: &dyn Localization,
    segmenter: &dyn WordSegmenter,
    geometry: &dyn TextGeometry,
    item: &NodeGroupItem,
    block_parent: Option<NodeId>,
) -> String {
    let unclipped = node_name(tree, item.node, locale);

    let Some(bounds) = block_parent.and_then(|id| tree.get(id)).and_then(|node| node.location)
    else {
        return unclipped;
    };
    let Some(node_bounds) = tree.get(item.node).and_then(|node| node.unclipped_location) else {
        return unclipped;
    };

    if bounds.contains(&node_bounds) {
        return unclipped;
    }
    let len = unclipped.chars().count();
    if !node_bounds.intersects(&bounds) {
        return " ".repeat(len);
    }

    // Partially visible: keep only words whose own rect touches the
    // reference rect. The buffer is spliced in place; its char length never
    // changes.
    let mut buffer: Vec<char> = unclipped.chars().collect();
    let mut cursor = 0;
    while cursor < len {
        let start = segmenter.word_start(&unclipped, cursor);
        if start >= len {
            break;
        }
        let end = segmenter.word_end(&unclipped, start);
        debug_assert!(end > start, "word segmenter must make progress");
        let word_bounds = word_bounds(tree, geometry, item, start, end);
        if !word_bounds.intersects(&bounds) {
            for slot in &mut buffer[start..end] {
                *slot = ' ';
            }
        }
        cursor = end;
    }
    buffer.into_iter().collect()
}

/// Rect for one word, resolving a merged inline text run to the inline
/// child that renders the word (with offsets local to that child).
fn word_bounds(
    tree: &TreeSnapshot,
    geometry: &dyn TextGeometry,
    item: &NodeGroupItem,
    start: usize,
    end: usize,
) -> Rect {
    if item.has_inline_text {
        if let Some(inline) = find_inline_text_node_by_character_index(tree, item.node, start) {
            let base = start_char_index_in_parent(tree, inline);
            return geometry.bounds_for_range(
                inline,
                start.saturating_sub(base),
                end.saturating_sub(base),
            );
        }
    }
    geometry.bounds_for_range(item.node, start, end)
}
