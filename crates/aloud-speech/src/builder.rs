//! Paragraph building
//!
//! The orchestrating state machine: walks a node run from a start index,
//! merges consecutive nodes into one spoken paragraph, and stops at
//! paragraph or language boundaries.

use aloud_text::{WordSegmenter, is_whitespace};
use aloud_tree::{NodeId, Role, TreeSnapshot};

use crate::clip::{self, TextGeometry};
use crate::group::{NodeGroup, NodeGroupItem, first_block_ancestor, in_same_paragraph};
use crate::locale::Localization;
use crate::name::node_name;

/// Paragraph assembly over one tree snapshot.
///
/// Bundles the snapshot with the host collaborators so group building reads
/// as a single call. Holds only borrows and no other state; construct one
/// per invocation or share across calls, as convenient.
pub struct SpeechBuilder<'a> {
    tree: &'a TreeSnapshot,
    locale: &'a dyn Localization,
    segmenter: &'a dyn WordSegmenter,
    geometry: &'a dyn TextGeometry,
}

impl<'a> SpeechBuilder<'a> {
    /// Create a builder over `tree` with the given collaborators
    pub fn new(
        tree: &'a TreeSnapshot,
        locale: &'a dyn Localization,
        segmenter: &'a dyn WordSegmenter,
        geometry: &'a dyn TextGeometry,
    ) -> Self {
        Self { tree, locale, segmenter, geometry }
    }

    /// Speakable text for `item`, with words outside the block parent's
    /// location blanked to equal-length space runs
    pub fn clipped_name(&self, item: &NodeGroupItem, block_parent: Option<NodeId>) -> String {
        clip::clipped_name(self.tree, self.locale, self.segmenter, self.geometry, item, block_parent)
    }

    /// Build the paragraph starting at `nodes[start_index]`.
    ///
    /// Consumes consecutive nodes while they stay in the same paragraph
    /// and, when `split_on_language` is set, in the same detected language
    /// (an undefined language on either side never splits). Inline text
    /// boxes under one static-text parent collapse into a single item.
    /// Whitespace-only nodes contribute no text but do not break the
    /// paragraph. `start_index` must be in bounds.
    pub fn build_node_group(
        &self,
        nodes: &[NodeId],
        start_index: usize,
        split_on_language: bool,
    ) -> NodeGroup {
        debug_assert!(start_index < nodes.len(), "start_index out of bounds");
        tracing::trace!(start_index, split_on_language, "building node group");

        let block_parent = first_block_ancestor(self.tree, nodes[start_index]);
        let mut group = NodeGroup {
            text: String::new(),
            nodes: Vec::new(),
            block_parent,
            end_index: start_index,
            detected_language: None,
        };
        // Char length of group.text, and the static-text parent of the
        // inline text run currently being merged.
        let mut text_len = 0;
        let mut static_text_parent: Option<NodeId> = None;
        let mut current_language: Option<String> = None;
        let mut index = start_index;

        loop {
            let node_id = nodes[index];
            let name = node_name(self.tree, node_id, self.locale);

            if !is_whitespace(&name) {
                if let Some(item) = self.next_item(node_id, text_len, &mut static_text_parent) {
                    let clipped = self.clipped_name(&item, block_parent);
                    text_len += clipped.chars().count() + 1;
                    group.text.push_str(&clipped);
                    group.text.push(' ');
                    group.nodes.push(item);
                }
            }

            if current_language.is_none() {
                current_language =
                    self.tree.get(node_id).and_then(|node| node.detected_language.clone());
            }

            let next = nodes.get(index + 1).copied();
            let language_break = split_on_language
                && current_language.is_some()
                && next
                    .and_then(|id| self.tree.get(id))
                    .and_then(|node| node.detected_language.as_deref())
                    .is_some_and(|next_language| {
                        Some(next_language) != current_language.as_deref()
                    });
            if next.is_none()
                || !in_same_paragraph(self.tree, Some(node_id), next)
                || language_break
            {
                break;
            }
            index += 1;
        }

        if split_on_language && current_language.is_some() {
            group.detected_language = current_language;
        }
        group.end_index = index;
        group
    }

    /// Item to append for `node_id`, or `None` while the active static-text
    /// run already covers it.
    ///
    /// Inline text boxes under a static-text parent are represented once by
    /// an item for the parent, created at first encounter; the parent's
    /// clipped text is computed once at that point. An inline text box under
    /// any other parent (an SVG text run, for instance) and every other node
    /// get a direct item.
    fn next_item(
        &self,
        node_id: NodeId,
        start_char: usize,
        static_text_parent: &mut Option<NodeId>,
    ) -> Option<NodeGroupItem> {
        let parent = self.tree.parent(node_id);
        let is_inline_text =
            self.tree.get(node_id).is_some_and(|node| node.role == Role::InlineTextBox);

        if is_inline_text && parent.is_some() {
            let static_parent = parent
                .filter(|&id| self.tree.get(id).is_some_and(|node| node.role == Role::StaticText));
            if let Some(static_parent) = static_parent {
                if static_text_parent.is_some_and(|active| active != static_parent) {
                    // A new static-text run starts here.
                    *static_text_parent = None;
                }
                if static_text_parent.is_none() {
                    *static_text_parent = Some(static_parent);
                    return Some(NodeGroupItem::new(static_parent, start_char, true));
                }
                return None;
            }
        }
        Some(NodeGroupItem::new(node_id, start_char, false))
    }
}
