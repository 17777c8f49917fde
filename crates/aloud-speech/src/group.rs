//! Paragraph membership and node-group bookkeeping
//!
//! A [`NodeGroup`] is one spoken paragraph: a run of consecutive nodes
//! sharing a block ancestor, with the composed text and per-node offsets
//! into it.

use aloud_tree::{Display, NodeId, Role, TreeSnapshot};

/// One node's contribution to a [`NodeGroup`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeGroupItem {
    /// The node spoken by this item (for a merged inline text run, the
    /// static-text parent)
    pub node: NodeId,
    /// Char offset into the group text where this item's text begins
    pub start_char: usize,
    /// True when this item stands in for the inline text boxes under a
    /// static-text node
    pub has_inline_text: bool,
}

impl NodeGroupItem {
    /// Create an item starting at `start_char`
    pub fn new(node: NodeId, start_char: usize, has_inline_text: bool) -> Self {
        Self { node, start_char, has_inline_text }
    }
}

/// A maximal run of nodes spoken as one unit.
///
/// Short-lived value object: it holds handles into one snapshot and must be
/// rebuilt whenever the underlying tree changes.
#[derive(Debug, Clone)]
pub struct NodeGroup {
    /// Concatenated speakable text, one trailing space per item
    pub text: String,
    /// Items in speaking order
    pub nodes: Vec<NodeGroupItem>,
    /// Shared block ancestor of the grouped nodes
    pub block_parent: Option<NodeId>,
    /// Index into the input slice of the last node consumed
    pub end_index: usize,
    /// First defined language among the consumed nodes, set only when
    /// language splitting was requested
    pub detected_language: Option<String>,
}

/// A node plus a char offset into its own name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodePosition {
    pub node: NodeId,
    pub offset: usize,
}

/// Nearest ancestor that starts a new paragraph.
///
/// Paragraph and SVG-root ancestors always qualify: SVG text layout does not
/// expose meaningful block/inline display values, so an SVG root is a
/// boundary regardless of display. The walk otherwise stops at the first
/// non-inline, non-static-text ancestor whose own parent is not an SVG root,
/// or at the tree root. A parentless node has no block ancestor.
pub fn first_block_ancestor(tree: &TreeSnapshot, node: NodeId) -> Option<NodeId> {
    let mut current = tree.parent(node);
    while let Some(id) = current {
        let ancestor = tree.get(id)?;
        if ancestor.parent().is_none() {
            return Some(id);
        }
        if matches!(ancestor.role, Role::Paragraph | Role::SvgRoot) {
            return Some(id);
        }
        let parent_is_svg_root = ancestor
            .parent()
            .and_then(|parent| tree.get(parent))
            .is_some_and(|parent| parent.role == Role::SvgRoot);
        if ancestor.display.is_some_and(|display| display != Display::Inline)
            && ancestor.role != Role::StaticText
            && !parent_is_svg_root
        {
            return Some(id);
        }
        current = ancestor.parent();
    }
    None
}

/// Whether two nodes are spoken in the same paragraph.
///
/// A genuine block-level element never groups with a neighbor; otherwise
/// two nodes group iff they share the same first block ancestor.
pub fn in_same_paragraph(tree: &TreeSnapshot, a: Option<NodeId>, b: Option<NodeId>) -> bool {
    let (Some(a), Some(b)) = (a, b) else {
        return false;
    };
    if is_standalone_block(tree, a) || is_standalone_block(tree, b) {
        return false;
    }
    match (first_block_ancestor(tree, a), first_block_ancestor(tree, b)) {
        (Some(left), Some(right)) => left == right,
        _ => false,
    }
}

fn is_standalone_block(tree: &TreeSnapshot, id: NodeId) -> bool {
    tree.get(id).is_some_and(|node| {
        matches!(node.display, Some(Display::Block | Display::InlineBlock)) && !node.role.is_text()
    })
}

/// Char offset of an inline text box within its static-text parent's name:
/// the summed name lengths of the preceding siblings.
pub fn start_char_index_in_parent(tree: &TreeSnapshot, inline_text: NodeId) -> usize {
    let Some(node) = tree.get(inline_text) else {
        return 0;
    };
    let Some(parent) = node.parent() else {
        return 0;
    };
    tree.children(parent)[..node.index_in_parent()]
        .iter()
        .map(|&sibling| name_len(tree, sibling))
        .sum()
}

/// Inline text box of `static_text` whose name contains char `index`.
///
/// An index past the total name length falls back to the last child; a node
/// with no children yields `None`.
pub fn find_inline_text_node_by_character_index(
    tree: &TreeSnapshot,
    static_text: NodeId,
    index: usize,
) -> Option<NodeId> {
    let children = tree.children(static_text);
    let mut end = 0;
    for &child in children {
        end += name_len(tree, child);
        if index < end {
            return Some(child);
        }
    }
    children.last().copied()
}

/// Node speaking the character at `char_index` of `group.text`.
///
/// Separator spaces and indexes past the group text belong to no node. For
/// a merged inline text run the position names the inline text box itself,
/// with the offset local to that box.
pub fn find_node_from_group_by_char_index(
    tree: &TreeSnapshot,
    group: &NodeGroup,
    char_index: usize,
) -> Option<NodePosition> {
    let total = group.text.chars().count();
    for (i, item) in group.nodes.iter().enumerate() {
        // Each item contributes its name followed by one separator space,
        // so its name ends one char before the next item (or the text end).
        let name_end = match group.nodes.get(i + 1) {
            Some(next) => next.start_char,
            None => total,
        }
        .saturating_sub(1);
        if char_index < item.start_char || char_index >= name_end {
            continue;
        }
        let local = char_index - item.start_char;
        if item.has_inline_text {
            let inline = find_inline_text_node_by_character_index(tree, item.node, local)?;
            return Some(NodePosition {
                node: inline,
                offset: local - start_char_index_in_parent(tree, inline),
            });
        }
        return Some(NodePosition { node: item.node, offset: local });
    }
    None
}

fn name_len(tree: &TreeSnapshot, id: NodeId) -> usize {
    tree.get(id)
        .and_then(|node| node.name.as_deref())
        .map(|name| name.chars().count())
        .unwrap_or(0)
}
