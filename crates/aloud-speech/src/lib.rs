//! aloud Speech
//!
//! Paragraph grouping and speakable-text composition for read-aloud
//! features.
//!
//! Given an ordered run of nodes from an [`aloud_tree::TreeSnapshot`], the
//! engine decides which consecutive nodes are spoken as one paragraph,
//! composes the exact text to speak for each node (including synthesized
//! state words for checkboxes and radio buttons), and blanks words scrolled
//! outside a reference rectangle so partially-visible text is not spoken.
//!
//! The engine is a pure, stateless transformation: it never walks or
//! mutates the tree beyond the nodes it is handed, performs no I/O, and
//! holds nothing between calls. [`SpeechBuilder::build_node_group`] is the
//! entry point; the remaining functions are usable on their own.
//!
//! All character offsets (segmenter positions, group offsets, geometry
//! query ranges) count Unicode scalar values (`char`s), never bytes.

mod builder;
mod clip;
mod group;
mod locale;
mod name;

pub use aloud_text::{UnicodeWordSegmenter, WordSegmenter, is_whitespace};
pub use builder::SpeechBuilder;
pub use clip::TextGeometry;
pub use group::{
    NodeGroup, NodeGroupItem, NodePosition, find_inline_text_node_by_character_index,
    find_node_from_group_by_char_index, first_block_ancestor, in_same_paragraph,
    start_char_index_in_parent,
};
pub use locale::{EnglishLocale, Localization, StateMessage};
pub use name::node_name;
