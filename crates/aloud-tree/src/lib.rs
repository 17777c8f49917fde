//! aloud Tree
//!
//! Read-only accessibility tree snapshots.
//!
//! A snapshot is an arena of [`AccessibleNode`] records addressed by
//! [`NodeId`] handles. Handles stay valid for the snapshot's lifetime, and
//! node identity is handle equality. Snapshots are built once by the host
//! and never mutated afterwards; they must be rebuilt whenever the
//! underlying accessibility tree changes.

mod geometry;
mod node;
mod tree;

pub use geometry::Rect;
pub use node::{AccessibleNode, Display, Role, TriState};
pub use tree::{TreeError, TreeSnapshot};

/// Node identifier (index into a snapshot arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Arena index of this handle
    pub fn index(self) -> usize {
        self.0 as usize
    }
}
