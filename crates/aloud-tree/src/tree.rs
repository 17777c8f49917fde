//! Tree snapshots (arena-based allocation)

use std::ops::Index;

use crate::{AccessibleNode, NodeId};

/// Snapshot construction error
#[derive(Debug, thiserror::Error)]
pub enum TreeError {
    #[error("parent node {0} is not in this snapshot")]
    ParentOutOfRange(usize),
}

/// Arena-based immutable view of an accessibility tree.
///
/// Nodes are pushed parent-first, which makes cycles unrepresentable.
/// Several parentless nodes may coexist: desktop trees are forests.
#[derive(Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TreeSnapshot {
    nodes: Vec<AccessibleNode>,
}

impl TreeSnapshot {
    /// Create an empty snapshot
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Add a node; its declared parent (if any) must already be present.
    ///
    /// Wires the parent's child list and the node's `index_in_parent`.
    pub fn push(&mut self, mut node: AccessibleNode) -> Result<NodeId, TreeError> {
        let id = NodeId(self.nodes.len() as u32);
        if let Some(parent) = node.parent {
            let Some(parent_node) = self.nodes.get_mut(parent.index()) else {
                return Err(TreeError::ParentOutOfRange(parent.index()));
            };
            node.index_in_parent = parent_node.children.len();
            parent_node.children.push(id);
        }
        self.nodes.push(node);
        Ok(id)
    }

    /// Get a node by ID
    pub fn get(&self, id: NodeId) -> Option<&AccessibleNode> {
        self.nodes.get(id.index())
    }

    /// Parent handle of `id`, `None` for roots
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|node| node.parent)
    }

    /// Child handles of `id` in document order
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.get(id).map(|node| node.children.as_slice()).unwrap_or(&[])
    }

    /// Number of nodes in the snapshot
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if snapshot is empty
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl Index<NodeId> for TreeSnapshot {
    type Output = AccessibleNode;

    fn index(&self, id: NodeId) -> &AccessibleNode {
        &self.nodes[id.index()]
    }
}
