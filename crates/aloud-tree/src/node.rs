//! Accessibility node records
//!
//! Roles, display values, tri-state checked values, and the per-node data
//! record stored in a snapshot.

use crate::{NodeId, Rect};

/// Accessibility role
///
/// Closed set: a new role forces a decision at every exhaustive match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Role {
    Button,
    CheckBox,
    GenericContainer,
    Heading,
    Image,
    InlineTextBox,
    Link,
    ListItem,
    MenuItem,
    MenuItemCheckBox,
    MenuItemRadio,
    Paragraph,
    RadioButton,
    RootWebArea,
    StaticText,
    SvgRoot,
    TextField,
    Window,
    /// Any role the engine has no special handling for
    Unknown,
}

impl Role {
    /// Check if role is a checkbox-like control
    pub fn is_checkbox(self) -> bool {
        matches!(self, Self::CheckBox | Self::MenuItemCheckBox)
    }

    /// Check if role is a radio-button-like control
    pub fn is_radio(self) -> bool {
        matches!(self, Self::RadioButton | Self::MenuItemRadio)
    }

    /// Check if role renders text content directly
    pub fn is_text(self) -> bool {
        matches!(self, Self::StaticText | Self::InlineTextBox)
    }
}

/// CSS display value exposed on a node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Display {
    Block,
    Inline,
    InlineBlock,
}

/// Tri-state value (true/false/mixed)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TriState {
    True,
    False,
    Mixed,
}

/// Accessibility node record
///
/// Tree linkage (`parent`, `children`, `index_in_parent`) is owned by the
/// snapshot: `parent` is declared at construction and the rest is wired by
/// [`TreeSnapshot::push`](crate::TreeSnapshot::push).
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AccessibleNode {
    /// Accessibility role
    pub role: Role,
    /// Accessible name
    pub name: Option<String>,
    /// Control value (text inputs report content here, not in `name`)
    pub value: Option<String>,
    /// CSS display, when the host exposes one
    pub display: Option<Display>,
    /// Checked state for checkable controls
    pub checked: Option<TriState>,
    /// On-screen bounds, clipped to the viewport
    pub location: Option<Rect>,
    /// Layout bounds, ignoring viewport clipping
    pub unclipped_location: Option<Rect>,
    /// BCP-47 language tag detected for this node's text
    pub detected_language: Option<String>,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    pub(crate) index_in_parent: usize,
}

impl AccessibleNode {
    pub fn new(role: Role) -> Self {
        Self {
            role,
            name: None,
            value: None,
            display: None,
            checked: None,
            location: None,
            unclipped_location: None,
            detected_language: None,
            parent: None,
            children: Vec::new(),
            index_in_parent: 0,
        }
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn with_value(mut self, value: &str) -> Self {
        self.value = Some(value.to_string());
        self
    }

    pub fn with_parent(mut self, parent: NodeId) -> Self {
        self.parent = Some(parent);
        self
    }

    pub fn with_display(mut self, display: Display) -> Self {
        self.display = Some(display);
        self
    }

    pub fn with_checked(mut self, checked: TriState) -> Self {
        self.checked = Some(checked);
        self
    }

    pub fn with_location(mut self, location: Rect) -> Self {
        self.location = Some(location);
        self
    }

    pub fn with_unclipped_location(mut self, location: Rect) -> Self {
        self.unclipped_location = Some(location);
        self
    }

    pub fn with_language(mut self, tag: &str) -> Self {
        self.detected_language = Some(tag.to_string());
        self
    }

    /// Parent handle, `None` for a root
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Child handles in document order
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Position among the parent's children
    pub fn index_in_parent(&self) -> usize {
        self.index_in_parent
    }
}
