//! Speakable node names
//!
//! Renders the text spoken for a single node, including the synthesized
//! state word for checkable controls.

use aloud_text::is_whitespace;
use aloud_tree::{NodeId, Role, TreeSnapshot};

use crate::locale::{Localization, StateMessage};

/// Speakable text for one node.
///
/// Native text inputs report their content as a value rather than a name;
/// checkable controls get a state word appended. Everything else speaks its
/// accessible name, or nothing.
pub fn node_name(tree: &TreeSnapshot, id: NodeId, locale: &dyn Localization) -> String {
    let Some(node) = tree.get(id) else {
        return String::new();
    };

    if node.role == Role::TextField
        && node.children().is_empty()
        && node.value.as_deref().is_some_and(|value| !value.is_empty())
    {
        return node.value.clone().unwrap_or_default();
    }

    if let Some(message) = StateMessage::for_control(node.role, node.checked) {
        let state_word = locale.state_message(message);
        return match node.name.as_deref() {
            Some(name) if !is_whitespace(name) => format!("{name} {state_word}"),
            _ => state_word,
        };
    }

    node.name.clone().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::EnglishLocale;
    use aloud_tree::{AccessibleNode, TriState};

    #[test]
    fn test_plain_name() {
        let mut tree = TreeSnapshot::new();
        let text = tree
            .push(AccessibleNode::new(Role::StaticText).with_name("Hello, world"))
            .unwrap();
        let unnamed = tree.push(AccessibleNode::new(Role::GenericContainer)).unwrap();

        assert_eq!(node_name(&tree, text, &EnglishLocale), "Hello, world");
        assert_eq!(node_name(&tree, unnamed, &EnglishLocale), "");
    }

    #[test]
    fn test_text_field_speaks_value() {
        let mut tree = TreeSnapshot::new();
        let field = tree
            .push(AccessibleNode::new(Role::TextField).with_name("Search").with_value("query"))
            .unwrap();

        assert_eq!(node_name(&tree, field, &EnglishLocale), "query");
    }

    #[test]
    fn test_text_field_with_children_keeps_name() {
        let mut tree = TreeSnapshot::new();
        let field = tree
            .push(AccessibleNode::new(Role::TextField).with_name("Search").with_value("query"))
            .unwrap();
        tree.push(AccessibleNode::new(Role::StaticText).with_name("query").with_parent(field))
            .unwrap();

        assert_eq!(node_name(&tree, field, &EnglishLocale), "Search");
    }

    #[test]
    fn test_text_field_empty_value_keeps_name() {
        let mut tree = TreeSnapshot::new();
        let field = tree
            .push(AccessibleNode::new(Role::TextField).with_name("Search").with_value(""))
            .unwrap();

        assert_eq!(node_name(&tree, field, &EnglishLocale), "Search");
    }

    #[test]
    fn test_checkbox_states() {
        let mut tree = TreeSnapshot::new();
        let checked = tree
            .push(
                AccessibleNode::new(Role::CheckBox)
                    .with_name("Subscribe")
                    .with_checked(TriState::True),
            )
            .unwrap();
        let mixed = tree
            .push(
                AccessibleNode::new(Role::MenuItemCheckBox)
                    .with_name("Bold")
                    .with_checked(TriState::Mixed),
            )
            .unwrap();
        let unchecked = tree.push(AccessibleNode::new(Role::CheckBox).with_name("Spam")).unwrap();

        assert_eq!(node_name(&tree, checked, &EnglishLocale), "Subscribe checked");
        assert_eq!(node_name(&tree, mixed, &EnglishLocale), "Bold partially checked");
        assert_eq!(node_name(&tree, unchecked, &EnglishLocale), "Spam unchecked");
    }

    #[test]
    fn test_nameless_checkbox_speaks_state_alone() {
        let mut tree = TreeSnapshot::new();
        let bare = tree
            .push(AccessibleNode::new(Role::CheckBox).with_checked(TriState::True))
            .unwrap();
        let blank = tree
            .push(AccessibleNode::new(Role::CheckBox).with_name("  \n"))
            .unwrap();

        assert_eq!(node_name(&tree, bare, &EnglishLocale), "checked");
        assert_eq!(node_name(&tree, blank, &EnglishLocale), "unchecked");
    }

    #[test]
    fn test_radio_states() {
        let mut tree = TreeSnapshot::new();
        let selected = tree
            .push(
                AccessibleNode::new(Role::RadioButton)
                    .with_name("Medium")
                    .with_checked(TriState::True),
            )
            .unwrap();
        let unselected = tree
            .push(
                AccessibleNode::new(Role::MenuItemRadio)
                    .with_name("Large")
                    .with_checked(TriState::False),
            )
            .unwrap();

        assert_eq!(node_name(&tree, selected, &EnglishLocale), "Medium selected");
        assert_eq!(node_name(&tree, unselected, &EnglishLocale), "Large unselected");
    }
}
