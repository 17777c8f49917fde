//! Spoken state words
//!
//! Checkable controls are spoken with a synthesized state word after their
//! name. The words come from a host localization table keyed by a closed
//! message set.

use aloud_tree::{Role, TriState};

/// Message key for a synthesized state word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateMessage {
    CheckboxChecked,
    CheckboxPartiallyChecked,
    CheckboxUnchecked,
    RadioSelected,
    RadioPartiallySelected,
    RadioUnselected,
}

impl StateMessage {
    /// Key for a checkable control's current state, `None` for other roles.
    ///
    /// An absent checked state is spoken as unchecked/unselected.
    pub fn for_control(role: Role, checked: Option<TriState>) -> Option<Self> {
        if role.is_checkbox() {
            Some(match checked {
                Some(TriState::True) => Self::CheckboxChecked,
                Some(TriState::Mixed) => Self::CheckboxPartiallyChecked,
                _ => Self::CheckboxUnchecked,
            })
        } else if role.is_radio() {
            Some(match checked {
                Some(TriState::True) => Self::RadioSelected,
                Some(TriState::Mixed) => Self::RadioPartiallySelected,
                _ => Self::RadioUnselected,
            })
        } else {
            None
        }
    }
}

/// Host localization table for synthesized state words
pub trait Localization {
    /// The spoken word(s) for a state message
    fn state_message(&self, message: StateMessage) -> String;
}

/// Built-in English state words
#[derive(Debug, Default, Clone, Copy)]
pub struct EnglishLocale;

impl Localization for EnglishLocale {
    fn state_message(&self, message: StateMessage) -> String {
        match message {
            StateMessage::CheckboxChecked => "checked",
            StateMessage::CheckboxPartiallyChecked => "partially checked",
            StateMessage::CheckboxUnchecked => "unchecked",
            StateMessage::RadioSelected => "selected",
            StateMessage::RadioPartiallySelected => "partially selected",
            StateMessage::RadioUnselected => "unselected",
        }
        .to_string()
    }
}
