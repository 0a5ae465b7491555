//! Keyboard handling for the tree view.

use crossterm::event::{KeyEvent, KeyEventKind};
use log::trace;

use crate::events::EventResult;
use crate::key::KeyCombo;
use crate::keymap::TreeAction;
use crate::node::NodeInput;

use super::TreeView;

impl TreeView {
    /// Handle a key press while the tree has focus.
    ///
    /// Keys bound in the key map run their action. The key is consumed only
    /// when the action changed something.
    pub fn on_key(&mut self, key: &KeyCombo) -> EventResult {
        let Some(action) = self.config.key_map.action_for(key) else {
            return EventResult::Ignored;
        };
        trace!("key {:?} -> {:?}", key, action);
        if self.perform(action) {
            EventResult::Consumed
        } else {
            EventResult::Ignored
        }
    }

    /// Handle a raw crossterm key event. Releases are ignored.
    pub fn on_key_event(&mut self, event: KeyEvent) -> EventResult {
        if event.kind == KeyEventKind::Release {
            return EventResult::Ignored;
        }
        self.on_key(&KeyCombo::from(event))
    }

    /// Run a tree action against the focus target. Returns whether anything
    /// changed.
    pub fn perform(&mut self, action: TreeAction) -> bool {
        match action {
            TreeAction::FocusFirst => self.focus_first(),
            TreeAction::FocusLast => self.focus_last(),
            TreeAction::FocusPrevious => self.focus_previous(),
            TreeAction::FocusNext => self.focus_next(false),
            TreeAction::Expand => self.expand_or_enter(),
            TreeAction::Collapse => self.collapse_or_leave(),
            TreeAction::Select => match self.focused.clone() {
                Some(key) => self.toggle_selected(&key),
                None => false,
            },
            TreeAction::Activate => self.activate(),
        }
    }

    /// Expand the focus target, or step into its first child when it is
    /// already expanded.
    fn expand_or_enter(&mut self) -> bool {
        let Some(key) = self.focused.clone() else {
            return false;
        };
        let Some(node) = self.node(&key) else {
            return false;
        };
        if !node.is_expandable() {
            return false;
        }
        if node.is_expanded() {
            self.focus_next(false)
        } else {
            self.expand(&key)
        }
    }

    /// Collapse the focus target, or step out to its parent when it is
    /// already collapsed.
    fn collapse_or_leave(&mut self) -> bool {
        let Some(key) = self.focused.clone() else {
            return false;
        };
        let Some(node) = self.node(&key) else {
            return false;
        };
        if node.is_expandable() && node.is_expanded() {
            self.collapse(&key)
        } else {
            self.focus_parent()
        }
    }

    /// Use the focus target's input, or toggle its selection when it has none.
    fn activate(&mut self) -> bool {
        let Some(key) = self.focused.clone() else {
            return false;
        };
        let input = self.node(&key).and_then(|node| node.spec.input.clone());
        match input {
            Some(NodeInput::Checkbox) => self.toggle_checkbox(&key).is_some(),
            Some(NodeInput::RadioButton { .. }) => self.choose_radio(&key),
            None => self.toggle_selected(&key),
        }
    }
}
