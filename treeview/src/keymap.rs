//! Keyboard bindings for tree actions.
//!
//! Defaults follow the WAI-ARIA tree view pattern. Any action can be bound to
//! several key combos, and a host can replace a list to rebind it.

use serde::{Deserialize, Serialize};

use crate::key::{Key, KeyCombo};

/// Something a key can ask the tree to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TreeAction {
    /// Toggle the focused node's input, or its selection when it has none.
    Activate,
    /// Toggle the focused node's selection.
    Select,
    /// Focus the first visible node.
    FocusFirst,
    /// Focus the last visible node.
    FocusLast,
    /// Focus the previous visible node.
    FocusPrevious,
    /// Focus the next visible node.
    FocusNext,
    /// Expand the focused node, or step into it when already expanded.
    Expand,
    /// Collapse the focused node, or step out to its parent.
    Collapse,
}

/// Key combos bound to each [`TreeAction`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AriaKeyMap {
    pub activate: Vec<KeyCombo>,
    pub select: Vec<KeyCombo>,
    pub focus_first: Vec<KeyCombo>,
    pub focus_last: Vec<KeyCombo>,
    pub focus_previous: Vec<KeyCombo>,
    pub focus_next: Vec<KeyCombo>,
    pub expand: Vec<KeyCombo>,
    pub collapse: Vec<KeyCombo>,
}

impl Default for AriaKeyMap {
    fn default() -> Self {
        Self {
            activate: vec![KeyCombo::key(Key::Space)],
            select: vec![KeyCombo::key(Key::Enter)],
            focus_first: vec![KeyCombo::key(Key::Home)],
            focus_last: vec![KeyCombo::key(Key::End)],
            focus_previous: vec![KeyCombo::key(Key::Up)],
            focus_next: vec![KeyCombo::key(Key::Down)],
            expand: vec![KeyCombo::key(Key::Right)],
            collapse: vec![KeyCombo::key(Key::Left)],
        }
    }
}

impl AriaKeyMap {
    /// Look up the action bound to `combo`. When a combo is bound more than
    /// once, the first action in declaration order wins.
    pub fn action_for(&self, combo: &KeyCombo) -> Option<TreeAction> {
        self.bindings()
            .into_iter()
            .find(|(_, combos)| combos.contains(combo))
            .map(|(action, _)| action)
    }

    /// Key combos bound to `action`.
    pub fn combos_for(&self, action: TreeAction) -> &[KeyCombo] {
        match action {
            TreeAction::Activate => &self.activate,
            TreeAction::Select => &self.select,
            TreeAction::FocusFirst => &self.focus_first,
            TreeAction::FocusLast => &self.focus_last,
            TreeAction::FocusPrevious => &self.focus_previous,
            TreeAction::FocusNext => &self.focus_next,
            TreeAction::Expand => &self.expand,
            TreeAction::Collapse => &self.collapse,
        }
    }

    /// Bind an additional key combo to `action`.
    pub fn bind(&mut self, action: TreeAction, combo: KeyCombo) {
        let combos = match action {
            TreeAction::Activate => &mut self.activate,
            TreeAction::Select => &mut self.select,
            TreeAction::FocusFirst => &mut self.focus_first,
            TreeAction::FocusLast => &mut self.focus_last,
            TreeAction::FocusPrevious => &mut self.focus_previous,
            TreeAction::FocusNext => &mut self.focus_next,
            TreeAction::Expand => &mut self.expand,
            TreeAction::Collapse => &mut self.collapse,
        };
        if !combos.contains(&combo) {
            combos.push(combo);
        }
    }

    fn bindings(&self) -> [(TreeAction, &[KeyCombo]); 8] {
        [
            (TreeAction::Activate, self.activate.as_slice()),
            (TreeAction::Select, self.select.as_slice()),
            (TreeAction::FocusFirst, self.focus_first.as_slice()),
            (TreeAction::FocusLast, self.focus_last.as_slice()),
            (TreeAction::FocusPrevious, self.focus_previous.as_slice()),
            (TreeAction::FocusNext, self.focus_next.as_slice()),
            (TreeAction::Expand, self.expand.as_slice()),
            (TreeAction::Collapse, self.collapse.as_slice()),
        ]
    }
}
