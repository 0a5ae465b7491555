//! Tree-wide selection rules.

use std::ops::ControlFlow;

use log::debug;

use crate::events::TreeEvent;
use crate::node::{NodeKey, TreeNode};
use crate::traversal;

use super::SelectionMode;

/// Keeps the tree's selection consistent with its [`SelectionMode`].
///
/// Enforcement passes walk the visible tree only. They never produce events;
/// only [`handle_node_selected_change`](Self::handle_node_selected_change)
/// does.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionCoordinator {
    mode: SelectionMode,
}

impl SelectionCoordinator {
    /// Create a coordinator for `mode`. Nothing is enforced until
    /// [`enforce`](Self::enforce) or [`set_mode`](Self::set_mode) runs.
    pub fn new(mode: SelectionMode) -> Self {
        Self { mode }
    }

    /// The active mode.
    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    /// Switch modes and enforce the new mode against the current tree.
    ///
    /// Setting the mode already in effect does nothing. Returns whether the
    /// mode changed.
    pub fn set_mode(
        &mut self,
        nodes: &mut [TreeNode],
        mode: SelectionMode,
        focused: Option<&NodeKey>,
    ) -> bool {
        if self.mode == mode {
            return false;
        }
        debug!("selection mode {:?} -> {:?}", self.mode, mode);
        self.mode = mode;
        self.enforce(nodes, focused);
        true
    }

    /// Enforce the active mode's invariants.
    ///
    /// Multiple and None leave stored flags alone.
    pub fn enforce(&self, nodes: &mut [TreeNode], focused: Option<&NodeKey>) {
        match self.mode {
            SelectionMode::Single => enforce_single(nodes),
            SelectionMode::SelectionFollowsFocus => enforce_follows_focus(nodes, focused),
            SelectionMode::Multiple | SelectionMode::None => {}
        }
    }

    /// React to a new focus target. Only SelectionFollowsFocus cares.
    pub fn on_focus_change(&self, nodes: &mut [TreeNode], focused: &NodeKey) {
        if self.mode == SelectionMode::SelectionFollowsFocus {
            exclusively_select(nodes, focused);
        }
    }

    /// Entry point for user-driven selection edits on the node `key`.
    ///
    /// In Single mode a node that is now selected becomes the only selected
    /// node. Every mode reports the edit as a `SelectedChange` event; `None`
    /// means `key` is not in the tree.
    pub fn handle_node_selected_change(
        &self,
        nodes: &mut [TreeNode],
        key: &NodeKey,
    ) -> Option<TreeEvent> {
        let path = traversal::find_path(nodes, key)?;
        let selected = traversal::node_at(nodes, &path)?.is_selected();
        if self.mode == SelectionMode::Single && selected {
            exclusively_select(nodes, key);
        }
        Some(TreeEvent::SelectedChange {
            key: key.clone(),
            selected,
        })
    }

    /// Value for the tree's `aria-multiselectable` attribute, or `None` to
    /// omit it.
    pub fn aria_multiselectable(&self) -> Option<bool> {
        match self.mode {
            SelectionMode::None => None,
            mode => Some(mode == SelectionMode::Multiple),
        }
    }
}

/// Keep the first selected node in depth-first order and deselect the rest.
pub fn enforce_single(nodes: &mut [TreeNode]) {
    let mut found = false;
    let _ = traversal::depth_first_traverse_mut(nodes, |node| {
        if node.is_selected() {
            if found {
                node.deselect();
            } else {
                found = true;
            }
        }
        ControlFlow::Continue(())
    });
}

/// Select the focused node (when selectable) and deselect everything else.
pub fn enforce_follows_focus(nodes: &mut [TreeNode], focused: Option<&NodeKey>) {
    let _ = traversal::depth_first_traverse_mut(nodes, |node| {
        let is_focus = focused.is_some_and(|key| node.has_key(key));
        if is_focus {
            if node.is_selectable() {
                node.select();
            }
        } else if node.is_selected() {
            node.deselect();
        }
        ControlFlow::Continue(())
    });
}

/// Make `target` the selected node.
///
/// The target is selected if it is selectable. Then a single depth-first pass
/// deselects the first other selected node it meets and stops there: outside
/// of enforcement passes there is at most one such node.
pub fn exclusively_select(nodes: &mut [TreeNode], target: &NodeKey) {
    if let Some(path) = traversal::find_path(nodes, target)
        && let Some(node) = traversal::node_at_mut(nodes, &path)
        && node.is_selectable()
    {
        node.select();
    }
    let _ = traversal::depth_first_traverse_mut(nodes, |node| {
        if node.is_selected() && !node.has_key(target) {
            node.deselect();
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    });
}
