//! Selection state.
//!
//! Per-node primitives live here as methods on [`TreeNode`]. Tree-wide rules
//! for each [`SelectionMode`] live in [`coordinator`].

pub mod coordinator;

use serde::{Deserialize, Serialize};

use crate::node::TreeNode;

pub use coordinator::SelectionCoordinator;

/// Selection mode for a tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SelectionMode {
    /// No selection allowed
    #[default]
    None,
    /// At most one selected node
    Single,
    /// Any number of selected nodes
    Multiple,
    /// The focused node is the selected node
    SelectionFollowsFocus,
}

impl SelectionMode {
    /// Whether users toggle selection directly in this mode.
    pub fn allows_toggle(self) -> bool {
        matches!(self, Self::Single | Self::Multiple)
    }
}

impl TreeNode {
    /// Mark the node selected.
    pub fn select(&mut self) {
        self.spec.state.selected = true;
    }

    /// Mark the node not selected.
    pub fn deselect(&mut self) {
        self.spec.state.selected = false;
    }

    /// Set the selected state.
    pub fn set_selected(&mut self, selected: bool) {
        self.spec.state.selected = selected;
    }

    /// Flip the selected state.
    ///
    /// Only selectable nodes in Single or Multiple mode toggle. Under None
    /// there is no selection, and under SelectionFollowsFocus it is derived
    /// from focus. Returns whether the state changed.
    pub fn toggle_selected(&mut self, mode: SelectionMode) -> bool {
        if self.is_selectable() && mode.allows_toggle() {
            self.spec.state.selected = !self.spec.state.selected;
            true
        } else {
            false
        }
    }

    /// Whether the node may be selected.
    pub fn is_selectable(&self) -> bool {
        self.spec.selectable
    }

    /// Whether the node is selected.
    pub fn is_selected(&self) -> bool {
        self.spec.state.selected
    }
}
