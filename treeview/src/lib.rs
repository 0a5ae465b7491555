//! Accessible tree view state.
//!
//! `treeview` keeps the state behind a hierarchical tree widget: which nodes
//! are expanded, which single node takes keyboard focus, and which nodes are
//! selected under one of four [`SelectionMode`](selection::SelectionMode)s.
//! Rendering is left to the host; the tree hands back ARIA attributes and a
//! queue of [`TreeEvent`](events::TreeEvent)s to drive it.

pub mod aria;
pub mod config;
pub mod error;
pub mod events;
pub mod focus;
pub mod input;
pub mod key;
pub mod keymap;
pub mod node;
pub mod selection;
pub mod traversal;
pub mod tree;

pub use tree::TreeView;

pub mod prelude {
    pub use crate::aria::NodeAria;
    pub use crate::config::{TreeConfig, TreeId};
    pub use crate::error::TreeError;
    pub use crate::events::{EventResult, TreeEvent};
    pub use crate::focus::FocusTarget;
    pub use crate::key::{Key, KeyCombo, Modifiers};
    pub use crate::keymap::{AriaKeyMap, TreeAction};
    pub use crate::node::{NodeInput, NodeKey, PropertyNames, TreeNode};
    pub use crate::selection::SelectionMode;
    pub use crate::traversal::{NodePath, VisibleNode};
    pub use crate::tree::TreeView;
}
