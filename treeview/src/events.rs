//! Tree events.
//!
//! The tree never calls back into the host. Anything the host should hear
//! about is pushed onto an [`EventQueue`] during an operation, in the order
//! it happened, and drained afterwards.

use std::collections::VecDeque;

use log::debug;

use crate::node::NodeKey;

/// Something that changed in the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeEvent {
    /// A node became the tree's focus target.
    FocusableChange(NodeKey),
    /// A node's selection was edited by the user.
    SelectedChange {
        /// Affected node.
        key: NodeKey,
        /// Selected state after the edit.
        selected: bool,
    },
    /// A node was expanded or collapsed.
    ExpandedChange {
        /// Affected node.
        key: NodeKey,
        /// Expanded state after the change.
        expanded: bool,
    },
    /// A node's checkbox was toggled.
    CheckboxChange {
        /// Affected node.
        key: NodeKey,
        /// Checked state after the toggle.
        checked: bool,
    },
    /// A radio group took a new value.
    RadioChange {
        /// Node whose radio button was chosen.
        key: NodeKey,
        /// Group name.
        group: String,
        /// The group's new value.
        value: String,
    },
}

impl TreeEvent {
    /// The node the event is about.
    pub fn key(&self) -> &NodeKey {
        match self {
            Self::FocusableChange(key)
            | Self::SelectedChange { key, .. }
            | Self::ExpandedChange { key, .. }
            | Self::CheckboxChange { key, .. }
            | Self::RadioChange { key, .. } => key,
        }
    }
}

/// Ordered queue of outward events.
#[derive(Debug, Clone, Default)]
pub struct EventQueue {
    events: VecDeque<TreeEvent>,
}

impl EventQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Push an event.
    pub fn emit(&mut self, event: TreeEvent) {
        debug!("tree event: {:?}", event);
        self.events.push_back(event);
    }

    /// Take all queued events, oldest first.
    pub fn drain(&mut self) -> Vec<TreeEvent> {
        self.events.drain(..).collect()
    }

    /// Number of queued events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// Result of handling an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was ignored, try other handlers.
    Ignored,
    /// Event was consumed, stop propagation.
    Consumed,
}

impl EventResult {
    /// Check if the event was handled.
    pub fn is_handled(&self) -> bool {
        !matches!(self, EventResult::Ignored)
    }
}
