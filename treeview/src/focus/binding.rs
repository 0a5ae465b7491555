//! Per-node focus bindings.
//!
//! A binding watches one node's focusable flag. When the flag turns on it
//! moves real input focus to the node's element and tells the tree which node
//! now holds focus.

use std::fmt;

use log::trace;

use crate::events::{EventQueue, TreeEvent};
use crate::node::TreeNode;

/// An element that can take input focus, such as a rendered row.
pub trait FocusTarget {
    /// Move input focus to this element.
    fn focus(&mut self);
}

/// Watches a single node's focusable flag.
#[derive(Default)]
pub struct NodeFocusBinding {
    /// Element focused when the node becomes focusable.
    element: Option<Box<dyn FocusTarget>>,
    /// Flag value seen at the last observation.
    was_focusable: bool,
}

impl fmt::Debug for NodeFocusBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeFocusBinding")
            .field("has_element", &self.element.is_some())
            .field("was_focusable", &self.was_focusable)
            .finish()
    }
}

impl NodeFocusBinding {
    /// Create a binding with no element attached.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach the element to focus, replacing any previous one.
    pub fn bind(&mut self, element: Box<dyn FocusTarget>) {
        self.element = Some(element);
    }

    /// Detach the element.
    pub fn unbind(&mut self) -> Option<Box<dyn FocusTarget>> {
        self.element.take()
    }

    /// Whether an element is attached.
    pub fn is_bound(&self) -> bool {
        self.element.is_some()
    }

    /// Look at the node's flag and react to a false-to-true transition.
    ///
    /// The element is only focused once `mounted` is set, so building or
    /// hydrating a tree never steals focus. The `FocusableChange` event is
    /// emitted either way. Returns whether a transition was seen.
    pub fn observe(&mut self, node: &TreeNode, mounted: bool, events: &mut EventQueue) -> bool {
        let focusable = node.is_focusable();
        let rising = focusable && !self.was_focusable;
        self.was_focusable = focusable;
        if !rising {
            return false;
        }

        if mounted && let Some(element) = self.element.as_mut() {
            element.focus();
        }
        if let Some(key) = node.key() {
            trace!("binding saw {} become focusable (mounted: {})", key, mounted);
            events.emit(TreeEvent::FocusableChange(key));
        }
        true
    }
}
