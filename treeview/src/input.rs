//! Checkbox and radio-button state.
//!
//! Only the state lives here. Drawing the controls is up to the host.

use std::collections::HashMap;

use log::debug;

use crate::node::{InputState, NodeInput, TreeNode};

impl TreeNode {
    /// Flip the node's checkbox. Returns the new value, or `None` when the
    /// node has no checkbox.
    pub fn toggle_checkbox(&mut self) -> Option<bool> {
        if !matches!(self.spec.input, Some(NodeInput::Checkbox)) {
            return None;
        }
        let state = self.spec.state.input.get_or_insert_with(InputState::default);
        state.value = !state.value;
        Some(state.value)
    }

    /// Whether the node's checkbox is checked. Always `false` without one.
    pub fn is_checked(&self) -> bool {
        matches!(self.spec.input, Some(NodeInput::Checkbox))
            && self.spec.state.input.is_some_and(|state| state.value)
    }
}

/// Current value of each radio group in a tree, by group name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RadioGroups {
    values: HashMap<String, String>,
}

impl RadioGroups {
    /// Create an empty set of groups.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed group values from radio buttons flagged as the initial value.
    /// Values already present are kept.
    pub fn seed(&mut self, nodes: &[TreeNode]) {
        for node in nodes {
            if let Some(NodeInput::RadioButton {
                name,
                value,
                is_initial_radio_group_value: true,
            }) = &node.spec.input
            {
                self.values
                    .entry(name.clone())
                    .or_insert_with(|| value.clone());
            }
            self.seed(&node.children);
        }
    }

    /// Choose the node's radio button. Returns the group and its new value,
    /// or `None` when the node has no radio button.
    pub fn choose(&mut self, node: &TreeNode) -> Option<(String, String)> {
        let Some(NodeInput::RadioButton { name, value, .. }) = &node.spec.input else {
            return None;
        };
        debug!("radio group {} = {}", name, value);
        self.values.insert(name.clone(), value.clone());
        Some((name.clone(), value.clone()))
    }

    /// Current value of `group`.
    pub fn value(&self, group: &str) -> Option<&str> {
        self.values.get(group).map(String::as_str)
    }

    /// Whether the node's radio button is the chosen one in its group.
    pub fn is_chosen(&self, node: &TreeNode) -> bool {
        match &node.spec.input {
            Some(NodeInput::RadioButton { name, value, .. }) => {
                self.value(name) == Some(value.as_str())
            }
            _ => false,
        }
    }

    /// Set a group's value directly.
    pub fn set(&mut self, group: impl Into<String>, value: impl Into<String>) {
        self.values.insert(group.into(), value.into());
    }

    /// All group values.
    pub fn values(&self) -> &HashMap<String, String> {
        &self.values
    }
}
