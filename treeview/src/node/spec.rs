//! The per-node specification block.

use serde::{Deserialize, Serialize};

/// State that changes as the user interacts with a node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NodeState {
    /// Whether children are visible and traversable.
    pub expanded: bool,
    /// Whether the node is selected.
    pub selected: bool,
    /// Value of the node's input, when it has one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<InputState>,
}

/// Current value of a node's input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputState {
    /// Checked state for checkboxes. Radio buttons keep their value in the
    /// tree's radio-group map instead.
    pub value: bool,
}

/// Input attached to a node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase", rename_all_fields = "camelCase")]
pub enum NodeInput {
    /// A checkbox toggled by the activate key.
    Checkbox,
    /// A radio button belonging to the group `name`.
    #[serde(rename = "radio")]
    RadioButton {
        /// Group name.
        name: String,
        /// Value this button gives the group when chosen.
        value: String,
        /// Whether this button holds the group's initial value.
        #[serde(default)]
        is_initial_radio_group_value: bool,
    },
}

/// Specification block attached to every node (`treeNodeSpec` in JSON).
///
/// `focusable` has no public setter; only the focus engine writes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NodeSpec {
    /// Overrides the tree's identity property for this node.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_property: Option<String>,
    /// Overrides the tree's label property for this node.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_property: Option<String>,
    /// Overrides the tree's children property for this node.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children_property: Option<String>,
    /// Tooltip text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Whether the node may be expanded.
    pub expandable: bool,
    /// Whether the node may be selected.
    pub selectable: bool,
    /// Excludes the node from user interaction.
    pub disabled: bool,
    focusable: bool,
    /// Optional input control.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<NodeInput>,
    /// Interaction state.
    pub state: NodeState,
}

impl Default for NodeSpec {
    fn default() -> Self {
        Self {
            id_property: None,
            label_property: None,
            children_property: None,
            title: None,
            expandable: true,
            selectable: false,
            disabled: false,
            focusable: false,
            input: None,
            state: NodeState::default(),
        }
    }
}

impl NodeSpec {
    /// A default block with the identity and label properties pinned.
    pub fn with_properties(id_property: &str, label_property: &str) -> Self {
        Self {
            id_property: Some(id_property.to_string()),
            label_property: Some(label_property.to_string()),
            ..Self::default()
        }
    }

    /// Whether this node is the tree's focus target.
    pub fn is_focusable(&self) -> bool {
        self.focusable
    }

    pub(crate) fn set_focusable(&mut self, focusable: bool) {
        self.focusable = focusable;
    }
}
