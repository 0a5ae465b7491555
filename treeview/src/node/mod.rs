//! Node models.
//!
//! A [`TreeNode`] is an application record (a JSON object) plus the
//! [`NodeSpec`] block the tree keeps its own state in. Identity, label and
//! children are read through property names that can be overridden per node.
//!
//! # Example
//!
//! ```ignore
//! use serde_json::json;
//! use treeview::node::{PropertyNames, TreeNode};
//!
//! let node = TreeNode::from_value(
//!     json!({
//!         "path": "/home",
//!         "name": "home",
//!         "treeNodeSpec": { "idProperty": "path", "labelProperty": "name" }
//!     }),
//!     &PropertyNames::default(),
//! )?;
//! assert_eq!(node.label(), Some("home"));
//! ```

mod identity;
mod spec;

use log::error;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{TreeError, json_type_name};

pub use identity::NodeKey;
pub use spec::{InputState, NodeInput, NodeSpec, NodeState};

/// JSON key holding the specification block.
pub const SPEC_KEY: &str = "treeNodeSpec";

/// Default property names used when a node does not override them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PropertyNames {
    /// Identity property.
    pub id: String,
    /// Label property.
    pub label: String,
    /// Children property.
    pub children: String,
}

impl Default for PropertyNames {
    fn default() -> Self {
        Self {
            id: "id".to_string(),
            label: "label".to_string(),
            children: "children".to_string(),
        }
    }
}

/// A node in the tree.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeNode {
    /// Application record, without the children and the spec block.
    data: Map<String, Value>,
    /// Tree-private state.
    pub spec: NodeSpec,
    /// Ordered child nodes.
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    /// Create a node with an `id` and a `label`.
    ///
    /// The node pins its identity and label properties to `id` and `label`,
    /// so tree-wide property names do not apply to it.
    pub fn new(id: impl Into<Value>, label: impl Into<String>) -> Self {
        let mut data = Map::new();
        data.insert("id".to_string(), id.into());
        data.insert("label".to_string(), Value::String(label.into()));
        Self {
            data,
            spec: NodeSpec::with_properties("id", "label"),
            children: Vec::new(),
        }
    }

    /// Wrap an existing record. The record is used as-is; children are taken
    /// from `self.children`, not from the record.
    pub fn from_record(data: Map<String, Value>, spec: NodeSpec) -> Self {
        Self {
            data,
            spec,
            children: Vec::new(),
        }
    }

    /// Set the child nodes.
    pub fn with_children(mut self, children: Vec<TreeNode>) -> Self {
        self.children = children;
        self
    }

    /// Set the expanded state.
    pub fn expanded(mut self, expanded: bool) -> Self {
        self.spec.state.expanded = expanded;
        self
    }

    /// Set whether the node may be selected.
    pub fn selectable(mut self, selectable: bool) -> Self {
        self.spec.selectable = selectable;
        self
    }

    /// Set the selected state.
    pub fn selected(mut self, selected: bool) -> Self {
        self.spec.state.selected = selected;
        self
    }

    /// Set the disabled state.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.spec.disabled = disabled;
        self
    }

    /// Attach an input control.
    pub fn with_input(mut self, input: NodeInput) -> Self {
        if matches!(input, NodeInput::Checkbox) && self.spec.state.input.is_none() {
            self.spec.state.input = Some(InputState::default());
        }
        self.spec.input = Some(input);
        self
    }

    /// Parse a node (and its descendants) from JSON.
    ///
    /// Property names missing from a node's spec block are filled in from
    /// `names`, so every loaded node knows which properties it uses. Missing
    /// identities or labels are not checked here; see [`validate`](Self::validate).
    pub fn from_value(value: Value, names: &PropertyNames) -> Result<Self, TreeError> {
        let Value::Object(mut data) = value else {
            return Err(TreeError::NodeNotObject(json_type_name(&value)));
        };

        let mut spec: NodeSpec = match data.remove(SPEC_KEY) {
            Some(raw) => serde_json::from_value(raw).map_err(TreeError::InvalidSpec)?,
            None => NodeSpec::default(),
        };
        let children_property = spec
            .children_property
            .get_or_insert_with(|| names.children.clone())
            .clone();
        let children = match data.remove(&children_property) {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Array(items)) => items
                .into_iter()
                .map(|item| Self::from_value(item, names))
                .collect::<Result<Vec<_>, _>>()?,
            Some(other) => {
                return Err(TreeError::ChildrenNotArray {
                    property: children_property,
                    found: json_type_name(&other),
                });
            }
        };

        if matches!(spec.input, Some(NodeInput::Checkbox)) && spec.state.input.is_none() {
            spec.state.input = Some(InputState::default());
        }

        let mut node = Self {
            data,
            spec,
            children,
        };
        node.apply_property_names(names);
        Ok(node)
    }

    /// Serialize the node (and its descendants) back to JSON.
    pub fn to_value(&self) -> Value {
        let mut data = self.data.clone();
        if !self.children.is_empty() {
            data.insert(
                self.children_property().to_string(),
                Value::Array(self.children.iter().map(Self::to_value).collect()),
            );
        }
        // NodeSpec holds only strings, bools and enums, so this cannot fail.
        if let Ok(spec) = serde_json::to_value(&self.spec) {
            data.insert(SPEC_KEY.to_string(), spec);
        }
        Value::Object(data)
    }

    /// Fill in property names this node does not override.
    pub fn apply_property_names(&mut self, names: &PropertyNames) {
        self.spec.id_property.get_or_insert_with(|| names.id.clone());
        self.spec
            .label_property
            .get_or_insert_with(|| names.label.clone());
        self.spec
            .children_property
            .get_or_insert_with(|| names.children.clone());
    }

    /// Report configuration problems without failing.
    ///
    /// A node without a usable identity or label is logged and then treated
    /// as having none.
    pub fn validate(&self) {
        if self.key().is_none() {
            error!(
                "node id is required and must be a number or string. Expected prop {} to exist on the model.",
                self.id_property()
            );
        }
        if self.label().is_none() {
            error!(
                "node label is required and must be a string. Expected prop {} to exist on the model.",
                self.label_property()
            );
        }
    }

    // -------------------------------------------------------------------------
    // Record access
    // -------------------------------------------------------------------------

    /// The application record.
    pub fn data(&self) -> &Map<String, Value> {
        &self.data
    }

    /// Mutable access to the application record.
    pub fn data_mut(&mut self) -> &mut Map<String, Value> {
        &mut self.data
    }

    /// Name of the identity property in use.
    pub fn id_property(&self) -> &str {
        self.spec.id_property.as_deref().unwrap_or("id")
    }

    /// Name of the label property in use.
    pub fn label_property(&self) -> &str {
        self.spec.label_property.as_deref().unwrap_or("label")
    }

    /// Name of the children property in use.
    pub fn children_property(&self) -> &str {
        self.spec.children_property.as_deref().unwrap_or("children")
    }

    /// Raw identity value.
    pub fn identity(&self) -> Option<&Value> {
        self.data.get(self.id_property())
    }

    /// Identity key, if the identity is a string or a number.
    pub fn key(&self) -> Option<NodeKey> {
        self.identity().and_then(NodeKey::from_value)
    }

    /// Whether this node's identity equals `key`.
    pub fn has_key(&self, key: &NodeKey) -> bool {
        self.identity().is_some_and(|value| key.matches(value))
    }

    /// Whether two nodes share an identity. Nodes without one never match.
    pub fn same_identity(&self, other: &TreeNode) -> bool {
        other.key().is_some_and(|key| self.has_key(&key))
    }

    /// Display label.
    pub fn label(&self) -> Option<&str> {
        self.data.get(self.label_property()).and_then(Value::as_str)
    }

    // -------------------------------------------------------------------------
    // Spec shortcuts
    // -------------------------------------------------------------------------

    /// Whether the node has any children.
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Whether the node's children are visible.
    pub fn is_expanded(&self) -> bool {
        self.spec.state.expanded
    }

    /// Whether the node can be expanded: it allows expansion and has
    /// children to show.
    pub fn is_expandable(&self) -> bool {
        self.spec.expandable && self.has_children()
    }

    /// Whether this node is the tree's focus target.
    pub fn is_focusable(&self) -> bool {
        self.spec.is_focusable()
    }

    /// Whether the node ignores user interaction.
    pub fn is_disabled(&self) -> bool {
        self.spec.disabled
    }
}
