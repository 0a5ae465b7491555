//! Derived ARIA attributes and element ids.

use crate::config::TreeId;
use crate::node::TreeNode;
use crate::selection::SelectionMode;

/// Accessibility attributes for one node's `treeitem` element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeAria {
    /// Element id: `{tree id}-{node key}`.
    pub id: String,
    /// 0 for the focusable node, -1 for the rest.
    pub tabindex: i8,
    /// `aria-expanded`, present only on expandable nodes.
    pub expanded: Option<bool>,
    /// `aria-selected`, omitted where selection does not apply.
    pub selected: Option<bool>,
    /// `aria-disabled`.
    pub disabled: bool,
}

impl NodeAria {
    /// Derive the attributes for `node` under `mode`.
    pub fn for_node(tree_id: &TreeId, node: &TreeNode, mode: SelectionMode) -> Self {
        Self {
            id: node_element_id(tree_id, node),
            tabindex: if node.is_focusable() { 0 } else { -1 },
            expanded: node.is_expandable().then(|| node.is_expanded()),
            selected: aria_selected(node, mode),
            disabled: node.is_disabled(),
        }
    }

    /// Attributes as name/value pairs, omitting absent ones.
    pub fn attributes(&self) -> Vec<(&'static str, String)> {
        let mut attrs = vec![
            ("id", self.id.clone()),
            ("role", "treeitem".to_string()),
            ("tabindex", self.tabindex.to_string()),
        ];
        if let Some(expanded) = self.expanded {
            attrs.push(("aria-expanded", expanded.to_string()));
        }
        if let Some(selected) = self.selected {
            attrs.push(("aria-selected", selected.to_string()));
        }
        if self.disabled {
            attrs.push(("aria-disabled", "true".to_string()));
        }
        attrs
    }
}

/// `aria-selected` for a node.
///
/// Absent under None or on unselectable nodes. Single and
/// SelectionFollowsFocus only mark the selected node. Multiple marks every
/// selectable node true or false.
pub fn aria_selected(node: &TreeNode, mode: SelectionMode) -> Option<bool> {
    if !node.is_selectable() {
        return None;
    }
    match mode {
        SelectionMode::None => None,
        SelectionMode::Single | SelectionMode::SelectionFollowsFocus => {
            node.is_selected().then_some(true)
        }
        SelectionMode::Multiple => Some(node.is_selected()),
    }
}

/// Element id of a node's `treeitem`.
pub fn node_element_id(tree_id: &TreeId, node: &TreeNode) -> String {
    let key = node.key().map(|k| k.to_string()).unwrap_or_default();
    format!("{}-{}", tree_id, key)
}

/// Element id of a node's expander.
pub fn expander_element_id(tree_id: &TreeId, node: &TreeNode) -> String {
    format!("{}-exp", node_element_id(tree_id, node))
}

/// Element id of a node's input.
pub fn input_element_id(tree_id: &TreeId, node: &TreeNode) -> String {
    format!("{}-input", node_element_id(tree_id, node))
}
