//! The tree view.
//!
//! [`TreeView`] owns the nodes and routes every change through the focus and
//! selection engines. Each public operation mutates the tree, settles the
//! focus bindings, applies the tree's reaction to a focus change, and only
//! then returns, so callers always see settled state.
//!
//! # Example
//!
//! ```ignore
//! use treeview::prelude::*;
//!
//! let mut tree = TreeView::from_json_str(
//!     r#"[{ "id": "a", "label": "A", "children": [{ "id": "b", "label": "B" }] }]"#,
//!     TreeConfig::new().selection_mode(SelectionMode::SelectionFollowsFocus),
//! )?;
//! tree.mount();
//! tree.expand(&"a".into());
//! tree.focus_next(false);
//! for event in tree.drain_events() {
//!     println!("{event:?}");
//! }
//! ```

mod events;

use std::collections::HashMap;

use log::debug;
use serde_json::Value;

use crate::aria::NodeAria;
use crate::config::TreeConfig;
use crate::error::{TreeError, json_type_name};
use crate::events::{EventQueue, TreeEvent};
use crate::focus::{self, FocusTarget, NodeFocusBinding};
use crate::input::RadioGroups;
use crate::node::{NodeKey, TreeNode};
use crate::selection::{SelectionCoordinator, SelectionMode};
use crate::traversal::{self, NodePath, VisibleNode};

/// An accessible tree of nodes with one focus target and a selection mode.
#[derive(Debug)]
pub struct TreeView {
    /// Settings.
    config: TreeConfig,
    /// Root nodes.
    nodes: Vec<TreeNode>,
    /// Selection mode and its rules.
    coordinator: SelectionCoordinator,
    /// Identity of the node that last became focusable.
    focused: Option<NodeKey>,
    /// Focus bindings by node identity.
    bindings: HashMap<NodeKey, NodeFocusBinding>,
    /// Radio group values.
    radio_groups: RadioGroups,
    /// Outward events waiting to be drained.
    events: EventQueue,
    /// Whether bindings may move real input focus.
    mounted: bool,
}

impl TreeView {
    /// Create a tree from root nodes.
    ///
    /// Nodes are validated (problems are logged, never raised), property
    /// names are filled in from `config`, and initial focus is settled: the
    /// first node already marked focusable keeps focus (or hands it to its
    /// closest visible ancestor when hidden), otherwise the first visible
    /// node gets it. Finally the configured selection mode is
    /// enforced.
    pub fn new(mut nodes: Vec<TreeNode>, config: TreeConfig) -> Self {
        traversal::for_each_node_mut(&mut nodes, |_, node| {
            node.apply_property_names(&config.property_names);
            node.validate();
        });

        let mut radio_groups = RadioGroups::new();
        radio_groups.seed(&nodes);

        let mut tree = Self {
            coordinator: SelectionCoordinator::new(config.selection_mode),
            config,
            nodes,
            focused: None,
            bindings: HashMap::new(),
            radio_groups,
            events: EventQueue::new(),
            mounted: false,
        };

        match traversal::focusable_path(&tree.nodes)
            .and_then(|path| traversal::nearest_visible(&tree.nodes, &path))
        {
            Some(path) => {
                focus::set_focusable(&mut tree.nodes, &path);
            }
            None => {
                focus::focus_first(&mut tree.nodes);
            }
        }
        tree.settle();
        tree.coordinator
            .enforce(&mut tree.nodes, tree.focused.as_ref());
        debug!(
            "tree {} ready: {} roots, mode {:?}, focus {:?}",
            tree.config.tree_id,
            tree.nodes.len(),
            tree.coordinator.mode(),
            tree.focused
        );
        tree
    }

    /// Create a tree from JSON: an array of root nodes or a single node.
    pub fn from_json(value: Value, config: TreeConfig) -> Result<Self, TreeError> {
        let names = &config.property_names;
        let nodes = match value {
            Value::Array(items) => items
                .into_iter()
                .map(|item| TreeNode::from_value(item, names))
                .collect::<Result<Vec<_>, _>>()?,
            Value::Object(_) => vec![TreeNode::from_value(value, names)?],
            other => return Err(TreeError::InvalidRoot(json_type_name(&other))),
        };
        Ok(Self::new(nodes, config))
    }

    /// Create a tree from JSON text.
    pub fn from_json_str(json: &str, config: TreeConfig) -> Result<Self, TreeError> {
        Self::from_json(serde_json::from_str(json)?, config)
    }

    /// Serialize the current tree to the JSON shape it was loaded from.
    pub fn to_json(&self) -> Value {
        Value::Array(self.nodes.iter().map(TreeNode::to_value).collect())
    }

    // -------------------------------------------------------------------------
    // Access
    // -------------------------------------------------------------------------

    /// Settings.
    pub fn config(&self) -> &TreeConfig {
        &self.config
    }

    /// Root nodes.
    pub fn nodes(&self) -> &[TreeNode] {
        &self.nodes
    }

    /// Find a node by identity, hidden or not.
    pub fn node(&self, key: &NodeKey) -> Option<&TreeNode> {
        let path = traversal::find_path(&self.nodes, key)?;
        traversal::node_at(&self.nodes, &path)
    }

    /// Visible nodes in depth-first order.
    pub fn visible_nodes(&self) -> Vec<VisibleNode> {
        traversal::visible_nodes(&self.nodes)
    }

    /// Get a node by path.
    pub fn node_at(&self, path: &NodePath) -> Option<&TreeNode> {
        traversal::node_at(&self.nodes, path)
    }

    /// Take all queued events, oldest first.
    pub fn drain_events(&mut self) -> Vec<TreeEvent> {
        self.events.drain()
    }

    // -------------------------------------------------------------------------
    // Mounting and elements
    // -------------------------------------------------------------------------

    /// Mark the tree as mounted. From now on focus moves also move real input
    /// focus to the bound elements.
    pub fn mount(&mut self) {
        self.mounted = true;
    }

    /// Whether the tree is mounted.
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Attach the element that takes input focus for the node `key`.
    pub fn bind_element(&mut self, key: NodeKey, element: Box<dyn FocusTarget>) {
        self.bindings.entry(key).or_default().bind(element);
    }

    /// Detach the element for `key`.
    pub fn unbind_element(&mut self, key: &NodeKey) -> Option<Box<dyn FocusTarget>> {
        self.bindings.get_mut(key).and_then(NodeFocusBinding::unbind)
    }

    // -------------------------------------------------------------------------
    // Focus
    // -------------------------------------------------------------------------

    /// Identity of the focus target.
    pub fn focused(&self) -> Option<&NodeKey> {
        self.focused.as_ref()
    }

    /// Path of the node holding the focusable flag.
    pub fn focused_path(&self) -> Option<NodePath> {
        traversal::focusable_path(&self.nodes)
    }

    /// Focus the first visible node.
    pub fn focus_first(&mut self) -> bool {
        let moved = focus::focus_first(&mut self.nodes).is_some();
        self.settle();
        moved
    }

    /// Focus the last visible node.
    pub fn focus_last(&mut self) -> bool {
        let moved = focus::focus_last(&mut self.nodes).is_some();
        self.settle();
        moved
    }

    /// Move focus to the next visible node. With `ignore_children` an
    /// expanded focus target's children are skipped.
    pub fn focus_next(&mut self, ignore_children: bool) -> bool {
        let Some(current) = self.focused_path() else {
            return false;
        };
        let moved = focus::focus_next_at(&mut self.nodes, &current, ignore_children).is_some();
        self.settle();
        moved
    }

    /// Move focus to the previous visible node.
    pub fn focus_previous(&mut self) -> bool {
        let Some(current) = self.focused_path() else {
            return false;
        };
        let moved = focus::focus_previous_at(&mut self.nodes, &current).is_some();
        self.settle();
        moved
    }

    /// Move focus to the focus target's parent.
    pub fn focus_parent(&mut self) -> bool {
        let Some(current) = self.focused_path() else {
            return false;
        };
        let moved = focus::focus_parent_at(&mut self.nodes, &current).is_some();
        self.settle();
        moved
    }

    /// Focus the node `key`, for example after a click. A hidden node hands
    /// focus to its closest visible ancestor.
    pub fn focus(&mut self, key: &NodeKey) -> bool {
        let Some(path) = traversal::find_path(&self.nodes, key)
            .and_then(|path| traversal::nearest_visible(&self.nodes, &path))
        else {
            return false;
        };
        let moved = focus::set_focusable(&mut self.nodes, &path);
        self.settle();
        moved
    }

    /// Let every binding observe its node, then react to the focus changes
    /// they report.
    fn settle(&mut self) {
        let mut reported = EventQueue::new();
        let mounted = self.mounted;
        let bindings = &mut self.bindings;
        traversal::for_each_node_mut(&mut self.nodes, |_, node| {
            if let Some(key) = node.key() {
                bindings
                    .entry(key)
                    .or_default()
                    .observe(node, mounted, &mut reported);
            }
        });

        for event in reported.drain() {
            if let TreeEvent::FocusableChange(key) = &event {
                self.focused = Some(key.clone());
                self.coordinator.on_focus_change(&mut self.nodes, key);
            }
            self.events.emit(event);
        }
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    /// The active selection mode.
    pub fn selection_mode(&self) -> SelectionMode {
        self.coordinator.mode()
    }

    /// Switch selection modes, enforcing the new mode's rules on the current
    /// tree. Returns whether the mode changed.
    pub fn set_selection_mode(&mut self, mode: SelectionMode) -> bool {
        self.coordinator
            .set_mode(&mut self.nodes, mode, self.focused.as_ref())
    }

    /// Value for the tree's `aria-multiselectable` attribute.
    pub fn aria_multiselectable(&self) -> Option<bool> {
        self.coordinator.aria_multiselectable()
    }

    /// Toggle a node's selection on the user's behalf.
    ///
    /// Disabled and unselectable nodes, and modes where users do not toggle,
    /// leave the tree alone. Returns whether the selection changed.
    pub fn toggle_selected(&mut self, key: &NodeKey) -> bool {
        let mode = self.coordinator.mode();
        let toggled = self
            .node_mut(key)
            .is_some_and(|node| !node.is_disabled() && node.toggle_selected(mode));
        if toggled {
            self.selected_changed(key);
        }
        toggled
    }

    /// Set a node's selection on the user's behalf.
    ///
    /// Ignored under SelectionFollowsFocus, where selection comes from focus,
    /// and when selecting a node that is not selectable. Returns whether the
    /// selection changed.
    pub fn set_selected(&mut self, key: &NodeKey, selected: bool) -> bool {
        if self.coordinator.mode() == SelectionMode::SelectionFollowsFocus {
            return false;
        }
        let changed = self.node_mut(key).is_some_and(|node| {
            if node.is_selected() == selected || (selected && !node.is_selectable()) {
                return false;
            }
            node.set_selected(selected);
            true
        });
        if changed {
            self.selected_changed(key);
        }
        changed
    }

    /// Identities of all selected nodes, hidden ones included, in depth-first
    /// order.
    pub fn selected_keys(&self) -> Vec<NodeKey> {
        fn collect(nodes: &[TreeNode], out: &mut Vec<NodeKey>) {
            for node in nodes {
                if node.is_selected()
                    && let Some(key) = node.key()
                {
                    out.push(key);
                }
                collect(&node.children, out);
            }
        }
        let mut out = Vec::new();
        collect(&self.nodes, &mut out);
        out
    }

    fn selected_changed(&mut self, key: &NodeKey) {
        if let Some(event) = self
            .coordinator
            .handle_node_selected_change(&mut self.nodes, key)
        {
            self.events.emit(event);
        }
    }

    // -------------------------------------------------------------------------
    // Expansion
    // -------------------------------------------------------------------------

    /// Expand a node. Returns whether anything changed.
    pub fn expand(&mut self, key: &NodeKey) -> bool {
        let changed = self.node_mut(key).is_some_and(|node| {
            if !node.is_expandable() || node.is_expanded() {
                return false;
            }
            node.spec.state.expanded = true;
            true
        });
        if changed {
            self.events.emit(TreeEvent::ExpandedChange {
                key: key.clone(),
                expanded: true,
            });
        }
        changed
    }

    /// Collapse a node. Focus inside the collapsed subtree moves to the
    /// collapsed node, and under SelectionFollowsFocus nothing inside it
    /// stays selected. Returns whether anything changed.
    pub fn collapse(&mut self, key: &NodeKey) -> bool {
        let Some(path) = traversal::find_path(&self.nodes, key) else {
            return false;
        };
        let follows_focus = self.coordinator.mode() == SelectionMode::SelectionFollowsFocus;
        let changed = traversal::node_at_mut(&mut self.nodes, &path).is_some_and(|node| {
            if !node.is_expanded() {
                return false;
            }
            node.spec.state.expanded = false;
            // The focus reaction only walks visible nodes.
            if follows_focus {
                traversal::for_each_node_mut(&mut node.children, |_, child| child.deselect());
            }
            true
        });
        if !changed {
            return false;
        }

        self.events.emit(TreeEvent::ExpandedChange {
            key: key.clone(),
            expanded: false,
        });
        if self
            .focused_path()
            .is_some_and(|focused| path.is_ancestor_of(&focused))
        {
            focus::set_focusable(&mut self.nodes, &path);
            self.settle();
        }
        true
    }

    /// Expand a collapsed node or collapse an expanded one.
    pub fn toggle_expanded(&mut self, key: &NodeKey) -> bool {
        match self.node(key) {
            Some(node) if node.is_expanded() => self.collapse(key),
            Some(_) => self.expand(key),
            None => false,
        }
    }

    /// Expand every expandable node.
    pub fn expand_all(&mut self) {
        let mut expanded = Vec::new();
        traversal::for_each_node_mut(&mut self.nodes, |_, node| {
            if node.is_expandable() && !node.is_expanded() {
                node.spec.state.expanded = true;
                expanded.extend(node.key());
            }
        });
        for key in expanded {
            self.events.emit(TreeEvent::ExpandedChange {
                key,
                expanded: true,
            });
        }
    }

    // -------------------------------------------------------------------------
    // Inputs
    // -------------------------------------------------------------------------

    /// Toggle a node's checkbox. Returns the new value, or `None` when the
    /// node has no checkbox or is disabled.
    pub fn toggle_checkbox(&mut self, key: &NodeKey) -> Option<bool> {
        let node = self.node_mut(key)?;
        if node.is_disabled() {
            return None;
        }
        let checked = node.toggle_checkbox()?;
        self.events.emit(TreeEvent::CheckboxChange {
            key: key.clone(),
            checked,
        });
        Some(checked)
    }

    /// Choose a node's radio button. Returns whether it has one and is
    /// enabled.
    pub fn choose_radio(&mut self, key: &NodeKey) -> bool {
        let Some(path) = traversal::find_path(&self.nodes, key) else {
            return false;
        };
        let Some(node) = traversal::node_at(&self.nodes, &path) else {
            return false;
        };
        if node.is_disabled() {
            return false;
        }
        let Some((group, value)) = self.radio_groups.choose(node) else {
            return false;
        };
        self.events.emit(TreeEvent::RadioChange {
            key: key.clone(),
            group,
            value,
        });
        true
    }

    /// Radio group values.
    pub fn radio_groups(&self) -> &RadioGroups {
        &self.radio_groups
    }

    // -------------------------------------------------------------------------
    // ARIA
    // -------------------------------------------------------------------------

    /// Accessibility attributes for the node `key`.
    pub fn node_aria(&self, key: &NodeKey) -> Option<NodeAria> {
        let node = self.node(key)?;
        Some(NodeAria::for_node(
            &self.config.tree_id,
            node,
            self.coordinator.mode(),
        ))
    }

    fn node_mut(&mut self, key: &NodeKey) -> Option<&mut TreeNode> {
        let path = traversal::find_path(&self.nodes, key)?;
        traversal::node_at_mut(&mut self.nodes, &path)
    }
}
