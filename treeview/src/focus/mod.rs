//! Focus engine.
//!
//! Exactly one node in a tree is focusable at a time. Every move goes through
//! [`set_focusable`], which clears the previous holder before setting the new
//! one. All moves work over the visible depth-first order and return the path
//! of the newly focused node, or `None` when the move is a no-op.

pub mod binding;

use log::trace;

use crate::node::{NodeKey, TreeNode};
use crate::traversal::{self, NodePath};

pub use binding::{FocusTarget, NodeFocusBinding};

/// Make the node at `path` the single focusable node.
///
/// Returns `false` when the path does not exist; the tree is left untouched.
pub fn set_focusable(nodes: &mut [TreeNode], path: &NodePath) -> bool {
    if traversal::node_at(nodes, path).is_none() {
        return false;
    }
    traversal::for_each_node_mut(nodes, |_, node| node.spec.set_focusable(false));
    if let Some(node) = traversal::node_at_mut(nodes, path) {
        node.spec.set_focusable(true);
        trace!("focusable -> {} ({:?})", path, node.key());
    }
    true
}

/// Focus the first visible node.
pub fn focus_first(nodes: &mut [TreeNode]) -> Option<NodePath> {
    let path = NodePath::root(0);
    set_focusable(nodes, &path).then_some(path)
}

/// Focus the last visible node: the deepest, right-most visible descendant
/// of the last root.
pub fn focus_last(nodes: &mut [TreeNode]) -> Option<NodePath> {
    let path = traversal::visible_nodes(nodes).pop()?.path;
    set_focusable(nodes, &path).then_some(path)
}

/// Focus the node before `current` in visible order.
///
/// When the previous sibling is expanded this lands on its deepest last
/// visible descendant. No-op on the first visible node.
pub fn focus_previous(nodes: &mut [TreeNode], current: &NodeKey) -> Option<NodePath> {
    let path = visible_path_of(nodes, current)?;
    focus_previous_at(nodes, &path)
}

/// [`focus_previous`] for a node addressed by path.
pub fn focus_previous_at(nodes: &mut [TreeNode], current: &NodePath) -> Option<NodePath> {
    let visible = traversal::visible_nodes(nodes);
    let index = visible.iter().position(|v| &v.path == current)?;
    let target = visible.get(index.checked_sub(1)?)?.path.clone();
    set_focusable(nodes, &target).then_some(target)
}

/// Focus the node after `current` in visible order.
///
/// An expanded `current` hands focus to its first child unless
/// `ignore_children` is set, in which case its subtree is skipped. No-op on
/// the last visible node.
pub fn focus_next(
    nodes: &mut [TreeNode],
    current: &NodeKey,
    ignore_children: bool,
) -> Option<NodePath> {
    let path = visible_path_of(nodes, current)?;
    focus_next_at(nodes, &path, ignore_children)
}

/// [`focus_next`] for a node addressed by path.
pub fn focus_next_at(
    nodes: &mut [TreeNode],
    current: &NodePath,
    ignore_children: bool,
) -> Option<NodePath> {
    let visible = traversal::visible_nodes(nodes);
    let index = visible.iter().position(|v| &v.path == current)?;
    let entry = &visible[index];

    let next = if entry.is_expanded && entry.has_children && !ignore_children {
        visible.get(index + 1)
    } else {
        // Next node at the same depth or shallower: a sibling, or the next
        // sibling of the closest ancestor that has one.
        visible[index + 1..].iter().find(|v| v.depth <= entry.depth)
    };
    let target = next?.path.clone();

    set_focusable(nodes, &target).then_some(target)
}

/// Focus the parent of `current`. No-op for root-level nodes.
pub fn focus_parent(nodes: &mut [TreeNode], current: &NodeKey) -> Option<NodePath> {
    let path = traversal::find_path(nodes, current)?;
    focus_parent_at(nodes, &path)
}

/// [`focus_parent`] for a node addressed by path.
pub fn focus_parent_at(nodes: &mut [TreeNode], current: &NodePath) -> Option<NodePath> {
    let target = current.parent()?;
    set_focusable(nodes, &target).then_some(target)
}

/// Path of the visible node with identity `key`.
fn visible_path_of(nodes: &[TreeNode], key: &NodeKey) -> Option<NodePath> {
    traversal::visible_nodes(nodes)
        .into_iter()
        .find(|v| traversal::node_at(nodes, &v.path).is_some_and(|node| node.has_key(key)))
        .map(|v| v.path)
}
