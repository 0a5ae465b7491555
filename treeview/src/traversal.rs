//! Depth-first traversal over the visible tree.
//!
//! Visible order is root-to-leaves, left to right, descending into a node's
//! children only when that node is expanded. Everything that moves focus or
//! enforces selection walks the tree through this module.

use std::fmt;
use std::ops::ControlFlow;

use crate::node::{NodeKey, TreeNode};

/// Location of a node as child indexes from the root list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct NodePath(Vec<usize>);

impl NodePath {
    /// Path of the `index`th root node.
    pub fn root(index: usize) -> Self {
        Self(vec![index])
    }

    /// Path of this node's `index`th child.
    pub fn child(&self, index: usize) -> Self {
        let mut indexes = self.0.clone();
        indexes.push(index);
        Self(indexes)
    }

    /// Path of the parent, or `None` for root-level nodes.
    pub fn parent(&self) -> Option<Self> {
        match self.0.len() {
            0 | 1 => None,
            len => Some(Self(self.0[..len - 1].to_vec())),
        }
    }

    /// Depth in the tree (0 = root level).
    pub fn depth(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    /// Child indexes from the root list.
    pub fn indexes(&self) -> &[usize] {
        &self.0
    }

    /// Whether `other` lies strictly inside this node's subtree.
    pub fn is_ancestor_of(&self, other: &NodePath) -> bool {
        other.0.len() > self.0.len() && other.0.starts_with(&self.0)
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(usize::to_string).collect();
        write!(f, "/{}", parts.join("/"))
    }
}

/// A node in the flattened visible order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibleNode {
    /// Where the node lives.
    pub path: NodePath,
    /// Depth in tree (0 = root).
    pub depth: usize,
    /// Whether this node has children.
    pub has_children: bool,
    /// Whether this node is currently expanded.
    pub is_expanded: bool,
}

/// Visit every visible node in depth-first order.
///
/// Returning `ControlFlow::Break` from `visit` stops the whole walk.
pub fn depth_first_traverse<F>(nodes: &[TreeNode], mut visit: F) -> ControlFlow<()>
where
    F: FnMut(&TreeNode) -> ControlFlow<()>,
{
    fn walk<F>(nodes: &[TreeNode], visit: &mut F) -> ControlFlow<()>
    where
        F: FnMut(&TreeNode) -> ControlFlow<()>,
    {
        for node in nodes {
            visit(node)?;
            if node.is_expanded() {
                walk(&node.children, visit)?;
            }
        }
        ControlFlow::Continue(())
    }
    walk(nodes, &mut visit)
}

/// Mutable version of [`depth_first_traverse`].
///
/// Whether to descend is decided after `visit` returns, so a visitor that
/// changes a node's expansion changes what is walked next.
pub fn depth_first_traverse_mut<F>(nodes: &mut [TreeNode], mut visit: F) -> ControlFlow<()>
where
    F: FnMut(&mut TreeNode) -> ControlFlow<()>,
{
    fn walk<F>(nodes: &mut [TreeNode], visit: &mut F) -> ControlFlow<()>
    where
        F: FnMut(&mut TreeNode) -> ControlFlow<()>,
    {
        for node in nodes {
            visit(node)?;
            if node.is_expanded() {
                walk(&mut node.children, visit)?;
            }
        }
        ControlFlow::Continue(())
    }
    walk(nodes, &mut visit)
}

/// Visit every node, expanded or not, with its path.
///
/// Only used where hidden nodes matter too: clearing the focusable flag and
/// settling focus bindings.
pub fn for_each_node_mut<F>(nodes: &mut [TreeNode], mut visit: F)
where
    F: FnMut(&NodePath, &mut TreeNode),
{
    fn walk<F>(nodes: &mut [TreeNode], parent: Option<&NodePath>, visit: &mut F)
    where
        F: FnMut(&NodePath, &mut TreeNode),
    {
        for (index, node) in nodes.iter_mut().enumerate() {
            let path = match parent {
                Some(parent) => parent.child(index),
                None => NodePath::root(index),
            };
            visit(&path, node);
            walk(&mut node.children, Some(&path), visit);
        }
    }
    walk(nodes, None, &mut visit);
}

/// Flatten the visible nodes into depth-first order.
pub fn visible_nodes(nodes: &[TreeNode]) -> Vec<VisibleNode> {
    let mut out = Vec::new();
    collect_visible(nodes, None, &mut out);
    out
}

/// Recursively collect visible nodes into the flat list.
fn collect_visible(nodes: &[TreeNode], parent: Option<&NodePath>, out: &mut Vec<VisibleNode>) {
    for (index, node) in nodes.iter().enumerate() {
        let path = match parent {
            Some(parent) => parent.child(index),
            None => NodePath::root(index),
        };
        let is_expanded = node.is_expanded();
        let has_children = node.has_children();

        out.push(VisibleNode {
            depth: path.depth(),
            path: path.clone(),
            has_children,
            is_expanded,
        });

        if is_expanded && has_children {
            collect_visible(&node.children, Some(&path), out);
        }
    }
}

/// Get a node by path.
pub fn node_at<'a>(nodes: &'a [TreeNode], path: &NodePath) -> Option<&'a TreeNode> {
    let (first, rest) = path.indexes().split_first()?;
    let mut node = nodes.get(*first)?;
    for index in rest {
        node = node.children.get(*index)?;
    }
    Some(node)
}

/// Get a node by path, mutably.
pub fn node_at_mut<'a>(nodes: &'a mut [TreeNode], path: &NodePath) -> Option<&'a mut TreeNode> {
    let (first, rest) = path.indexes().split_first()?;
    let mut node = nodes.get_mut(*first)?;
    for index in rest {
        node = node.children.get_mut(*index)?;
    }
    Some(node)
}

/// `path` itself when the node is visible, otherwise its closest visible
/// ancestor: the first collapsed node on the way down.
pub fn nearest_visible(nodes: &[TreeNode], path: &NodePath) -> Option<NodePath> {
    let (first, rest) = path.indexes().split_first()?;
    let mut node = nodes.get(*first)?;
    let mut visible = NodePath::root(*first);
    for index in rest {
        if !node.is_expanded() {
            break;
        }
        node = node.children.get(*index)?;
        visible = visible.child(*index);
    }
    Some(visible)
}

/// Find a node's path by identity, searching hidden nodes too.
pub fn find_path(nodes: &[TreeNode], key: &NodeKey) -> Option<NodePath> {
    fn search(nodes: &[TreeNode], parent: Option<&NodePath>, key: &NodeKey) -> Option<NodePath> {
        for (index, node) in nodes.iter().enumerate() {
            let path = match parent {
                Some(parent) => parent.child(index),
                None => NodePath::root(index),
            };
            if node.has_key(key) {
                return Some(path);
            }
            if let Some(found) = search(&node.children, Some(&path), key) {
                return Some(found);
            }
        }
        None
    }
    search(nodes, None, key)
}

/// Find the path of the focusable node, if any.
pub fn focusable_path(nodes: &[TreeNode]) -> Option<NodePath> {
    fn search(nodes: &[TreeNode], parent: Option<&NodePath>) -> Option<NodePath> {
        for (index, node) in nodes.iter().enumerate() {
            let path = match parent {
                Some(parent) => parent.child(index),
                None => NodePath::root(index),
            };
            if node.is_focusable() {
                return Some(path);
            }
            if let Some(found) = search(&node.children, Some(&path)) {
                return Some(found);
            }
        }
        None
    }
    search(nodes, None)
}
