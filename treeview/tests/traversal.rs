use std::ops::ControlFlow;

use treeview::node::{NodeKey, TreeNode};
use treeview::traversal::{
    NodePath, depth_first_traverse, find_path, nearest_visible, node_at, visible_nodes,
};

/// `[A(expanded) [B, C], D [E]]`
fn sample() -> Vec<TreeNode> {
    vec![
        TreeNode::new("a", "A")
            .expanded(true)
            .with_children(vec![TreeNode::new("b", "B"), TreeNode::new("c", "C")]),
        TreeNode::new("d", "D").with_children(vec![TreeNode::new("e", "E")]),
    ]
}

// ============================================================================
// Depth-first traversal
// ============================================================================

#[test]
fn test_traverse_skips_collapsed_children() {
    let nodes = sample();
    let mut seen = Vec::new();
    let _ = depth_first_traverse(&nodes, |node| {
        seen.push(node.label().unwrap_or_default().to_string());
        ControlFlow::Continue(())
    });
    assert_eq!(seen, ["A", "B", "C", "D"]);
}

#[test]
fn test_traverse_stops_on_break() {
    let nodes = sample();
    let mut seen = 0;
    let flow = depth_first_traverse(&nodes, |node| {
        seen += 1;
        if node.has_key(&NodeKey::from("b")) {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    });
    assert_eq!(flow, ControlFlow::Break(()));
    assert_eq!(seen, 2);
}

#[test]
fn test_visible_nodes_paths() {
    let visible = visible_nodes(&sample());
    let paths: Vec<String> = visible.iter().map(|v| v.path.to_string()).collect();
    assert_eq!(paths, ["/0", "/0/0", "/0/1", "/1"]);
    assert_eq!(visible[1].depth, 1);
    assert!(visible[3].has_children);
    assert!(!visible[3].is_expanded);
}

// ============================================================================
// Lookup
// ============================================================================

#[test]
fn test_find_path_searches_hidden_nodes() {
    let nodes = sample();
    let path = find_path(&nodes, &NodeKey::from("e")).unwrap();
    assert_eq!(path.indexes(), &[1, 0]);
    assert_eq!(node_at(&nodes, &path).and_then(TreeNode::label), Some("E"));
    assert!(find_path(&nodes, &NodeKey::from("zzz")).is_none());
}

#[test]
fn test_nearest_visible() {
    let nodes = sample();
    let shown = NodePath::root(0).child(1);
    assert_eq!(nearest_visible(&nodes, &shown), Some(shown));

    let hidden = NodePath::root(1).child(0);
    assert_eq!(nearest_visible(&nodes, &hidden), Some(NodePath::root(1)));

    assert_eq!(nearest_visible(&nodes, &NodePath::root(5)), None);
}

#[test]
fn test_nearest_visible_stops_at_first_collapsed_ancestor() {
    let nodes = vec![
        TreeNode::new("a", "A").with_children(vec![
            TreeNode::new("b", "B")
                .expanded(true)
                .with_children(vec![TreeNode::new("c", "C")]),
        ]),
    ];
    let deep = NodePath::root(0).child(0).child(0);
    assert_eq!(nearest_visible(&nodes, &deep), Some(NodePath::root(0)));
}

#[test]
fn test_path_relations() {
    let parent = NodePath::root(0);
    let child = parent.child(1);
    assert_eq!(child.parent(), Some(parent.clone()));
    assert!(parent.is_ancestor_of(&child));
    assert!(!child.is_ancestor_of(&parent));
    assert!(!parent.is_ancestor_of(&parent));
    assert_eq!(parent.parent(), None);
}
