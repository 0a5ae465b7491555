use treeview::aria::{
    NodeAria, aria_selected, expander_element_id, input_element_id, node_element_id,
};
use treeview::config::TreeId;
use treeview::node::TreeNode;
use treeview::selection::SelectionMode;

#[test]
fn test_aria_selected_by_mode() {
    let selected = TreeNode::new("a", "A").selectable(true).selected(true);
    let unselected = TreeNode::new("b", "B").selectable(true);
    let unselectable = TreeNode::new("c", "C").selected(true);

    assert_eq!(aria_selected(&selected, SelectionMode::None), None);
    assert_eq!(aria_selected(&selected, SelectionMode::Single), Some(true));
    assert_eq!(aria_selected(&unselected, SelectionMode::Single), None);
    assert_eq!(
        aria_selected(&selected, SelectionMode::SelectionFollowsFocus),
        Some(true)
    );
    assert_eq!(
        aria_selected(&unselected, SelectionMode::SelectionFollowsFocus),
        None
    );
    assert_eq!(aria_selected(&selected, SelectionMode::Multiple), Some(true));
    assert_eq!(aria_selected(&unselected, SelectionMode::Multiple), Some(false));
    assert_eq!(aria_selected(&unselectable, SelectionMode::Multiple), None);
}

#[test]
fn test_aria_expanded_only_when_expandable() {
    let tree_id = TreeId::new("tree");
    let leaf = TreeNode::new("a", "A").expanded(true);
    assert_eq!(NodeAria::for_node(&tree_id, &leaf, SelectionMode::None).expanded, None);

    let parent = TreeNode::new("p", "P").with_children(vec![TreeNode::new("c", "C")]);
    assert_eq!(
        NodeAria::for_node(&tree_id, &parent, SelectionMode::None).expanded,
        Some(false)
    );

    let mut fixed = parent.clone().expanded(true);
    fixed.spec.expandable = false;
    assert_eq!(NodeAria::for_node(&tree_id, &fixed, SelectionMode::None).expanded, None);
}

#[test]
fn test_element_ids() {
    let tree_id = TreeId::new("tree-id");
    let node = TreeNode::new(7, "Seven");
    assert_eq!(node_element_id(&tree_id, &node), "tree-id-7");
    assert_eq!(expander_element_id(&tree_id, &node), "tree-id-7-exp");
    assert_eq!(input_element_id(&tree_id, &node), "tree-id-7-input");
}

#[test]
fn test_attributes_omit_absent_values() {
    let tree_id = TreeId::new("t");
    let node = TreeNode::new("a", "A");
    let attrs = NodeAria::for_node(&tree_id, &node, SelectionMode::None).attributes();
    assert_eq!(
        attrs,
        vec![
            ("id", "t-a".to_string()),
            ("role", "treeitem".to_string()),
            ("tabindex", "-1".to_string()),
        ]
    );
}
