mod common;

use common::{generate_nodes, key, kids, n, selected_ids};
use treeview::TreeView;
use treeview::config::TreeConfig;
use treeview::events::TreeEvent;
use treeview::node::TreeNode;
use treeview::selection::coordinator::exclusively_select;
use treeview::selection::{SelectionCoordinator, SelectionMode};

// ============================================================================
// Mode transitions
// ============================================================================

#[test]
fn test_follows_focus_selects_focused_and_deselects_previous() {
    let mut nodes = generate_nodes(vec![n("Ecsf"), kids(vec![n("ecS"), n("ecs")]), n("ecs")]);
    let mut coordinator = SelectionCoordinator::new(SelectionMode::Single);

    coordinator.set_mode(
        &mut nodes,
        SelectionMode::SelectionFollowsFocus,
        Some(&key("n0")),
    );

    assert!(nodes[0].is_selected());
    assert!(!nodes[0].children[0].is_selected());
}

#[test]
fn test_follows_focus_unselectable_focus_leaves_nothing_selected() {
    let mut nodes = generate_nodes(vec![n("ecf"), n("eS")]);
    let mut coordinator = SelectionCoordinator::new(SelectionMode::Multiple);

    coordinator.set_mode(
        &mut nodes,
        SelectionMode::SelectionFollowsFocus,
        Some(&key("n0")),
    );

    assert!(selected_ids(&nodes).is_empty());
}

#[test]
fn test_single_ignores_collapsed_subtrees() {
    // n0's selected child is hidden, so the first visible selection wins and
    // the hidden one is left as it is.
    let mut nodes = generate_nodes(vec![n("e"), kids(vec![n("S")]), n("S"), n("S")]);
    let mut coordinator = SelectionCoordinator::new(SelectionMode::Multiple);

    coordinator.set_mode(&mut nodes, SelectionMode::Single, None);

    assert_eq!(selected_ids(&nodes), ["n0n0", "n1"]);
}

#[test]
fn test_single_keeps_first_selected() {
    let mut nodes = generate_nodes(vec![n("Es"), kids(vec![n("S"), n("S")]), n("S")]);
    let mut coordinator = SelectionCoordinator::new(SelectionMode::Multiple);
    assert!(coordinator.set_mode(&mut nodes, SelectionMode::Single, None));
    assert_eq!(selected_ids(&nodes), ["n0n0"]);
}

#[test]
fn test_same_mode_does_not_enforce() {
    let mut nodes = generate_nodes(vec![n("S"), n("S")]);
    let mut coordinator = SelectionCoordinator::new(SelectionMode::Single);
    assert!(!coordinator.set_mode(&mut nodes, SelectionMode::Single, None));
    assert_eq!(selected_ids(&nodes), ["n0", "n1"]);
}

#[test]
fn test_multiple_and_none_keep_flags() {
    for mode in [SelectionMode::Multiple, SelectionMode::None] {
        let mut nodes = generate_nodes(vec![n("S"), n("S")]);
        let mut coordinator = SelectionCoordinator::new(SelectionMode::Single);
        coordinator.set_mode(&mut nodes, mode, None);
        assert_eq!(selected_ids(&nodes), ["n0", "n1"]);
    }
}

#[test]
fn test_aria_multiselectable() {
    let value = |mode| SelectionCoordinator::new(mode).aria_multiselectable();
    assert_eq!(value(SelectionMode::None), None);
    assert_eq!(value(SelectionMode::Single), Some(false));
    assert_eq!(value(SelectionMode::Multiple), Some(true));
    assert_eq!(value(SelectionMode::SelectionFollowsFocus), Some(false));
}

// ============================================================================
// Exclusive selection
// ============================================================================

#[test]
fn test_exclusively_select_clears_one_prior_selection() {
    let mut nodes = generate_nodes(vec![n("s"), n("S"), n("s")]);
    exclusively_select(&mut nodes, &key("n2"));
    assert_eq!(selected_ids(&nodes), ["n2"]);
}

#[test]
fn test_handle_selected_change_in_single_mode() {
    let mut nodes = generate_nodes(vec![n("S"), n("S")]);
    let coordinator = SelectionCoordinator::new(SelectionMode::Single);

    let event = coordinator.handle_node_selected_change(&mut nodes, &key("n1"));

    assert_eq!(selected_ids(&nodes), ["n1"]);
    assert_eq!(
        event,
        Some(TreeEvent::SelectedChange {
            key: key("n1"),
            selected: true,
        })
    );
}

#[test]
fn test_handle_selected_change_in_multiple_mode_keeps_others() {
    let mut nodes = generate_nodes(vec![n("S"), n("S")]);
    let coordinator = SelectionCoordinator::new(SelectionMode::Multiple);

    let event = coordinator.handle_node_selected_change(&mut nodes, &key("n1"));

    assert_eq!(selected_ids(&nodes), ["n0", "n1"]);
    assert!(event.is_some());
}

#[test]
fn test_handle_selected_change_unknown_node() {
    let mut nodes = generate_nodes(vec![n("S")]);
    let coordinator = SelectionCoordinator::new(SelectionMode::Single);
    assert_eq!(
        coordinator.handle_node_selected_change(&mut nodes, &key("nope")),
        None
    );
}

// ============================================================================
// Invariants through the tree view
// ============================================================================

fn flat_tree(mode: SelectionMode) -> TreeView {
    let nodes = (0..6)
        .map(|i| TreeNode::new(format!("k{i}"), format!("K{i}")).selectable(true))
        .collect();
    TreeView::new(nodes, TreeConfig::new().selection_mode(mode))
}

#[test]
fn test_single_mode_never_has_two_selected() {
    let mut tree = flat_tree(SelectionMode::Single);
    let script = ["k0", "k3", "k3", "k5", "k1", "k1", "k2", "k4"];
    for id in script {
        tree.toggle_selected(&key(id));
        assert!(tree.selected_keys().len() <= 1, "after toggling {id}");
    }
    tree.set_selected(&key("k0"), true);
    tree.set_selected(&key("k5"), true);
    assert_eq!(tree.selected_keys(), [key("k5")]);
}

#[test]
fn test_follows_focus_tracks_focus() {
    let mut tree = flat_tree(SelectionMode::SelectionFollowsFocus);
    assert_eq!(tree.selected_keys(), [key("k0")]);

    for _ in 0..3 {
        tree.focus_next(false);
        assert_eq!(tree.selected_keys(), vec![tree.focused().cloned().unwrap()]);
    }
    tree.focus_last();
    assert_eq!(tree.selected_keys(), [key("k5")]);
    tree.focus_previous();
    assert_eq!(tree.selected_keys(), [key("k4")]);
}

#[test]
fn test_follows_focus_rejects_direct_edits() {
    let mut tree = flat_tree(SelectionMode::SelectionFollowsFocus);
    assert!(!tree.toggle_selected(&key("k2")));
    assert!(!tree.set_selected(&key("k2"), true));
    assert_eq!(tree.selected_keys(), [key("k0")]);
}

#[test]
fn test_single_to_follows_focus_scenario() {
    let nodes = vec![
        TreeNode::new("A", "A").selectable(true),
        TreeNode::new("B", "B").selectable(true).selected(true),
    ];
    let mut tree = TreeView::new(nodes, TreeConfig::new().selection_mode(SelectionMode::Single));
    assert_eq!(tree.focused(), Some(&key("A")));

    assert!(tree.set_selection_mode(SelectionMode::SelectionFollowsFocus));

    assert!(tree.node(&key("A")).unwrap().is_selected());
    assert!(!tree.node(&key("B")).unwrap().is_selected());
}

#[test]
fn test_none_mode_keeps_flags_but_ignores_toggles() {
    let nodes = vec![
        TreeNode::new("A", "A").selectable(true).selected(true),
        TreeNode::new("B", "B").selectable(true),
    ];
    let mut tree = TreeView::new(nodes, TreeConfig::new());
    assert_eq!(tree.selection_mode(), SelectionMode::None);
    assert_eq!(tree.aria_multiselectable(), None);
    assert!(!tree.toggle_selected(&key("B")));
    assert_eq!(tree.selected_keys(), [key("A")]);
    assert_eq!(tree.node_aria(&key("A")).unwrap().selected, None);
}

#[test]
fn test_toggle_emits_selected_change() {
    let mut tree = flat_tree(SelectionMode::Multiple);
    tree.drain_events();

    assert!(tree.toggle_selected(&key("k1")));
    assert!(tree.toggle_selected(&key("k2")));
    assert!(tree.toggle_selected(&key("k1")));

    assert_eq!(
        tree.drain_events(),
        vec![
            TreeEvent::SelectedChange { key: key("k1"), selected: true },
            TreeEvent::SelectedChange { key: key("k2"), selected: true },
            TreeEvent::SelectedChange { key: key("k1"), selected: false },
        ]
    );
    assert_eq!(tree.aria_multiselectable(), Some(true));
}

#[test]
fn test_disabled_nodes_do_not_toggle() {
    let nodes = vec![TreeNode::new("A", "A").selectable(true).disabled(true)];
    let mut tree = TreeView::new(nodes, TreeConfig::new().selection_mode(SelectionMode::Multiple));
    assert!(!tree.toggle_selected(&key("A")));
    assert!(tree.selected_keys().is_empty());
}

#[test]
fn test_follows_focus_collapse_clears_hidden_selection() {
    let nodes = vec![
        TreeNode::new("A", "A")
            .selectable(true)
            .expanded(true)
            .with_children(vec![TreeNode::new("B", "B").selectable(true)]),
        TreeNode::new("D", "D").selectable(true),
    ];
    let mut tree = TreeView::new(
        nodes,
        TreeConfig::new().selection_mode(SelectionMode::SelectionFollowsFocus),
    );
    tree.focus_next(false);
    assert_eq!(tree.selected_keys(), [key("B")]);

    assert!(tree.collapse(&key("A")));
    assert_eq!(tree.focused(), Some(&key("A")));
    assert_eq!(tree.selected_keys(), [key("A")]);
}

#[test]
fn test_follows_focus_collapse_onto_unselectable_parent() {
    let nodes = vec![
        TreeNode::new("A", "A")
            .expanded(true)
            .with_children(vec![TreeNode::new("B", "B").selectable(true)]),
        TreeNode::new("D", "D").selectable(true),
    ];
    let mut tree = TreeView::new(
        nodes,
        TreeConfig::new().selection_mode(SelectionMode::SelectionFollowsFocus),
    );
    tree.focus_next(false);
    assert_eq!(tree.selected_keys(), [key("B")]);

    tree.collapse(&key("A"));
    assert_eq!(tree.focused(), Some(&key("A")));
    assert!(tree.selected_keys().is_empty());
}

#[test]
fn test_multiple_collapse_keeps_hidden_selection() {
    let nodes = vec![TreeNode::new("A", "A").expanded(true).with_children(vec![
        TreeNode::new("B", "B").selectable(true).selected(true),
    ])];
    let mut tree = TreeView::new(nodes, TreeConfig::new().selection_mode(SelectionMode::Multiple));
    tree.collapse(&key("A"));
    assert_eq!(tree.selected_keys(), [key("B")]);
}
