//! Shared helpers for integration tests.
#![allow(dead_code)]

use serde_json::{Map, Value, json};
use simplelog::{Config, LevelFilter, TestLogger};
use treeview::node::{NodeKey, PropertyNames, TreeNode};

/// One entry in a generated tree: a node code or the children of the
/// preceding node.
pub enum Gen {
    Node(&'static str),
    Children(Vec<Gen>),
}

/// A node code. Letters set state on the generated node:
///
/// - `e` expandable, `E` expandable and expanded
/// - `s` selectable, `S` selectable and selected
/// - `f` focusable
/// - `c` checkbox, `C` checked checkbox
/// - `!` disabled
pub fn n(code: &'static str) -> Gen {
    Gen::Node(code)
}

/// Children of the preceding node.
pub fn kids(children: Vec<Gen>) -> Gen {
    Gen::Children(children)
}

/// Generate nodes with ids `n0`, `n1`, ... and children `n0n0`, `n0n1`, ...
pub fn generate_nodes(spec: Vec<Gen>) -> Vec<TreeNode> {
    generate_values(spec, "")
        .into_iter()
        .map(|value| TreeNode::from_value(value, &PropertyNames::default()).unwrap())
        .collect()
}

fn generate_values(spec: Vec<Gen>, prefix: &str) -> Vec<Value> {
    let mut out: Vec<Value> = Vec::new();
    for entry in spec {
        match entry {
            Gen::Node(code) => {
                let id = format!("{}n{}", prefix, out.len());
                out.push(node_value(&id, code));
            }
            Gen::Children(children) => {
                let parent = out.last_mut().expect("children need a preceding node");
                let id = parent["id"].as_str().unwrap_or_default().to_string();
                parent["children"] = Value::Array(generate_values(children, &id));
            }
        }
    }
    out
}

fn node_value(id: &str, code: &str) -> Value {
    let mut spec = Map::new();
    spec.insert("expandable".into(), json!(code.contains('e') || code.contains('E')));
    spec.insert("selectable".into(), json!(code.contains('s') || code.contains('S')));
    spec.insert("focusable".into(), json!(code.contains('f')));
    spec.insert("disabled".into(), json!(code.contains('!')));
    if code.contains('c') || code.contains('C') {
        spec.insert("input".into(), json!({ "type": "checkbox" }));
    }
    spec.insert(
        "state".into(),
        json!({
            "expanded": code.contains('E'),
            "selected": code.contains('S'),
            "input": { "value": code.contains('C') },
        }),
    );
    json!({
        "id": id,
        "label": format!("Node {id}"),
        "treeNodeSpec": Value::Object(spec),
    })
}

pub fn key(id: &str) -> NodeKey {
    NodeKey::from(id)
}

/// Ids of focusable nodes, hidden ones included, depth-first.
pub fn focused_ids(nodes: &[TreeNode]) -> Vec<String> {
    collect(nodes, &|node| node.is_focusable())
}

/// Ids of selected nodes, hidden ones included, depth-first.
pub fn selected_ids(nodes: &[TreeNode]) -> Vec<String> {
    collect(nodes, &|node| node.is_selected())
}

fn collect(nodes: &[TreeNode], pred: &dyn Fn(&TreeNode) -> bool) -> Vec<String> {
    let mut out = Vec::new();
    for node in nodes {
        if pred(node) {
            out.push(node.key().map(|k| k.to_string()).unwrap_or_default());
        }
        out.extend(collect(&node.children, pred));
    }
    out
}

pub fn init_logging() {
    let _ = TestLogger::init(LevelFilter::Trace, Config::default());
}
