//! Errors raised while loading tree models.
//!
//! Navigation and selection never fail: boundaries, empty trees and unknown
//! keys are no-ops. Only turning external data into nodes can go wrong.

use thiserror::Error;

/// Errors from building a tree out of JSON.
#[derive(Debug, Error)]
pub enum TreeError {
    /// The input was not valid JSON.
    #[error("invalid tree json: {0}")]
    Json(#[from] serde_json::Error),

    /// The root was neither an array of nodes nor a single node.
    #[error("tree root must be an array or an object, found {0}")]
    InvalidRoot(&'static str),

    /// A node was not a JSON object.
    #[error("tree node must be an object, found {0}")]
    NodeNotObject(&'static str),

    /// A node's children property held something other than an array.
    #[error("children property `{property}` must be an array, found {found}")]
    ChildrenNotArray {
        /// Name of the children property.
        property: String,
        /// JSON type that was found.
        found: &'static str,
    },

    /// A node's `treeNodeSpec` block could not be parsed.
    #[error("invalid treeNodeSpec: {0}")]
    InvalidSpec(#[source] serde_json::Error),
}

/// Name of a JSON value's type, for error messages.
pub(crate) fn json_type_name(value: &serde_json::Value) -> &'static str {
    use serde_json::Value;
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
