//! Node identity values.

use std::fmt;

use serde_json::Value;

/// Identity of a node, read from its identity property.
///
/// Only strings and numbers are valid identities. A string never equals a
/// number, so `"1"` and `1` are different nodes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NodeKey {
    /// A numeric identity, stored as its JSON text.
    Number(String),
    /// A string identity.
    Text(String),
}

impl NodeKey {
    /// Build a key from a JSON value. Returns `None` for anything that is not
    /// a string or a number.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(Self::Text(s.clone())),
            Value::Number(n) => Some(Self::Number(n.to_string())),
            _ => None,
        }
    }

    /// Whether `value` holds this identity.
    pub fn matches(&self, value: &Value) -> bool {
        match (self, value) {
            (Self::Text(key), Value::String(s)) => key == s,
            (Self::Number(key), Value::Number(n)) => *key == n.to_string(),
            _ => false,
        }
    }

    /// The identity as plain text, as used in element ids.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Number(s) | Self::Text(s) => s,
        }
    }
}

impl fmt::Display for NodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for NodeKey {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for NodeKey {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<i64> for NodeKey {
    fn from(n: i64) -> Self {
        Self::Number(n.to_string())
    }
}

impl From<u64> for NodeKey {
    fn from(n: u64) -> Self {
        Self::Number(n.to_string())
    }
}
