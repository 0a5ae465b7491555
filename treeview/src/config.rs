//! Tree configuration.

use std::sync::atomic::{AtomicUsize, Ordering};

use serde::{Deserialize, Serialize};

use crate::keymap::AriaKeyMap;
use crate::node::PropertyNames;
use crate::selection::SelectionMode;

/// Unique identifier for a tree instance, used as the prefix of element ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TreeId(String);

impl TreeId {
    /// Generate a fresh id.
    pub fn generate() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(format!("treeview-{}", COUNTER.fetch_add(1, Ordering::SeqCst)))
    }

    /// Use a caller-chosen id.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The id as text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for TreeId {
    fn default() -> Self {
        Self::generate()
    }
}

impl std::fmt::Display for TreeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Settings for a tree view.
///
/// ```ignore
/// let config = TreeConfig::new()
///     .tree_id("files")
///     .id_property("path")
///     .selection_mode(SelectionMode::Single);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TreeConfig {
    /// Prefix for element ids.
    pub tree_id: TreeId,
    /// Property names used when a node does not override them.
    pub property_names: PropertyNames,
    /// Initial selection mode.
    pub selection_mode: SelectionMode,
    /// Keyboard bindings.
    pub key_map: AriaKeyMap,
}

impl TreeConfig {
    /// Default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the tree id.
    pub fn tree_id(mut self, id: impl Into<String>) -> Self {
        self.tree_id = TreeId::new(id);
        self
    }

    /// Set the default identity property.
    pub fn id_property(mut self, name: impl Into<String>) -> Self {
        self.property_names.id = name.into();
        self
    }

    /// Set the default label property.
    pub fn label_property(mut self, name: impl Into<String>) -> Self {
        self.property_names.label = name.into();
        self
    }

    /// Set the default children property.
    pub fn children_property(mut self, name: impl Into<String>) -> Self {
        self.property_names.children = name.into();
        self
    }

    /// Set the initial selection mode.
    pub fn selection_mode(mut self, mode: SelectionMode) -> Self {
        self.selection_mode = mode;
        self
    }

    /// Replace the key map.
    pub fn key_map(mut self, key_map: AriaKeyMap) -> Self {
        self.key_map = key_map;
        self
    }
}
