//! Tree input entities
//!
//! Two input styles describe the same hierarchy: a declarative node array and
//! a composed list of nested items. Both are resolved into `TreeNode`s once, at
//! the boundary, before the tree is indexed.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::NodeId;

/// A node in the caller-supplied hierarchy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeNode {
    /// Unique across the whole tree
    pub id: NodeId,
    /// Display label
    pub label: String,
    /// Child nodes (empty for leaves)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TreeNode>,
    /// Disabled nodes reject direct check/select requests
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub disabled: bool,
    /// Optional icon shown before the label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Caller data carried along untouched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl TreeNode {
    /// Create a new tree node
    pub fn new(id: impl Into<NodeId>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            children: Vec::new(),
            disabled: false,
            icon: None,
            data: None,
        }
    }

    /// Check if this is a leaf node
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Add a child node
    pub fn add_child(&mut self, child: TreeNode) {
        self.children.push(child);
    }

    /// Builder-style `add_child`
    pub fn with_child(mut self, child: TreeNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = TreeNode>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}

/// An item in the composed (nested children) input style
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComposedItem {
    /// Becomes the node id
    pub value: NodeId,
    pub label: String,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub items: Vec<ComposedItem>,
}

impl From<ComposedItem> for TreeNode {
    fn from(item: ComposedItem) -> Self {
        TreeNode {
            id: item.value,
            label: item.label,
            children: item.items.into_iter().map(TreeNode::from).collect(),
            disabled: item.disabled,
            icon: item.icon,
            data: None,
        }
    }
}

/// Tree input, tagged by style
///
/// ```json
/// { "kind": "declarative", "nodes": [{ "id": "a", "label": "A" }] }
/// { "kind": "composed", "nodes": [{ "value": "a", "label": "A", "items": [] }] }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "nodes", rename_all = "lowercase")]
pub enum TreeInput {
    Declarative(Vec<TreeNode>),
    Composed(Vec<ComposedItem>),
}

impl TreeInput {
    /// Resolve either style into root `TreeNode`s
    pub fn into_nodes(self) -> Vec<TreeNode> {
        match self {
            TreeInput::Declarative(nodes) => nodes,
            TreeInput::Composed(items) => items.into_iter().map(TreeNode::from).collect(),
        }
    }
}

impl From<Vec<TreeNode>> for TreeInput {
    fn from(nodes: Vec<TreeNode>) -> Self {
        TreeInput::Declarative(nodes)
    }
}
