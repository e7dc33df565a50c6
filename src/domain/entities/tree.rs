//! Arena-indexed tree
//!
//! Nodes are stored in pre-order, so a parent always precedes its children
//! and a node's descendants occupy the contiguous range right after it.
//! Each entry keeps a parent index, which makes ancestor walks O(depth).

use std::collections::HashMap;

use crate::domain::value_objects::NodeId;
use crate::error::{CanopyError, CanopyResult};

use super::node::{TreeInput, TreeNode};

#[derive(Debug, Clone)]
struct NodeEntry {
    id: NodeId,
    label: String,
    disabled: bool,
    icon: Option<String>,
    data: Option<serde_json::Value>,
    parent: Option<usize>,
    children: Vec<usize>,
    depth: usize,
    /// Number of entries in this subtree, including the node itself
    subtree_len: usize,
}

/// An immutable, indexed tree built once per tree version
#[derive(Debug, Clone, Default)]
pub struct Tree {
    entries: Vec<NodeEntry>,
    roots: Vec<usize>,
    index: HashMap<NodeId, usize>,
}

impl Tree {
    /// Index a tree from root nodes.
    ///
    /// Fails on duplicate or empty ids.
    pub fn from_nodes(roots: Vec<TreeNode>) -> CanopyResult<Self> {
        let mut tree = Tree::default();

        // (node, parent, depth); children pushed reversed so pops stay in order
        let mut stack: Vec<(TreeNode, Option<usize>, usize)> =
            roots.into_iter().rev().map(|n| (n, None, 0)).collect();

        while let Some((node, parent, depth)) = stack.pop() {
            if node.id.is_empty() {
                return Err(CanopyError::EmptyNodeId { label: node.label });
            }
            let idx = tree.entries.len();
            if tree.index.insert(node.id.clone(), idx).is_some() {
                return Err(CanopyError::DuplicateNodeId { id: node.id });
            }

            match parent {
                Some(p) => tree.entries[p].children.push(idx),
                None => tree.roots.push(idx),
            }

            let TreeNode {
                id,
                label,
                children,
                disabled,
                icon,
                data,
            } = node;

            tree.entries.push(NodeEntry {
                id,
                label,
                disabled,
                icon,
                data,
                parent,
                children: Vec::with_capacity(children.len()),
                depth,
                subtree_len: 1,
            });

            stack.extend(children.into_iter().rev().map(|c| (c, Some(idx), depth + 1)));
        }

        for idx in (0..tree.entries.len()).rev() {
            if let Some(p) = tree.entries[idx].parent {
                tree.entries[p].subtree_len += tree.entries[idx].subtree_len;
            }
        }

        tracing::debug!(
            nodes = tree.entries.len(),
            roots = tree.roots.len(),
            "indexed tree"
        );
        Ok(tree)
    }

    /// Resolve an input variant and index it
    pub fn from_input(input: TreeInput) -> CanopyResult<Self> {
        Self::from_nodes(input.into_nodes())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Root-level nodes in order
    pub fn roots(&self) -> impl Iterator<Item = NodeRef<'_>> + '_ {
        self.roots.iter().map(move |&idx| self.at(idx))
    }

    /// Look up a node, failing with `InvalidNodeId` when absent
    pub fn node(&self, id: &str) -> CanopyResult<NodeRef<'_>> {
        self.get(id).ok_or_else(|| CanopyError::invalid_node(id))
    }

    pub fn get(&self, id: &str) -> Option<NodeRef<'_>> {
        self.index.get(id).map(|&idx| self.at(idx))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// All nodes in pre-order
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = NodeRef<'_>> + '_ {
        (0..self.entries.len()).map(move |idx| self.at(idx))
    }

    pub fn leaves(&self) -> impl Iterator<Item = NodeRef<'_>> + '_ {
        self.iter().filter(|n| n.is_leaf())
    }

    pub fn leaf_count(&self) -> usize {
        self.leaves().count()
    }

    pub(crate) fn at(&self, idx: usize) -> NodeRef<'_> {
        NodeRef { tree: self, idx }
    }
}

/// Borrowed handle to a node inside a `Tree`
#[derive(Clone, Copy)]
pub struct NodeRef<'a> {
    tree: &'a Tree,
    idx: usize,
}

impl<'a> NodeRef<'a> {
    fn entry(&self) -> &'a NodeEntry {
        &self.tree.entries[self.idx]
    }

    pub fn id(&self) -> &'a NodeId {
        &self.entry().id
    }

    pub fn label(&self) -> &'a str {
        &self.entry().label
    }

    pub fn is_disabled(&self) -> bool {
        self.entry().disabled
    }

    pub fn icon(&self) -> Option<&'a str> {
        self.entry().icon.as_deref()
    }

    pub fn data(&self) -> Option<&'a serde_json::Value> {
        self.entry().data.as_ref()
    }

    /// Depth level (0 = root)
    pub fn depth(&self) -> usize {
        self.entry().depth
    }

    /// A node with an empty children list is a leaf
    pub fn is_leaf(&self) -> bool {
        self.entry().children.is_empty()
    }

    pub fn parent(&self) -> Option<NodeRef<'a>> {
        self.entry().parent.map(|p| self.tree.at(p))
    }

    pub fn children(&self) -> impl DoubleEndedIterator<Item = NodeRef<'a>> + 'a {
        let tree = self.tree;
        self.entry().children.iter().map(move |&c| tree.at(c))
    }

    /// All descendants in pre-order, excluding the node itself
    pub fn descendants(&self) -> impl DoubleEndedIterator<Item = NodeRef<'a>> + 'a {
        let tree = self.tree;
        let start = self.idx + 1;
        let end = self.idx + self.entry().subtree_len;
        (start..end).map(move |idx| tree.at(idx))
    }

    /// Ancestor chain, nearest parent first
    pub fn ancestors(&self) -> Ancestors<'a> {
        Ancestors {
            tree: self.tree,
            next: self.entry().parent,
        }
    }

    /// Whether this is the last child of its parent (or the last root)
    pub fn is_last_sibling(&self) -> bool {
        let siblings = match self.entry().parent {
            Some(p) => &self.tree.entries[p].children,
            None => &self.tree.roots,
        };
        siblings.last() == Some(&self.idx)
    }

    pub(crate) fn index(&self) -> usize {
        self.idx
    }
}

impl std::fmt::Debug for NodeRef<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", self.id())
            .field("label", &self.label())
            .finish()
    }
}

/// Iterator over a node's ancestors
pub struct Ancestors<'a> {
    tree: &'a Tree,
    next: Option<usize>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = NodeRef<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.next?;
        self.next = self.tree.entries[idx].parent;
        Some(self.tree.at(idx))
    }
}
