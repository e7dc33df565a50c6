//! Search/filter overlay
//!
//! Prunes the visible node set by a text predicate. A node stays visible when
//! it matches or any descendant does; nodes kept only for a descendant are
//! force-expanded while the filter is active. Selection state is never read
//! or written here.

use std::collections::BTreeSet;

use crate::domain::entities::{NodeRef, Tree};
use crate::domain::value_objects::NodeId;

/// Predicate deciding whether a node matches a query
pub trait NodeMatcher: Send + Sync {
    fn matches(&self, node: NodeRef<'_>, query: &str) -> bool;
}

impl<F> NodeMatcher for F
where
    F: Fn(NodeRef<'_>, &str) -> bool + Send + Sync,
{
    fn matches(&self, node: NodeRef<'_>, query: &str) -> bool {
        self(node, query)
    }
}

/// Case-insensitive substring match over the label (the default)
#[derive(Debug, Clone, Copy, Default)]
pub struct LabelContains;

impl NodeMatcher for LabelContains {
    fn matches(&self, node: NodeRef<'_>, query: &str) -> bool {
        node.label().to_lowercase().contains(&query.to_lowercase())
    }
}

/// Case-sensitive substring match over the label
#[derive(Debug, Clone, Copy, Default)]
pub struct CaseSensitive;

impl NodeMatcher for CaseSensitive {
    fn matches(&self, node: NodeRef<'_>, query: &str) -> bool {
        node.label().contains(query)
    }
}

/// Result of applying a filter to a tree
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisibleNodeSet {
    query: String,
    visible: BTreeSet<NodeId>,
    matched: BTreeSet<NodeId>,
    auto_expanded: BTreeSet<NodeId>,
}

impl VisibleNodeSet {
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Nodes to display
    pub fn visible(&self) -> &BTreeSet<NodeId> {
        &self.visible
    }

    /// Nodes that matched the query themselves
    pub fn matched(&self) -> &BTreeSet<NodeId> {
        &self.matched
    }

    /// Nodes kept only because a descendant matched
    pub fn auto_expanded(&self) -> &BTreeSet<NodeId> {
        &self.auto_expanded
    }

    pub fn is_visible(&self, id: &str) -> bool {
        self.visible.contains(id)
    }

    pub fn is_auto_expanded(&self, id: &str) -> bool {
        self.auto_expanded.contains(id)
    }

    pub fn len(&self) -> usize {
        self.visible.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }
}

/// Apply a text filter to the tree.
///
/// Single reverse pre-order pass: every child is settled before its parent.
pub fn apply_filter(tree: &Tree, query: &str, matcher: &dyn NodeMatcher) -> VisibleNodeSet {
    let mut self_match = vec![false; tree.len()];
    let mut subtree_match = vec![false; tree.len()];

    for node in tree.iter().rev() {
        let idx = node.index();
        let matched = matcher.matches(node, query);
        let keep = matched || node.children().any(|c| subtree_match[c.index()]);
        self_match[idx] = matched;
        subtree_match[idx] = keep;
    }

    let mut result = VisibleNodeSet {
        query: query.to_string(),
        ..Default::default()
    };

    for node in tree.iter() {
        let idx = node.index();
        if !subtree_match[idx] {
            continue;
        }
        result.visible.insert(node.id().clone());
        if self_match[idx] {
            result.matched.insert(node.id().clone());
        } else {
            result.auto_expanded.insert(node.id().clone());
        }
    }

    tracing::debug!(
        query,
        visible = result.visible.len(),
        matched = result.matched.len(),
        "applied filter"
    );
    result
}
