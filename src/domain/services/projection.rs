//! View projection
//!
//! Flattens `(Tree, SelectionState, filter)` into the ordered rows a renderer
//! draws. Pure: the same inputs always give the same rows.

use serde::Serialize;

use crate::domain::entities::{NodeRef, SelectionState, Tree};
use crate::domain::value_objects::{CheckState, NodeId};

use super::filter::VisibleNodeSet;

/// A flattened, render-ready tree row
///
/// Rows come in pre-order, so connector lines can be rebuilt from the
/// `depth` and `is_last` of the rows above.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderRow {
    pub id: NodeId,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Depth level (0 = root)
    pub depth: usize,
    /// Last among its visible siblings
    pub is_last: bool,
    pub check: CheckState,
    pub expanded: bool,
    pub selected: bool,
    pub disabled: bool,
    /// Whether any child is visible under the current filter
    pub has_children: bool,
}

impl RenderRow {
    pub fn is_checked(&self) -> bool {
        self.check.is_checked()
    }

    pub fn is_indeterminate(&self) -> bool {
        self.check.is_indeterminate()
    }
}

/// Project the tree into rows, descending only into expanded nodes.
///
/// A node counts as expanded when it is in `state.expanded` or the filter
/// force-expanded it. Walks with an explicit stack, so depth is bounded by
/// memory rather than the call stack.
pub fn project(
    tree: &Tree,
    state: &SelectionState,
    filter: Option<&VisibleNodeSet>,
) -> Vec<RenderRow> {
    let mut rows = Vec::new();

    // (node, is_last); siblings pushed reversed so pops stay in order
    let mut stack: Vec<(NodeRef<'_>, bool)> = Vec::new();
    push_siblings(&mut stack, visible(tree.roots(), filter).collect());

    while let Some((node, is_last)) = stack.pop() {
        let id = node.id().as_str();
        let children: Vec<NodeRef<'_>> = visible(node.children(), filter).collect();
        let expanded =
            state.is_expanded(id) || filter.is_some_and(|f| f.is_auto_expanded(id));

        rows.push(RenderRow {
            id: node.id().clone(),
            label: node.label().to_string(),
            icon: node.icon().map(str::to_string),
            depth: node.depth(),
            is_last,
            check: state.check_state(id),
            expanded,
            selected: state.is_selected(id),
            disabled: node.is_disabled(),
            has_children: !children.is_empty(),
        });

        if expanded {
            push_siblings(&mut stack, children);
        }
    }
    rows
}

fn push_siblings<'a>(stack: &mut Vec<(NodeRef<'a>, bool)>, siblings: Vec<NodeRef<'a>>) {
    let last = siblings.len().saturating_sub(1);
    stack.extend(
        siblings
            .into_iter()
            .enumerate()
            .rev()
            .map(|(i, node)| (node, i == last)),
    );
}

fn visible<'a>(
    nodes: impl Iterator<Item = NodeRef<'a>>,
    filter: Option<&'a VisibleNodeSet>,
) -> impl Iterator<Item = NodeRef<'a>> {
    nodes.filter(move |n| filter.map_or(true, |f| f.is_visible(n.id().as_str())))
}
