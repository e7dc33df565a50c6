//! Check-state propagation
//!
//! Pure functions over `(&Tree, &SelectionState)` that return a new snapshot.
//! A check change is pushed down to every descendant first; only then are the
//! ancestors recomputed, nearest first, from their immediate children.

use std::collections::BTreeSet;

use crate::domain::entities::{NodeRef, SelectionState, Tree};
use crate::domain::value_objects::{CheckState, NodeId};
use crate::error::CanopyResult;

/// Set the checked state of a node and propagate it.
///
/// Requests targeting a disabled node are rejected and return the state
/// unchanged. Unknown ids fail with `InvalidNodeId`.
pub fn toggle_check(
    tree: &Tree,
    state: &SelectionState,
    id: &str,
    checked: bool,
) -> CanopyResult<SelectionState> {
    let node = tree.node(id)?;
    if node.is_disabled() {
        tracing::debug!(node = %node.id(), "check request on disabled node rejected");
        return Ok(state.clone());
    }

    let mut next = state.clone();
    apply_check(&mut next, node, checked);
    Ok(next)
}

/// Direct user click on a node's checkbox.
///
/// Indeterminate is derived, so clicking a partially checked node checks it.
pub fn click_check(tree: &Tree, state: &SelectionState, id: &str) -> CanopyResult<SelectionState> {
    let checked = state.check_state(id).clicked();
    toggle_check(tree, state, id, checked)
}

/// Downward then upward propagation, with no disabled guard
pub(crate) fn apply_check(state: &mut SelectionState, node: NodeRef<'_>, checked: bool) {
    let target = if checked {
        CheckState::Checked
    } else {
        CheckState::Unchecked
    };

    state.set_check_state(node.id(), target);
    for descendant in node.descendants() {
        state.set_check_state(descendant.id(), target);
    }

    for ancestor in node.ancestors() {
        let aggregate = aggregate_children(state, ancestor);
        tracing::trace!(node = %ancestor.id(), state = ?aggregate, "recomputed ancestor");
        state.set_check_state(ancestor.id(), aggregate);
    }

    tracing::debug!(node = %node.id(), checked, "propagated check state");
}

/// Aggregate state of an internal node from its immediate children
fn aggregate_children(state: &SelectionState, node: NodeRef<'_>) -> CheckState {
    let mut total = 0usize;
    let mut checked = 0usize;
    let mut partial = false;

    for child in node.children() {
        total += 1;
        match state.check_state(child.id().as_str()) {
            CheckState::Checked => checked += 1,
            CheckState::Indeterminate => partial = true,
            CheckState::Unchecked => {}
        }
    }

    if total > 0 && checked == total {
        CheckState::Checked
    } else if checked == 0 && !partial {
        CheckState::Unchecked
    } else {
        CheckState::Indeterminate
    }
}

/// Recompute every internal node bottom-up from its children.
///
/// Leaves keep their membership as-is. Pre-order indexing means walking the
/// tree in reverse visits every child before its parent.
pub fn recompute_all(tree: &Tree, state: &SelectionState) -> SelectionState {
    let mut next = state.clone();
    for node in tree.iter().rev() {
        if node.is_leaf() {
            if next.is_indeterminate(node.id().as_str()) {
                next.set_check_state(node.id(), CheckState::Unchecked);
            }
            continue;
        }
        let aggregate = aggregate_children(&next, node);
        next.set_check_state(node.id(), aggregate);
    }
    next
}

/// Check every enabled leaf
pub fn check_all(tree: &Tree, state: &SelectionState) -> SelectionState {
    set_enabled_leaves(tree, state, |_| true)
}

/// Uncheck every enabled leaf
pub fn uncheck_all(tree: &Tree, state: &SelectionState) -> SelectionState {
    set_enabled_leaves(tree, state, |_| false)
}

/// Flip every enabled leaf
pub fn invert(tree: &Tree, state: &SelectionState) -> SelectionState {
    set_enabled_leaves(tree, state, |was_checked| !was_checked)
}

fn set_enabled_leaves(
    tree: &Tree,
    state: &SelectionState,
    decide: impl Fn(bool) -> bool,
) -> SelectionState {
    let mut next = state.clone();
    for leaf in tree.leaves().filter(|n| !n.is_disabled()) {
        let checked = decide(state.is_checked(leaf.id().as_str()));
        let target = if checked {
            CheckState::Checked
        } else {
            CheckState::Unchecked
        };
        next.set_check_state(leaf.id(), target);
    }
    recompute_all(tree, &next)
}

/// Expand or collapse a node.
///
/// Expanding a leaf has no effect; collapsing always clears the id.
pub fn toggle_expand(
    tree: &Tree,
    state: &SelectionState,
    id: &str,
    expanded: bool,
) -> CanopyResult<SelectionState> {
    let node = tree.node(id)?;
    let mut next = state.clone();
    if expanded && node.is_leaf() {
        return Ok(next);
    }
    next.set_expanded(node.id(), expanded);
    Ok(next)
}

/// Select or deselect a node.
///
/// In single-select mode selecting a node replaces the whole selection.
pub fn toggle_select(
    tree: &Tree,
    state: &SelectionState,
    id: &str,
    selected: bool,
    multi_select: bool,
) -> CanopyResult<SelectionState> {
    let node = tree.node(id)?;
    if node.is_disabled() {
        tracing::debug!(node = %node.id(), "select request on disabled node rejected");
        return Ok(state.clone());
    }

    let mut next = state.clone();
    if selected && !multi_select {
        next.replace_selected(BTreeSet::from([node.id().clone()]));
    } else {
        next.set_selected(node.id(), selected);
    }
    Ok(next)
}

/// Checked leaves in tree order
pub fn checked_leaves<'a>(tree: &'a Tree, state: &SelectionState) -> Vec<&'a NodeId> {
    tree.leaves()
        .filter(|n| state.is_checked(n.id().as_str()))
        .map(|n| n.id())
        .collect()
}
