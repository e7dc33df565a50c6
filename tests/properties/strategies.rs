//! Generators shared by the property suites.

use proptest::prelude::*;

use canopy::domain::services::{
    check_all, click_check, invert, toggle_check, toggle_expand, toggle_select, uncheck_all,
};
use canopy::{CheckState, NodeRef, SelectionState, Tree, TreeNode};

/// Labels drawn from a tiny alphabet so filters actually hit something
const LABEL_PARTS: &[&str] = &["src", "lib", "doc", "test", "main", "util"];

/// A random forest of 1..=max nodes.
///
/// Node `i` picks a parent among `0..i`, or becomes a root, so every
/// generated shape is acyclic by construction.
pub fn arb_tree(max: usize) -> impl Strategy<Value = Tree> {
    let slot = (
        any::<prop::sample::Index>(),
        any::<bool>(),
        0..LABEL_PARTS.len(),
    );
    proptest::collection::vec(slot, 1..=max).prop_map(|specs| {
        let mut slots: Vec<(Option<usize>, TreeNode)> = specs
            .iter()
            .enumerate()
            .map(|(i, (parent, disabled, label))| {
                // index i means "root"
                let pick = parent.index(i + 1);
                let parent = (pick < i).then_some(pick);
                let mut node = TreeNode::new(
                    format!("n{}", i),
                    format!("{}{}", LABEL_PARTS[*label], i),
                );
                node.disabled = *disabled && i % 3 == 0;
                (parent, node)
            })
            .collect();

        // Children always have larger indices than their parent, so
        // folding from the back attaches complete subtrees.
        let mut roots = Vec::new();
        while let Some((parent, node)) = slots.pop() {
            match parent {
                Some(p) => slots[p].1.children.insert(0, node),
                None => roots.insert(0, node),
            }
        }
        Tree::from_nodes(roots).expect("generated ids are unique")
    })
}

/// A user-level operation on a node picked by index
#[derive(Debug, Clone)]
pub enum Op {
    Check(prop::sample::Index, bool),
    Click(prop::sample::Index),
    Expand(prop::sample::Index, bool),
    Select(prop::sample::Index, bool),
    CheckAll,
    UncheckAll,
    Invert,
}

pub fn arb_ops(max: usize) -> impl Strategy<Value = Vec<Op>> {
    let op = prop_oneof![
        4 => (any::<prop::sample::Index>(), any::<bool>()).prop_map(|(i, v)| Op::Check(i, v)),
        2 => any::<prop::sample::Index>().prop_map(Op::Click),
        1 => (any::<prop::sample::Index>(), any::<bool>()).prop_map(|(i, v)| Op::Expand(i, v)),
        1 => (any::<prop::sample::Index>(), any::<bool>()).prop_map(|(i, v)| Op::Select(i, v)),
        1 => Just(Op::CheckAll),
        1 => Just(Op::UncheckAll),
        1 => Just(Op::Invert),
    ];
    proptest::collection::vec(op, 0..=max)
}

pub fn node_at<'t>(tree: &'t Tree, index: &prop::sample::Index) -> NodeRef<'t> {
    let i = index.index(tree.len());
    tree.iter().nth(i).expect("index is within tree length")
}

pub fn id_at<'t>(tree: &'t Tree, index: &prop::sample::Index) -> &'t str {
    node_at(tree, index).id().as_str()
}

pub fn apply_op(tree: &Tree, state: &SelectionState, op: &Op) -> SelectionState {
    match op {
        Op::Check(i, v) => toggle_check(tree, state, id_at(tree, i), *v).unwrap(),
        Op::Click(i) => click_check(tree, state, id_at(tree, i)).unwrap(),
        Op::Expand(i, v) => toggle_expand(tree, state, id_at(tree, i), *v).unwrap(),
        Op::Select(i, v) => toggle_select(tree, state, id_at(tree, i), *v, false).unwrap(),
        Op::CheckAll => check_all(tree, state),
        Op::UncheckAll => uncheck_all(tree, state),
        Op::Invert => invert(tree, state),
    }
}

pub fn run_ops(tree: &Tree, ops: &[Op]) -> SelectionState {
    ops.iter()
        .fold(SelectionState::new(), |state, op| apply_op(tree, &state, op))
}

/// What an internal node's state must be, given its children
pub fn expected_aggregate(state: &SelectionState, node: NodeRef<'_>) -> CheckState {
    let states: Vec<CheckState> = node
        .children()
        .map(|c| state.check_state(c.id().as_str()))
        .collect();
    if states.iter().all(|s| *s == CheckState::Checked) {
        CheckState::Checked
    } else if states.iter().all(|s| *s == CheckState::Unchecked) {
        CheckState::Unchecked
    } else {
        CheckState::Indeterminate
    }
}
