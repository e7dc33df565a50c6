//! Property tests for check-state propagation.

use proptest::prelude::*;

use canopy::domain::services::toggle_check;
use canopy::CheckState;

use crate::strategies::{arb_ops, arb_tree, expected_aggregate, id_at, node_at, run_ops};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Checking an enabled node reaches every descendant, disabled ones included.
    #[test]
    fn property_check_reaches_all_descendants(
        tree in arb_tree(24),
        ops in arb_ops(12),
        target in any::<prop::sample::Index>(),
        checked in any::<bool>(),
    ) {
        let state = run_ops(&tree, &ops);
        let node = node_at(&tree, &target);
        prop_assume!(!node.is_disabled());

        let next = toggle_check(&tree, &state, node.id().as_str(), checked).unwrap();
        let expected = if checked { CheckState::Checked } else { CheckState::Unchecked };

        prop_assert_eq!(next.check_state(node.id().as_str()), expected);
        for d in node.descendants() {
            prop_assert_eq!(next.check_state(d.id().as_str()), expected, "descendant {}", d.id());
        }
    }

    /// PROPERTY: After any operation sequence, every internal node agrees with its children.
    #[test]
    fn property_internal_nodes_aggregate_children(
        tree in arb_tree(24),
        ops in arb_ops(16),
    ) {
        let state = run_ops(&tree, &ops);
        for node in tree.iter().filter(|n| !n.is_leaf()) {
            prop_assert_eq!(
                state.check_state(node.id().as_str()),
                expected_aggregate(&state, node),
                "node {}",
                node.id()
            );
        }
    }

    /// PROPERTY: No node is ever both checked and indeterminate.
    #[test]
    fn property_checked_and_indeterminate_are_disjoint(
        tree in arb_tree(24),
        ops in arb_ops(16),
    ) {
        let state = run_ops(&tree, &ops);
        prop_assert!(state.checked().is_disjoint(state.indeterminate()));
    }

    /// PROPERTY: Leaves are never indeterminate.
    #[test]
    fn property_leaves_never_indeterminate(
        tree in arb_tree(24),
        ops in arb_ops(16),
    ) {
        let state = run_ops(&tree, &ops);
        for leaf in tree.leaves() {
            prop_assert!(!state.is_indeterminate(leaf.id().as_str()), "leaf {}", leaf.id());
        }
    }

    /// PROPERTY: Repeating the same check request changes nothing.
    #[test]
    fn property_toggle_check_is_idempotent(
        tree in arb_tree(24),
        ops in arb_ops(12),
        target in any::<prop::sample::Index>(),
        checked in any::<bool>(),
    ) {
        let state = run_ops(&tree, &ops);
        let id = id_at(&tree, &target);

        let once = toggle_check(&tree, &state, id, checked).unwrap();
        let twice = toggle_check(&tree, &once, id, checked).unwrap();
        prop_assert_eq!(once, twice);
    }

    /// PROPERTY: Requests on a disabled node leave the state untouched.
    #[test]
    fn property_disabled_target_is_rejected(
        tree in arb_tree(24),
        ops in arb_ops(12),
        target in any::<prop::sample::Index>(),
        checked in any::<bool>(),
    ) {
        let node = node_at(&tree, &target);
        prop_assume!(node.is_disabled());
        let state = run_ops(&tree, &ops);

        let next = toggle_check(&tree, &state, node.id().as_str(), checked).unwrap();
        prop_assert_eq!(next, state);
    }
}
