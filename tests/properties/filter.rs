//! Property tests for filtering and projection.

use proptest::prelude::*;

use canopy::domain::services::{apply_filter, project, LabelContains};

use crate::strategies::{arb_ops, arb_tree, run_ops};

fn query() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z0-9]{0,4}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: A node is visible exactly when it or a descendant matches.
    #[test]
    fn property_filter_visibility_is_sound(
        tree in arb_tree(24),
        query in query(),
    ) {
        let filter = apply_filter(&tree, &query, &LabelContains);
        for node in tree.iter() {
            let self_match = node.label().contains(query.as_str());
            let any_match = self_match
                || node.descendants().any(|d| d.label().contains(query.as_str()));
            prop_assert_eq!(filter.is_visible(node.id().as_str()), any_match, "node {}", node.id());
            prop_assert_eq!(filter.matched().contains(node.id()), self_match);
        }
    }

    /// PROPERTY: Every ancestor of a visible node is visible and auto-expanded.
    #[test]
    fn property_filter_keeps_ancestor_paths(
        tree in arb_tree(24),
        query in query(),
    ) {
        let filter = apply_filter(&tree, &query, &LabelContains);
        for id in filter.visible() {
            let node = tree.get(id.as_str()).unwrap();
            for ancestor in node.ancestors() {
                prop_assert!(filter.is_visible(ancestor.id().as_str()));
                if !filter.matched().contains(ancestor.id()) {
                    prop_assert!(filter.is_auto_expanded(ancestor.id().as_str()));
                }
            }
        }
    }

    /// PROPERTY: Projection under a filter only emits visible nodes, parents first.
    #[test]
    fn property_projection_respects_filter(
        tree in arb_tree(24),
        ops in arb_ops(10),
        query in query(),
    ) {
        let state = run_ops(&tree, &ops);
        let filter = apply_filter(&tree, &query, &LabelContains);
        let rows = project(&tree, &state, Some(&filter));

        let mut seen = std::collections::BTreeSet::new();
        for row in &rows {
            prop_assert!(filter.is_visible(row.id.as_str()));
            let node = tree.get(row.id.as_str()).unwrap();
            if let Some(parent) = node.parent() {
                prop_assert!(seen.contains(parent.id()), "parent of {} drawn first", row.id);
            }
            prop_assert_eq!(row.check, state.check_state(row.id.as_str()));
            seen.insert(row.id.clone());
        }
    }

    /// PROPERTY: Filtering never changes the selection state.
    #[test]
    fn property_filter_leaves_state_untouched(
        tree in arb_tree(24),
        ops in arb_ops(10),
        query in query(),
    ) {
        let state = run_ops(&tree, &ops);
        let before = state.clone();
        let filter = apply_filter(&tree, &query, &LabelContains);
        let _ = project(&tree, &state, Some(&filter));
        prop_assert_eq!(state, before);
    }
}
