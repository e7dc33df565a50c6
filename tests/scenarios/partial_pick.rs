//! Scenario: picking part of a folder, watching hooks as it happens.

use std::sync::{Arc, Mutex};

use canopy::domain::ports::FnEventSink;
use canopy::{CheckState, SelectionChange, SelectionEngine, TreeNode, TreeOptions};

fn folder() -> Vec<TreeNode> {
    vec![TreeNode::new("A", "A")
        .with_child(TreeNode::new("B", "B"))
        .with_child(TreeNode::new("C", "C"))]
}

#[test]
fn checking_one_child_then_the_other() {
    let mut engine = SelectionEngine::new(folder(), TreeOptions::default()).unwrap();

    assert!(engine.toggle_check("B", true).unwrap());
    assert_eq!(engine.state().check_state("A"), CheckState::Indeterminate);
    assert_eq!(engine.state().check_state("B"), CheckState::Checked);
    assert_eq!(engine.state().check_state("C"), CheckState::Unchecked);

    assert!(engine.toggle_check("C", true).unwrap());
    assert_eq!(engine.state().check_state("A"), CheckState::Checked);

    // Clicking the full parent clears everything
    assert!(engine.click_check("A").unwrap());
    assert!(engine.state().checked().is_empty());
    assert!(engine.state().indeterminate().is_empty());
}

#[test]
fn clicking_a_partial_parent_checks_it() {
    let mut engine = SelectionEngine::new(folder(), TreeOptions::default()).unwrap();
    engine.toggle_check("B", true).unwrap();

    engine.click_check("A").unwrap();
    let checked: Vec<&str> = engine.checked_leaves().iter().map(|id| id.as_str()).collect();
    assert_eq!(checked, vec!["B", "C"]);
}

#[test]
fn hooks_see_each_change_once() {
    let seen: Arc<Mutex<Vec<(String, &'static str, bool)>>> = Arc::default();
    let sink = {
        let seen = Arc::clone(&seen);
        FnEventSink::new(move |node, change: SelectionChange| {
            seen.lock()
                .unwrap()
                .push((node.id().to_string(), change.name(), change.value()));
        })
    };
    let mut engine = SelectionEngine::new(folder(), TreeOptions::default())
        .unwrap()
        .with_event_sink(Arc::new(sink));

    engine.toggle_expand("A", true).unwrap();
    engine.toggle_check("B", true).unwrap();
    engine.toggle_check("B", true).unwrap();
    engine.toggle_select("C", true).unwrap();

    let seen = seen.lock().unwrap();
    assert_eq!(
        *seen,
        vec![
            ("A".to_string(), "expand", true),
            ("B".to_string(), "check", true),
            ("C".to_string(), "select", true),
        ]
    );
}

#[test]
fn disabled_leaf_is_skipped_by_bulk_but_follows_parent() {
    let nodes = vec![TreeNode::new("A", "A")
        .with_child(TreeNode::new("B", "B"))
        .with_child(TreeNode::new("C", "C").disabled())];
    let mut engine = SelectionEngine::new(nodes, TreeOptions::default()).unwrap();

    assert!(!engine.toggle_check("C", true).unwrap(), "disabled target is rejected");

    engine.check_all();
    assert!(engine.state().is_checked("B"));
    assert!(!engine.state().is_checked("C"));
    assert_eq!(engine.state().check_state("A"), CheckState::Indeterminate);

    engine.toggle_check("A", true).unwrap();
    assert!(engine.state().is_checked("C"), "parent check reaches disabled children");
}
