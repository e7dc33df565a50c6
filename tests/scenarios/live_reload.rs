//! Scenario: the caller swaps in a new version of the tree mid-session.

use canopy::{ComposedItem, SelectionEngine, TreeInput, TreeNode, TreeOptions};

fn item(value: &str, items: Vec<ComposedItem>) -> ComposedItem {
    ComposedItem {
        value: value.into(),
        label: value.to_uppercase(),
        disabled: false,
        icon: None,
        items,
    }
}

#[test]
fn composed_input_builds_the_same_hierarchy() {
    let input = TreeInput::Composed(vec![item("a", vec![item("b", vec![]), item("c", vec![])])]);
    let mut engine = SelectionEngine::new(input, TreeOptions::default()).unwrap();

    engine.toggle_check("b", true).unwrap();
    assert!(engine.state().is_indeterminate("a"));
    assert_eq!(engine.tree().get("c").unwrap().label(), "C");
}

#[test]
fn new_children_of_a_checked_folder_start_checked() {
    let v1 = vec![TreeNode::new("dir", "dir").with_child(TreeNode::new("one", "one"))];
    let mut engine = SelectionEngine::new(v1, TreeOptions::default()).unwrap();
    engine.toggle_expand("dir", true).unwrap();
    engine.toggle_check("dir", true).unwrap();

    let v2 = vec![TreeNode::new("dir", "dir")
        .with_child(TreeNode::new("one", "one"))
        .with_child(TreeNode::new("two", "two"))];
    engine.replace_tree(v2).unwrap();

    assert!(engine.state().is_checked("two"));
    assert!(engine.state().is_checked("dir"));
    assert!(engine.state().is_expanded("dir"));
}

#[test]
fn removed_nodes_drop_out_and_parents_recompute() {
    let v1 = vec![TreeNode::new("dir", "dir")
        .with_child(TreeNode::new("keep", "keep"))
        .with_child(TreeNode::new("gone", "gone"))];
    let mut engine = SelectionEngine::new(v1, TreeOptions::default()).unwrap();
    engine.toggle_check("gone", true).unwrap();
    engine.toggle_select("gone", true).unwrap();
    assert!(engine.state().is_indeterminate("dir"));

    let v2 = vec![TreeNode::new("dir", "dir").with_child(TreeNode::new("keep", "keep"))];
    engine.replace_tree(v2).unwrap();

    assert!(engine.state().checked().is_empty());
    assert!(engine.state().indeterminate().is_empty());
    assert!(engine.state().selected().is_empty());
}

#[test]
fn replacing_with_a_bad_tree_keeps_the_old_one() {
    let mut engine =
        SelectionEngine::new(vec![TreeNode::new("a", "a")], TreeOptions::default()).unwrap();
    let dup = vec![TreeNode::new("x", "x"), TreeNode::new("x", "y")];

    assert!(engine.replace_tree(dup).is_err());
    assert!(engine.tree().contains("a"));
}
