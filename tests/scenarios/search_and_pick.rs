//! Scenario: narrowing a large tree with a query, picking, then clearing.

use canopy::config::DefaultExpanded;
use canopy::{SelectionEngine, TreeNode, TreeOptions};

fn project_tree() -> Vec<TreeNode> {
    vec![
        TreeNode::new("src", "src")
            .with_child(TreeNode::new("src/lib.rs", "lib.rs"))
            .with_child(
                TreeNode::new("src/ui", "ui")
                    .with_child(TreeNode::new("src/ui/theme.rs", "theme.rs"))
                    .with_child(TreeNode::new("src/ui/render.rs", "render.rs")),
            ),
        TreeNode::new("docs", "docs").with_child(TreeNode::new("docs/guide.md", "Guide.md")),
    ]
}

fn labels(engine: &SelectionEngine) -> Vec<String> {
    engine.rows().into_iter().map(|r| r.label).collect()
}

#[test]
fn filter_reveals_matches_without_touching_expansion() {
    let mut engine = SelectionEngine::new(project_tree(), TreeOptions::default()).unwrap();
    assert_eq!(labels(&engine), vec!["src", "docs"]);

    let filter = engine.apply_filter("THEME");
    assert_eq!(filter.matched().len(), 1);
    assert_eq!(labels(&engine), vec!["src", "ui", "theme.rs"]);
    assert!(engine.state().expanded().is_empty());

    engine.toggle_check("src/ui/theme.rs", true).unwrap();
    engine.clear_filter();

    assert_eq!(labels(&engine), vec!["src", "docs"]);
    let checked: Vec<&str> = engine.checked_leaves().iter().map(|id| id.as_str()).collect();
    assert_eq!(checked, vec!["src/ui/theme.rs"]);
    assert!(engine.state().is_indeterminate("src"));
}

#[test]
fn empty_query_shows_everything_collapsed() {
    let mut engine = SelectionEngine::new(project_tree(), TreeOptions::default()).unwrap();
    engine.apply_filter("");
    assert_eq!(labels(&engine), vec!["src", "docs"]);
}

#[test]
fn case_sensitive_matcher_is_pluggable() {
    let options = TreeOptions {
        default_expanded: DefaultExpanded::All,
        ..TreeOptions::default()
    };
    let mut engine = SelectionEngine::new(project_tree(), options)
        .unwrap()
        .with_matcher(canopy::domain::services::CaseSensitive);

    engine.apply_filter("guide");
    assert!(engine.rows().is_empty());

    engine.apply_filter("Guide");
    assert_eq!(labels(&engine), vec!["docs", "Guide.md"]);
}

#[test]
fn invert_then_uncheck_all() {
    let mut engine = SelectionEngine::new(project_tree(), TreeOptions::default()).unwrap();
    engine.toggle_check("src/ui", true).unwrap();

    assert!(engine.invert());
    let checked: Vec<&str> = engine.checked_leaves().iter().map(|id| id.as_str()).collect();
    assert_eq!(checked, vec!["src/lib.rs", "docs/guide.md"]);

    assert!(engine.uncheck_all());
    assert_eq!(engine.checked_leaf_count(), 0);
    assert!(!engine.uncheck_all(), "nothing left to change");
}
