use std::path::Path;

use anyhow::Result;

use crate::domain::entities::Tree;
use crate::infrastructure::load_tree_file;
use crate::ui::json;

use super::CommandContext;

pub fn cmd_validate(ctx: &CommandContext, tree: &Path) -> Result<()> {
    let input = load_tree_file(tree)?;
    let tree_data = Tree::from_input(input)?;

    let nodes = tree_data.len();
    let leaves = tree_data.leaf_count();
    let roots = tree_data.roots().count();
    let depth = tree_data.iter().map(|n| n.depth() + 1).max().unwrap_or(0);
    let disabled = tree_data.iter().filter(|n| n.is_disabled()).count();

    if ctx.json {
        json::emit(serde_json::json!({
            "valid": true,
            "file": tree.display().to_string(),
            "nodes": nodes,
            "leaves": leaves,
            "roots": roots,
            "depth": depth,
            "disabled": disabled,
        }))?;
        return Ok(());
    }

    println!("✓ {} is a valid tree", tree.display());
    println!("  nodes:    {}", nodes);
    println!("  leaves:   {}", leaves);
    println!("  roots:    {}", roots);
    println!("  depth:    {}", depth);
    if disabled > 0 {
        println!("  disabled: {}", disabled);
    }
    Ok(())
}
