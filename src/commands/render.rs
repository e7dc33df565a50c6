use std::path::Path;

use anyhow::Result;

use super::{build_engine, print_document, print_tree, CommandContext};

pub fn cmd_render(
    ctx: &CommandContext,
    tree: &Path,
    filter: Option<&str>,
    expand_all: bool,
) -> Result<()> {
    let mut engine = build_engine(ctx, tree, expand_all)?;
    if let Some(query) = filter {
        let visible = engine.apply_filter(query);
        tracing::info!(query, matched = visible.matched().len(), "filter applied");
    }

    if ctx.json {
        return print_document(&engine);
    }

    if engine.rows().is_empty() {
        match filter {
            Some(query) => println!("No nodes match '{}'.", query),
            None => println!("Tree is empty."),
        }
        return Ok(());
    }
    print_tree(ctx, &engine);
    Ok(())
}
