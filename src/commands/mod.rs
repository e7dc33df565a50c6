//! CLI command implementations
//!
//! Each command loads a tree file into a `SelectionEngine`, runs its
//! operations and prints either text or a JSON document.

use std::path::Path;

use anyhow::{Context, Result};

use crate::application::SelectionEngine;
use crate::config::{Config, DefaultExpanded};
use crate::infrastructure::load_tree_file;
use crate::ui::json;
use crate::ui::terminal::detect_capabilities;
use crate::ui::theme::Glyphs;
use crate::ui::widgets::tree_view::{render_rows, RenderOptions};

pub mod apply;
pub mod interactive;
pub mod render;
pub mod validate;

pub use apply::cmd_apply;
pub use interactive::cmd_interactive;
pub use render::cmd_render;
pub use validate::cmd_validate;

/// Resolved global state shared by every command
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub json: bool,
    pub config: Config,
}

impl CommandContext {
    pub fn render_options(&self) -> RenderOptions {
        let unicode = !self.config.output.ascii && detect_capabilities().supports_unicode;
        RenderOptions {
            glyphs: Glyphs::new(unicode),
            checkbox_position: self.config.tree.checkbox_position,
            checkable: self.config.tree.checkable,
            show_lines: self.config.output.show_lines,
            cursor_column: false,
        }
    }
}

/// Load the tree file and seed an engine from the configured defaults
pub(crate) fn build_engine(
    ctx: &CommandContext,
    tree: &Path,
    expand_all: bool,
) -> Result<SelectionEngine> {
    let input = load_tree_file(tree)?;
    let mut options = ctx.config.tree.clone();
    if expand_all {
        options.default_expanded = DefaultExpanded::All;
    }

    let engine = SelectionEngine::new(input, options)
        .with_context(|| format!("failed to load {}", tree.display()))?;
    Ok(engine.with_boxed_matcher(ctx.config.search.matcher()))
}

/// `{"rows": [...], "state": {...}}` as one JSON line
pub(crate) fn print_document(engine: &SelectionEngine) -> Result<()> {
    json::emit(serde_json::json!({
        "rows": engine.rows(),
        "state": engine.state(),
        "checked_leaves": engine.checked_leaves(),
        "filter": engine.filter().map(|f| f.query()),
    }))?;
    Ok(())
}

pub(crate) fn print_tree(ctx: &CommandContext, engine: &SelectionEngine) {
    let opts = ctx.render_options();
    print!("{}", render_rows(&engine.rows(), None, &opts));
    if ctx.config.tree.checkable {
        println!();
        println!(
            "Checked: {}/{} leaves",
            engine.checked_leaf_count(),
            engine.leaf_count()
        );
    }
}
