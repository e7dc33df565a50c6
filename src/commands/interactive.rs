use std::path::Path;

use anyhow::{bail, Result};
use is_terminal::IsTerminal;

use crate::error::CanopyError;
use crate::ui::json;
use crate::ui::widgets::tree_view::{run_interactive, TreeView};

use super::{build_engine, CommandContext};

pub fn cmd_interactive(ctx: &CommandContext, tree: &Path) -> Result<()> {
    if !std::io::stdin().is_terminal() {
        bail!("interactive mode needs a terminal; use `canopy apply` for scripted selection");
    }

    let engine = build_engine(ctx, tree, false)?;
    let mut view = TreeView::new(engine);
    let title = format!("Canopy · {}", tree.display());

    let confirmed = run_interactive(&mut view, &ctx.render_options(), &title)?;
    if !confirmed {
        return Err(CanopyError::SelectionAborted.into());
    }

    let engine = view.into_engine();
    let checked = engine.checked_leaves();
    tracing::info!(checked = checked.len(), "selection confirmed");

    if ctx.json {
        json::emit(serde_json::json!({
            "checked": checked,
            "selected": engine.state().selected(),
        }))?;
    } else {
        for id in checked {
            println!("{}", id);
        }
    }
    Ok(())
}
