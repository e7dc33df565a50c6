//! Terminal rendering functions for the tree view.
//!
//! Pure string builders over `RenderRow`s; nothing here touches the terminal.

use unicode_width::UnicodeWidthStr;

use crate::domain::services::RenderRow;
use crate::domain::value_objects::CheckboxPosition;
use crate::ui::theme::Glyphs;

/// How rows are drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub glyphs: Glyphs,
    pub checkbox_position: CheckboxPosition,
    /// Draw checkboxes at all
    pub checkable: bool,
    /// Connector lines instead of plain indentation
    pub show_lines: bool,
    /// Reserve a cursor column
    pub cursor_column: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            glyphs: Glyphs::new(true),
            checkbox_position: CheckboxPosition::Left,
            checkable: true,
            show_lines: true,
            cursor_column: false,
        }
    }
}

/// Render rows, one per line. `cursor` marks the active row when the
/// cursor column is enabled.
///
/// Rows must be in projection order: connector lines are rebuilt from the
/// `is_last` flags of the rows above.
pub fn render_rows(rows: &[RenderRow], cursor: Option<usize>, opts: &RenderOptions) -> String {
    // is_last of the nearest row at each depth above the current one
    let mut tails: Vec<bool> = Vec::new();
    let lines: Vec<String> = rows
        .iter()
        .map(|row| {
            tails.truncate(row.depth);
            let mut line = indent(row, &tails, opts);
            line.push_str(&render_head(row, opts));
            tails.push(row.is_last);
            line
        })
        .collect();
    // Right-hand checkboxes line up in one column
    let column = lines.iter().map(|l| l.width()).max().unwrap_or(0);

    let mut out = String::new();
    for (i, (row, line)) in rows.iter().zip(&lines).enumerate() {
        if opts.cursor_column {
            out.push_str(if cursor == Some(i) { "> " } else { "  " });
        }
        out.push_str(line);
        if opts.checkable && opts.checkbox_position == CheckboxPosition::Right {
            out.push_str(&" ".repeat(column - line.width() + 1));
            out.push_str(opts.glyphs.check(row.check));
        }
        out.push('\n');
    }
    out
}

/// Render a single row without indentation, cursor column or right-hand
/// checkbox
pub fn render_head(row: &RenderRow, opts: &RenderOptions) -> String {
    let glyphs = &opts.glyphs;
    let mut line = String::new();

    if row.has_children {
        line.push_str(glyphs.expander(row.expanded));
        line.push(' ');
    } else {
        line.push_str("  ");
    }

    if opts.checkable && opts.checkbox_position == CheckboxPosition::Left {
        line.push_str(glyphs.check(row.check));
        line.push(' ');
    }

    if let Some(icon) = &row.icon {
        line.push_str(icon);
        line.push(' ');
    }
    line.push_str(&row.label);

    if row.selected {
        line.push(' ');
        line.push_str(glyphs.selected());
    }
    if row.disabled {
        line.push(' ');
        line.push_str(glyphs.disabled());
    }
    line
}

fn indent(row: &RenderRow, tails: &[bool], opts: &RenderOptions) -> String {
    if row.depth == 0 {
        return String::new();
    }
    if !opts.show_lines {
        return "  ".repeat(row.depth);
    }
    // The root level carries no connector
    let mut out: String = tails
        .iter()
        .skip(1)
        .map(|&last| opts.glyphs.guide(last))
        .collect();
    out.push_str(opts.glyphs.branch(row.is_last));
    out
}

/// Render the status bar showing check counts and the active query
pub fn render_status_bar(
    checked: usize,
    total: usize,
    query: Option<&str>,
    glyphs: &Glyphs,
) -> String {
    let mut status = format!("Checked: {}/{}", checked, total);
    if let Some(query) = query {
        status.push_str(&format!("    {} {}", glyphs.search(), query));
    }
    status.push_str(&format!(
        "\n\n{} = checked    {} = partial    {} = unchecked    {} = selected",
        glyphs.check(crate::domain::value_objects::CheckState::Checked),
        glyphs.check(crate::domain::value_objects::CheckState::Indeterminate),
        glyphs.check(crate::domain::value_objects::CheckState::Unchecked),
        glyphs.selected(),
    ));
    status
}

/// Render the help bar showing keyboard shortcuts
pub fn render_help_bar(searching: bool) -> String {
    if searching {
        return String::from("Type to filter    [Enter] Keep filter    [Esc] Clear filter");
    }
    String::from(
        "[a] All    [n] None    [i] Invert    [/] Search    [Enter] Confirm    [q] Quit\n\
         (↑↓ navigate, Space check, Tab select, →← expand/collapse)",
    )
}
