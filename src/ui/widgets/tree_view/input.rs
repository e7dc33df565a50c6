//! Keyboard input handling and interactive loop.
//!
//! This module provides functions for mapping keyboard events to tree actions
//! and running the interactive terminal loop.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::domain::value_objects::CheckState;
use crate::error::CanopyResult;
use crate::ui::terminal::detect_capabilities;
use crate::ui::theme::colors;

use super::render::RenderOptions;
use super::view::{TreeAction, TreeView};

/// Convert a keyboard event to a TreeAction.
///
/// While the search prompt is open, printable keys extend the query.
pub fn key_to_action(key: KeyEvent, searching: bool) -> Option<TreeAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(TreeAction::Quit);
    }

    if searching {
        return match key.code {
            KeyCode::Enter => Some(TreeAction::EndSearch),
            KeyCode::Esc => Some(TreeAction::ClearSearch),
            KeyCode::Backspace => Some(TreeAction::SearchBackspace),
            KeyCode::Up => Some(TreeAction::Up),
            KeyCode::Down => Some(TreeAction::Down),
            KeyCode::Char(c) => Some(TreeAction::SearchInput(c)),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(TreeAction::Up),
        KeyCode::Down | KeyCode::Char('j') => Some(TreeAction::Down),
        KeyCode::Char(' ') => Some(TreeAction::Toggle),
        KeyCode::Tab => Some(TreeAction::Select),
        KeyCode::Right | KeyCode::Char('l') => Some(TreeAction::Expand),
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Backspace => Some(TreeAction::Collapse),
        KeyCode::Char('a') => Some(TreeAction::CheckAll),
        KeyCode::Char('n') => Some(TreeAction::UncheckAll),
        KeyCode::Char('i') => Some(TreeAction::Invert),
        KeyCode::Char('/') => Some(TreeAction::StartSearch),
        KeyCode::Enter => Some(TreeAction::Confirm),
        KeyCode::Char('q') | KeyCode::Esc => Some(TreeAction::Quit),
        _ => None,
    }
}

/// Run the tree view interactively.
///
/// Returns `true` if the user confirmed, `false` if they quit. The terminal
/// is restored on every exit path, including errors.
pub fn run_interactive(
    view: &mut TreeView,
    opts: &RenderOptions,
    title: &str,
) -> CanopyResult<bool> {
    use crossterm::{cursor, execute, terminal};
    use std::io::stdout;

    terminal::enable_raw_mode()?;
    let mut out = stdout();
    execute!(out, cursor::Hide)?;

    let result = event_loop(view, opts, title);

    let restore = execute!(
        out,
        cursor::Show,
        terminal::Clear(terminal::ClearType::All),
        cursor::MoveTo(0, 0)
    );
    terminal::disable_raw_mode()?;
    restore?;

    result
}

fn event_loop(view: &mut TreeView, opts: &RenderOptions, title: &str) -> CanopyResult<bool> {
    use crossterm::event::{self, Event, KeyEventKind};

    draw(view, opts, title)?;
    loop {
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        let Some(action) = key_to_action(key, view.is_searching()) else {
            continue;
        };
        tracing::trace!(?action, "key action");

        if view.handle_action(action)? {
            return Ok(action == TreeAction::Confirm);
        }
        draw(view, opts, title)?;
    }
}

fn draw(view: &TreeView, opts: &RenderOptions, title: &str) -> CanopyResult<()> {
    use crossterm::style::Stylize;
    use crossterm::{cursor, execute, terminal};
    use std::io::{stdout, Write};

    let caps = detect_capabilities();
    let mut out = stdout();
    execute!(
        out,
        terminal::Clear(terminal::ClearType::All),
        cursor::MoveTo(0, 0)
    )?;

    // Raw mode needs explicit carriage returns
    let mut frame = format!("{}\r\n\r\n", title);
    for line in view.render(opts).lines() {
        if caps.supports_color && line.starts_with("> ") {
            frame.push_str(&line.with(colors::CURSOR).to_string());
        } else {
            frame.push_str(line);
        }
        frame.push_str("\r\n");
    }

    let rule = if opts.glyphs.check(CheckState::Checked).is_ascii() {
        "-"
    } else {
        "─"
    };
    frame.push_str(&rule.repeat(usize::from(caps.width.clamp(20, 80))));
    frame.push_str("\r\n");
    for line in view.render_status_bar(opts).lines() {
        frame.push_str(line);
        frame.push_str("\r\n");
    }
    frame.push_str("\r\n");
    for line in view.render_help_bar().lines() {
        if caps.supports_color {
            frame.push_str(&line.with(colors::DIM).to_string());
        } else {
            frame.push_str(line);
        }
        frame.push_str("\r\n");
    }

    out.write_all(frame.as_bytes())?;
    out.flush()?;
    Ok(())
}
