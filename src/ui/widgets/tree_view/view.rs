//! TreeView state management and action handling.
//!
//! Wraps a `SelectionEngine` with a cursor and an incremental search prompt.
//! All selection semantics stay in the engine; this type only maps cursor
//! positions to node ids.

use crate::application::SelectionEngine;
use crate::domain::services::RenderRow;
use crate::domain::value_objects::NodeId;
use crate::error::CanopyResult;

use super::render::{render_help_bar, render_rows, render_status_bar, RenderOptions};

/// Tree view action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeAction {
    /// Move cursor up
    Up,
    /// Move cursor down
    Down,
    /// Click the checkbox under the cursor
    Toggle,
    /// Toggle selection of the node under the cursor
    Select,
    /// Expand node
    Expand,
    /// Collapse node, or jump to the parent
    Collapse,
    CheckAll,
    UncheckAll,
    Invert,
    /// Open the search prompt
    StartSearch,
    /// Append to the search query
    SearchInput(char),
    SearchBackspace,
    /// Close the prompt, keeping the filter
    EndSearch,
    /// Close the prompt and drop the filter
    ClearSearch,
    /// Confirm selection
    Confirm,
    /// Quit without confirming
    Quit,
}

/// Interactive tree view over a selection engine
pub struct TreeView {
    engine: SelectionEngine,
    cursor: usize,
    /// Query being typed, while the prompt is open
    search: Option<String>,
    rows: Vec<RenderRow>,
}

impl TreeView {
    pub fn new(engine: SelectionEngine) -> Self {
        let rows = engine.rows();
        Self {
            engine,
            cursor: 0,
            search: None,
            rows,
        }
    }

    pub fn engine(&self) -> &SelectionEngine {
        &self.engine
    }

    pub fn into_engine(self) -> SelectionEngine {
        self.engine
    }

    pub fn rows(&self) -> &[RenderRow] {
        &self.rows
    }

    /// Get current cursor position
    pub fn cursor_position(&self) -> usize {
        self.cursor
    }

    /// Id of the row under the cursor
    pub fn current_id(&self) -> Option<&NodeId> {
        self.rows.get(self.cursor).map(|r| &r.id)
    }

    pub fn is_searching(&self) -> bool {
        self.search.is_some()
    }

    /// Handle an action. Returns `true` when the loop should end.
    pub fn handle_action(&mut self, action: TreeAction) -> CanopyResult<bool> {
        match action {
            TreeAction::Up => {
                self.cursor = self.cursor.saturating_sub(1);
            }
            TreeAction::Down => {
                if self.cursor + 1 < self.rows.len() {
                    self.cursor += 1;
                }
            }
            TreeAction::Toggle => {
                if let Some(id) = self.current_id().cloned() {
                    self.engine.click_check(id.as_str())?;
                    self.refresh();
                }
            }
            TreeAction::Select => {
                if let Some(row) = self.rows.get(self.cursor) {
                    let id = row.id.clone();
                    let selected = !row.selected;
                    self.engine.toggle_select(id.as_str(), selected)?;
                    self.refresh();
                }
            }
            TreeAction::Expand => {
                if let Some(id) = self.current_id().cloned() {
                    self.engine.toggle_expand(id.as_str(), true)?;
                    self.refresh();
                }
            }
            TreeAction::Collapse => self.collapse_or_ascend()?,
            TreeAction::CheckAll => {
                self.engine.check_all();
                self.refresh();
            }
            TreeAction::UncheckAll => {
                self.engine.uncheck_all();
                self.refresh();
            }
            TreeAction::Invert => {
                self.engine.invert();
                self.refresh();
            }
            TreeAction::StartSearch => {
                let current = self.engine.filter().map(|f| f.query().to_string());
                self.search = Some(current.unwrap_or_default());
            }
            TreeAction::SearchInput(c) => {
                if let Some(query) = self.search.as_mut() {
                    query.push(c);
                }
                self.sync_filter();
            }
            TreeAction::SearchBackspace => {
                if let Some(query) = self.search.as_mut() {
                    query.pop();
                }
                self.sync_filter();
            }
            TreeAction::EndSearch => {
                self.search = None;
            }
            TreeAction::ClearSearch => {
                self.search = None;
                self.engine.clear_filter();
                self.refresh();
            }
            TreeAction::Confirm | TreeAction::Quit => return Ok(true),
        }
        Ok(false)
    }

    fn collapse_or_ascend(&mut self) -> CanopyResult<()> {
        let Some(row) = self.rows.get(self.cursor) else {
            return Ok(());
        };
        if row.expanded && row.has_children && self.engine.state().is_expanded(row.id.as_str()) {
            let id = row.id.clone();
            self.engine.toggle_expand(id.as_str(), false)?;
            self.refresh();
            return Ok(());
        }

        let parent = self
            .engine
            .tree()
            .get(row.id.as_str())
            .and_then(|n| n.parent())
            .map(|p| p.id().clone());
        if let Some(parent) = parent {
            if let Some(pos) = self.rows.iter().position(|r| r.id == parent) {
                self.cursor = pos;
            }
        }
        Ok(())
    }

    fn sync_filter(&mut self) {
        match self.search.as_deref() {
            Some("") => self.engine.clear_filter(),
            Some(query) => {
                let query = query.to_string();
                self.engine.apply_filter(&query);
            }
            None => return,
        }
        self.cursor = 0;
        self.refresh();
    }

    /// Re-project rows, keeping the cursor on the same node when it is
    /// still visible
    fn refresh(&mut self) {
        let current = self.current_id().cloned();
        self.rows = self.engine.rows();
        if let Some(pos) = current.and_then(|id| self.rows.iter().position(|r| r.id == id)) {
            self.cursor = pos;
        }
        if self.cursor >= self.rows.len() {
            self.cursor = self.rows.len().saturating_sub(1);
        }
    }

    /// Render the tree to a string
    pub fn render(&self, opts: &RenderOptions) -> String {
        let opts = RenderOptions {
            cursor_column: true,
            ..*opts
        };
        render_rows(&self.rows, Some(self.cursor), &opts)
    }

    /// Render the status bar
    pub fn render_status_bar(&self, opts: &RenderOptions) -> String {
        let query = self
            .search
            .as_deref()
            .or_else(|| self.engine.filter().map(|f| f.query()));
        render_status_bar(
            self.engine.checked_leaf_count(),
            self.engine.leaf_count(),
            query,
            &opts.glyphs,
        )
    }

    /// Render the help bar
    pub fn render_help_bar(&self) -> String {
        render_help_bar(self.is_searching())
    }
}
