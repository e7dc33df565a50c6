//! Selection Engine
//!
//! Owns one tree version together with its current `SelectionState`, the
//! active filter and the event sinks. Every mutator swaps in a fresh snapshot
//! produced by the pure domain services and reports whether anything changed.

use std::sync::Arc;

use crate::config::{DefaultExpanded, TreeOptions};
use crate::domain::entities::{NodeRef, SelectionState, Tree, TreeInput};
use crate::domain::ports::{SelectionChange, SelectionEventSink};
use crate::domain::services::{
    self, apply_filter, project, LabelContains, NodeMatcher, RenderRow, VisibleNodeSet,
};
use crate::domain::value_objects::NodeId;
use crate::error::CanopyResult;

/// Stateful front for the selection services
pub struct SelectionEngine {
    tree: Tree,
    state: SelectionState,
    options: TreeOptions,
    filter: Option<VisibleNodeSet>,
    matcher: Box<dyn NodeMatcher>,
    sinks: Vec<Arc<dyn SelectionEventSink>>,
}

impl SelectionEngine {
    /// Build the tree and seed state from the option defaults.
    ///
    /// Default ids must exist in the tree.
    pub fn new(input: impl Into<TreeInput>, options: TreeOptions) -> CanopyResult<Self> {
        let tree = Tree::from_input(input.into())?;
        let state = seed_state(&tree, &options)?;
        Ok(Self {
            tree,
            state,
            options,
            filter: None,
            matcher: Box::new(LabelContains),
            sinks: Vec::new(),
        })
    }

    /// Replace the default label matcher
    pub fn with_matcher(mut self, matcher: impl NodeMatcher + 'static) -> Self {
        self.matcher = Box::new(matcher);
        self
    }

    pub fn with_boxed_matcher(mut self, matcher: Box<dyn NodeMatcher>) -> Self {
        self.matcher = matcher;
        self
    }

    /// Register a hook fired after every change
    pub fn with_event_sink(mut self, sink: Arc<dyn SelectionEventSink>) -> Self {
        self.sinks.push(sink);
        self
    }

    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn options(&self) -> &TreeOptions {
        &self.options
    }

    /// Active filter, if any
    pub fn filter(&self) -> Option<&VisibleNodeSet> {
        self.filter.as_ref()
    }

    /// Set a node's checked state and propagate it
    pub fn toggle_check(&mut self, id: &str, checked: bool) -> CanopyResult<bool> {
        let next = services::toggle_check(&self.tree, &self.state, id, checked)?;
        Ok(self.commit(next, id, SelectionChange::Checked(checked)))
    }

    /// A direct click: unchecked or indeterminate becomes checked
    pub fn click_check(&mut self, id: &str) -> CanopyResult<bool> {
        let checked = self.state.check_state(id).clicked();
        self.toggle_check(id, checked)
    }

    pub fn toggle_expand(&mut self, id: &str, expanded: bool) -> CanopyResult<bool> {
        let next = services::toggle_expand(&self.tree, &self.state, id, expanded)?;
        Ok(self.commit(next, id, SelectionChange::Expanded(expanded)))
    }

    /// Select or deselect; single or multi per `TreeOptions::multi_select`
    pub fn toggle_select(&mut self, id: &str, selected: bool) -> CanopyResult<bool> {
        let next = services::toggle_select(
            &self.tree,
            &self.state,
            id,
            selected,
            self.options.multi_select,
        )?;
        Ok(self.commit(next, id, SelectionChange::Selected(selected)))
    }

    pub fn check_all(&mut self) -> bool {
        let next = services::check_all(&self.tree, &self.state);
        self.commit_bulk(next)
    }

    pub fn uncheck_all(&mut self) -> bool {
        let next = services::uncheck_all(&self.tree, &self.state);
        self.commit_bulk(next)
    }

    pub fn invert(&mut self) -> bool {
        let next = services::invert(&self.tree, &self.state);
        self.commit_bulk(next)
    }

    /// Filter the visible nodes; selection state is untouched
    pub fn apply_filter(&mut self, query: &str) -> &VisibleNodeSet {
        let visible = apply_filter(&self.tree, query, self.matcher.as_ref());
        self.filter.insert(visible)
    }

    pub fn clear_filter(&mut self) {
        self.filter = None;
    }

    /// Flattened rows for the current state and filter
    pub fn rows(&self) -> Vec<RenderRow> {
        project(&self.tree, &self.state, self.filter.as_ref())
    }

    /// Checked leaves in tree order
    pub fn checked_leaves(&self) -> Vec<&NodeId> {
        services::checked_leaves(&self.tree, &self.state)
    }

    pub fn checked_leaf_count(&self) -> usize {
        self.checked_leaves().len()
    }

    pub fn leaf_count(&self) -> usize {
        self.tree.leaf_count()
    }

    /// Swap in a new tree version and rebuild state wholesale.
    ///
    /// Expanded and selected ids survive when still present. Checked ids are
    /// re-applied downward in tree order, so new children of a checked node
    /// start checked; everything is then recomputed from the leaves.
    pub fn replace_tree(&mut self, input: impl Into<TreeInput>) -> CanopyResult<()> {
        let tree = Tree::from_input(input.into())?;
        let mut next = SelectionState::new();

        for node in tree.iter() {
            let id = node.id().as_str();
            if self.state.is_expanded(id) {
                next.set_expanded(node.id(), true);
            }
            if self.state.is_selected(id) {
                next.set_selected(node.id(), true);
            }
        }
        for node in tree.iter() {
            if self.state.is_checked(node.id().as_str()) && !next.is_checked(node.id().as_str()) {
                services::propagation::apply_check(&mut next, node, true);
            }
        }
        let next = services::recompute_all(&tree, &next);

        tracing::debug!(
            nodes = tree.len(),
            checked = next.checked().len(),
            "replaced tree"
        );

        self.tree = tree;
        self.state = next;
        if let Some(query) = self.filter.as_ref().map(|f| f.query().to_string()) {
            self.apply_filter(&query);
        }
        Ok(())
    }

    fn commit(&mut self, next: SelectionState, id: &str, change: SelectionChange) -> bool {
        if next == self.state {
            return false;
        }
        self.state = next;
        if let Some(node) = self.tree.get(id) {
            self.emit(node, change);
        }
        true
    }

    /// Bulk operations report one `Checked` event per leaf that flipped
    fn commit_bulk(&mut self, next: SelectionState) -> bool {
        if next == self.state {
            return false;
        }
        let previous = std::mem::replace(&mut self.state, next);
        for leaf in self.tree.leaves() {
            let id = leaf.id().as_str();
            let now = self.state.is_checked(id);
            if previous.is_checked(id) != now {
                self.emit(leaf, SelectionChange::Checked(now));
            }
        }
        true
    }

    fn emit(&self, node: NodeRef<'_>, change: SelectionChange) {
        for sink in &self.sinks {
            sink.on_change(node, change);
        }
    }
}

impl std::fmt::Debug for SelectionEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectionEngine")
            .field("nodes", &self.tree.len())
            .field("state", &self.state)
            .field("filter", &self.filter.as_ref().map(|v| v.query()))
            .finish()
    }
}

/// Initial state from `TreeOptions` defaults.
///
/// Defaults bypass the disabled guard; they describe the starting picture,
/// not a user action.
fn seed_state(tree: &Tree, options: &TreeOptions) -> CanopyResult<SelectionState> {
    let mut state = SelectionState::new();

    match &options.default_expanded {
        DefaultExpanded::All => {
            for node in tree.iter().filter(|n| !n.is_leaf()) {
                state.set_expanded(node.id(), true);
            }
        }
        DefaultExpanded::None => {}
        DefaultExpanded::Ids(ids) => {
            for id in ids {
                let node = tree.node(id.as_str())?;
                if !node.is_leaf() {
                    state.set_expanded(node.id(), true);
                }
            }
        }
    }

    for id in &options.default_checked {
        let node = tree.node(id.as_str())?;
        services::propagation::apply_check(&mut state, node, true);
    }

    match options.default_selected.as_slice() {
        [] => {}
        [single] => {
            let node = tree.node(single.as_str())?;
            state.set_selected(node.id(), true);
        }
        many if options.multi_select => {
            for id in many {
                let node = tree.node(id.as_str())?;
                state.set_selected(node.id(), true);
            }
        }
        [.., last] => {
            tracing::warn!(
                kept = %last,
                "several default selections in single-select mode; keeping the last"
            );
            for id in &options.default_selected {
                tree.node(id.as_str())?;
            }
            state.set_selected(&NodeId::from(last), true);
        }
    }

    Ok(state)
}
