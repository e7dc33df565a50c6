//! Selection Event Port
//!
//! Hooks invoked with `(node, new state)` after every operation that changed
//! the selection state. The presentation layer uses them to re-render and to
//! run caller-level side effects.

use crate::domain::entities::NodeRef;

/// A single-axis change on one node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionChange {
    /// Check axis changed; `true` means now checked
    Checked(bool),
    /// Node was expanded (`true`) or collapsed (`false`)
    Expanded(bool),
    /// Node was selected (`true`) or deselected (`false`)
    Selected(bool),
}

impl SelectionChange {
    /// Short event name used by structured sinks
    pub fn name(&self) -> &'static str {
        match self {
            SelectionChange::Checked(_) => "check",
            SelectionChange::Expanded(_) => "expand",
            SelectionChange::Selected(_) => "select",
        }
    }

    pub fn value(&self) -> bool {
        match *self {
            SelectionChange::Checked(v)
            | SelectionChange::Expanded(v)
            | SelectionChange::Selected(v) => v,
        }
    }
}

/// Trait for receiving selection events
///
/// Implementations can be:
/// - TracingEventSink: structured log lines
/// - JsonEventSink: NDJSON event stream for scripting
/// - FnEventSink: a caller closure
/// - NoopEventSink: Silent operation
pub trait SelectionEventSink: Send + Sync {
    /// Handle a change on `node`
    fn on_change(&self, node: NodeRef<'_>, change: SelectionChange);
}

/// No-op event sink
pub struct NoopEventSink;

impl SelectionEventSink for NoopEventSink {
    fn on_change(&self, _node: NodeRef<'_>, _change: SelectionChange) {}
}

/// Adapts a closure into an event sink
pub struct FnEventSink<F>(pub F);

impl<F> FnEventSink<F>
where
    F: Fn(NodeRef<'_>, SelectionChange) + Send + Sync,
{
    pub fn new(f: F) -> Self {
        Self(f)
    }
}

impl<F> SelectionEventSink for FnEventSink<F>
where
    F: Fn(NodeRef<'_>, SelectionChange) + Send + Sync,
{
    fn on_change(&self, node: NodeRef<'_>, change: SelectionChange) {
        (self.0)(node, change)
    }
}
