//! Tracing Event Sink

use crate::domain::entities::NodeRef;
use crate::domain::ports::{SelectionChange, SelectionEventSink};

/// Logs every selection change at `info`
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingEventSink;

impl SelectionEventSink for TracingEventSink {
    fn on_change(&self, node: NodeRef<'_>, change: SelectionChange) {
        tracing::info!(
            id = %node.id(),
            label = node.label(),
            event = change.name(),
            value = change.value(),
            "selection changed"
        );
    }
}
