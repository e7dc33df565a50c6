//! JSON Event Sink
//!
//! Streams selection events as NDJSON for scripting.

use crate::domain::entities::NodeRef;
use crate::domain::ports::{SelectionChange, SelectionEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self::with_writer(io::stdout())
    }

    /// Create a JSON event sink writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl SelectionEventSink for JsonEventSink {
    fn on_change(&self, node: NodeRef<'_>, change: SelectionChange) {
        self.write_event(serde_json::json!({
            "event": change.name(),
            "id": node.id(),
            "label": node.label(),
            "value": change.value(),
        }));
    }
}
