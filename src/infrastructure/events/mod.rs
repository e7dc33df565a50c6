//! Event Sink Implementations
//!
//! Provides concrete implementations of SelectionEventSink:
//! - JsonEventSink: NDJSON output for scripting
//! - TracingEventSink: structured log lines

mod json;
mod logging;

pub use json::JsonEventSink;
pub use logging::TracingEventSink;
