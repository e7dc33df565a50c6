//! Domain Ports
//!
//! Interfaces the engine calls out through. Implementations live in
//! `infrastructure` or are supplied by the caller.

mod selection_events;

pub use selection_events::{FnEventSink, NoopEventSink, SelectionChange, SelectionEventSink};
