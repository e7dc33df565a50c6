//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `events/` - Selection event sinks (NDJSON, tracing)
//! - `tree_file` - JSON/TOML tree file loading

pub mod events;
pub mod tree_file;

pub use events::{JsonEventSink, TracingEventSink};
pub use tree_file::{load_tree_file, parse_tree, TreeFormat};
