//! Canopy - hierarchical tri-state selection engine
//!
//! Canopy keeps checked, indeterminate, expanded and selected state for a
//! caller-supplied tree. Checking a node pushes the change down to every
//! descendant and recomputes ancestors from their children; a text filter
//! narrows the visible rows without touching selection; a view projection
//! flattens everything into render-ready rows.

pub mod application;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;
pub mod ui;

// Re-exports for convenience
pub use application::SelectionEngine;
pub use config::{Config, TreeOptions};
pub use domain::entities::{ComposedItem, NodeRef, SelectionState, Tree, TreeInput, TreeNode};
pub use domain::ports::{SelectionChange, SelectionEventSink};
pub use domain::services::{NodeMatcher, RenderRow, VisibleNodeSet};
pub use domain::value_objects::{CheckState, CheckboxPosition, NodeId};
pub use error::{CanopyError, CanopyResult};
