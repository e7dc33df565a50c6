//! Error types for Canopy
//!
//! Uses `thiserror` for library errors; the binary wraps them with `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::value_objects::NodeId;

/// Result type alias for Canopy operations
pub type CanopyResult<T> = Result<T, CanopyError>;

/// Main error type for Canopy operations
#[derive(Error, Debug)]
pub enum CanopyError {
    /// An operation referenced an id that is not in the current tree
    #[error("node '{id}' does not exist in the tree")]
    InvalidNodeId { id: NodeId },

    /// The same id appears twice in one tree
    #[error("duplicate node id '{id}' (ids must be unique across the whole tree)")]
    DuplicateNodeId { id: NodeId },

    /// A node was given an empty id
    #[error("node '{label}' has an empty id")]
    EmptyNodeId { label: String },

    /// Tree file could not be parsed
    #[error("invalid tree file {file}: {message}")]
    TreeFile { file: PathBuf, message: String },

    /// Configuration file could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// A scripted operation could not be parsed
    #[error("invalid operation '{input}': {message}")]
    InvalidOperation { input: String, message: String },

    /// Interactive selection was cancelled by the user
    #[error("selection aborted by user")]
    SelectionAborted,

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CanopyError {
    pub(crate) fn invalid_node(id: impl Into<NodeId>) -> Self {
        Self::InvalidNodeId { id: id.into() }
    }
}
