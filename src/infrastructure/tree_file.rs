//! Tree file loading
//!
//! Reads a `TreeInput` from JSON or TOML. Accepted shapes:
//!
//! - tagged: `{ "kind": "composed", "nodes": [...] }`
//! - untagged table: `{ "nodes": [...] }` (declarative)
//! - JSON only: a bare array of declarative nodes
//!
//! `-` reads from stdin as JSON.

use std::fs;
use std::io::Read;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::domain::entities::{TreeInput, TreeNode};
use crate::error::{CanopyError, CanopyResult};

/// On-disk format of a tree file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeFormat {
    Json,
    Toml,
}

impl TreeFormat {
    /// Guess from the file extension; anything but `.toml` is JSON
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => TreeFormat::Toml,
            _ => TreeFormat::Json,
        }
    }
}

#[derive(Deserialize)]
struct NodesTable {
    nodes: Vec<TreeNode>,
}

/// Load a tree file from disk (or stdin for `-`)
pub fn load_tree_file(path: &Path) -> CanopyResult<TreeInput> {
    let content = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        fs::read_to_string(path)?
    };

    let format = TreeFormat::from_path(path);
    tracing::debug!(path = %path.display(), ?format, bytes = content.len(), "loading tree file");

    parse_tree(&content, format).map_err(|message| CanopyError::TreeFile {
        file: path.to_path_buf(),
        message,
    })
}

/// Parse tree file content
pub fn parse_tree(content: &str, format: TreeFormat) -> Result<TreeInput, String> {
    match format {
        TreeFormat::Json => parse_json(content),
        TreeFormat::Toml => parse_toml(content),
    }
}

fn parse_json(content: &str) -> Result<TreeInput, String> {
    let value: serde_json::Value = serde_json::from_str(content).map_err(|e| e.to_string())?;
    match value {
        serde_json::Value::Array(_) => from_json::<Vec<TreeNode>>(value).map(TreeInput::from),
        serde_json::Value::Object(ref map) if map.contains_key("kind") => from_json(value),
        serde_json::Value::Object(_) => {
            from_json::<NodesTable>(value).map(|t| TreeInput::from(t.nodes))
        }
        other => Err(format!(
            "expected an array of nodes or an object with \"nodes\", found {}",
            json_kind(&other)
        )),
    }
}

fn parse_toml(content: &str) -> Result<TreeInput, String> {
    let table: toml::Table = content.parse().map_err(|e: toml::de::Error| e.to_string())?;
    let tagged = table.contains_key("kind");
    let value = toml::Value::Table(table);
    if tagged {
        value.try_into().map_err(|e: toml::de::Error| e.to_string())
    } else {
        value
            .try_into::<NodesTable>()
            .map(|t| TreeInput::from(t.nodes))
            .map_err(|e| e.to_string())
    }
}

fn from_json<T: DeserializeOwned>(value: serde_json::Value) -> Result<T, String> {
    serde_json::from_value(value).map_err(|e| e.to_string())
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
