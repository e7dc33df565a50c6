//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::services::{CaseSensitive, LabelContains, NodeMatcher};
use crate::domain::value_objects::{CheckboxPosition, NodeId};
use crate::error::CanopyResult;

use super::loader::{self, ConfigWarning};

/// Which nodes start expanded
///
/// Accepts either form:
///   default_expanded = true
///   default_expanded = ["src", "src/domain"]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DefaultExpanded {
    /// Every internal node
    All,
    /// Nothing
    #[default]
    None,
    /// Exactly these ids
    Ids(Vec<NodeId>),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum DefaultExpandedDe {
    Flag(bool),
    List(Vec<NodeId>),
}

impl<'de> Deserialize<'de> for DefaultExpanded {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        match DefaultExpandedDe::deserialize(deserializer)? {
            DefaultExpandedDe::Flag(true) => Ok(Self::All),
            DefaultExpandedDe::Flag(false) => Ok(Self::None),
            DefaultExpandedDe::List(ids) => Ok(Self::Ids(ids)),
        }
    }
}

impl Serialize for DefaultExpanded {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::All => DefaultExpandedDe::Flag(true).serialize(serializer),
            Self::None => DefaultExpandedDe::Flag(false).serialize(serializer),
            Self::Ids(ids) => ids.serialize(serializer),
        }
    }
}

/// Caller-supplied knobs for a tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeOptions {
    #[serde(default)]
    pub default_expanded: DefaultExpanded,

    /// Checked on creation, propagated like a user check
    #[serde(default)]
    pub default_checked: Vec<NodeId>,

    #[serde(default)]
    pub default_selected: Vec<NodeId>,

    #[serde(default)]
    pub checkbox_position: CheckboxPosition,

    #[serde(default)]
    pub multi_select: bool,

    /// Draw checkboxes at all
    #[serde(default = "default_true")]
    pub checkable: bool,
}

impl Default for TreeOptions {
    fn default() -> Self {
        Self {
            default_expanded: DefaultExpanded::default(),
            default_checked: Vec::new(),
            default_selected: Vec::new(),
            checkbox_position: CheckboxPosition::default(),
            multi_select: false,
            checkable: true,
        }
    }
}

/// Search configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SearchConfig {
    #[serde(default)]
    pub case_sensitive: bool,
}

impl SearchConfig {
    /// Matcher implied by this configuration
    pub fn matcher(&self) -> Box<dyn NodeMatcher> {
        if self.case_sensitive {
            Box::new(CaseSensitive)
        } else {
            Box::new(LabelContains)
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub verbosity: Verbosity,

    /// Force ASCII icons even on UTF-8 terminals
    #[serde(default)]
    pub ascii: bool,

    /// Draw connector lines instead of plain indentation
    #[serde(default = "default_true")]
    pub show_lines: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            verbosity: Verbosity::default(),
            ascii: false,
            show_lines: true,
        }
    }
}

/// Verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
}

impl Verbosity {
    /// Default tracing filter directive for this level
    pub fn filter_directive(&self) -> &'static str {
        match self {
            Verbosity::Quiet => "error",
            Verbosity::Normal => "warn",
            Verbosity::Verbose => "info",
            Verbosity::Debug => "debug",
        }
    }
}

fn default_true() -> bool {
    true
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub tree: TreeOptions,

    #[serde(default)]
    pub search: SearchConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> CanopyResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> CanopyResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Resolve explicit, project, or user config, then apply env overrides
    pub fn resolve(
        explicit: Option<&Path>,
        project_root: Option<&Path>,
    ) -> CanopyResult<(Self, Vec<ConfigWarning>)> {
        loader::resolve(explicit, project_root)
    }
}
