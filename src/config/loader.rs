//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::CheckboxPosition;
use crate::error::{CanopyError, CanopyResult};

use super::types::{Config, Verbosity};

/// Non-fatal configuration problem surfaced to CLI users.
///
/// Collected while resolving, before logging is set up; the binary logs
/// them once the subscriber is installed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// A key the config schema does not know
    UnknownKey {
        key: String,
        file: PathBuf,
        /// 1-indexed line, if the key could be located
        line: Option<usize>,
        suggestion: Option<String>,
    },
    /// A project or user config that failed to load and was skipped
    SkippedFile { file: PathBuf, message: String },
    /// A `CANOPY_*` variable whose value was ignored
    InvalidEnv {
        var: &'static str,
        value: String,
        message: String,
    },
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigWarning::UnknownKey {
                key,
                file,
                line,
                suggestion,
            } => {
                write!(f, "unknown config key '{}' in {}", key, file.display())?;
                if let Some(line) = line {
                    write!(f, ":{}", line)?;
                }
                if let Some(suggestion) = suggestion {
                    write!(f, " (did you mean '{}'?)", suggestion)?;
                }
                Ok(())
            }
            ConfigWarning::SkippedFile { file, message } => {
                write!(f, "ignoring unreadable config {}: {}", file.display(), message)
            }
            ConfigWarning::InvalidEnv {
                var,
                value,
                message,
            } => write!(f, "ignoring {}={}: {}", var, value, message),
        }
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> CanopyResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| CanopyError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning::UnknownKey {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Pick the config source, then apply environment overrides.
///
/// An explicit path must load. Project and user configs are best-effort:
/// a broken file is skipped and reported as a warning.
pub fn resolve(
    explicit: Option<&Path>,
    project_root: Option<&Path>,
) -> CanopyResult<(Config, Vec<ConfigWarning>)> {
    let (config, mut warnings) = match explicit {
        Some(path) => load_with_warnings(path)?,
        None => load_first_candidate(project_root),
    };

    let (config, env_warnings) = with_env_overrides(config, env_var);
    warnings.extend(env_warnings);
    Ok((config, warnings))
}

fn load_first_candidate(project_root: Option<&Path>) -> (Config, Vec<ConfigWarning>) {
    let candidates = project_root
        .map(|root| root.join(".canopy/config.toml"))
        .into_iter()
        .chain(dirs::config_dir().map(|dir| dir.join("canopy/config.toml")));

    let mut skipped = Vec::new();
    for candidate in candidates {
        if !candidate.exists() {
            continue;
        }
        match load_with_warnings(&candidate) {
            Ok((config, mut warnings)) => {
                tracing::debug!(path = %candidate.display(), "loaded config");
                skipped.append(&mut warnings);
                return (config, skipped);
            }
            Err(e) => skipped.push(ConfigWarning::SkippedFile {
                message: e.to_string(),
                file: candidate,
            }),
        }
    }

    (Config::default(), skipped)
}

fn env_var(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Apply environment variable overrides (CANOPY_* prefix).
///
/// Values that cannot be used are reported, not applied.
pub fn with_env_overrides(
    mut config: Config,
    get_env: impl Fn(&str) -> Option<String>,
) -> (Config, Vec<ConfigWarning>) {
    let mut warnings = Vec::new();

    // CANOPY_MULTI_SELECT
    if let Some(val) = get_env("CANOPY_MULTI_SELECT") {
        config.tree.multi_select = parse_flag(&val);
    }

    // CANOPY_CHECKBOX_POSITION
    if let Some(val) = get_env("CANOPY_CHECKBOX_POSITION") {
        match val.parse::<CheckboxPosition>() {
            Ok(position) => config.tree.checkbox_position = position,
            Err(message) => warnings.push(ConfigWarning::InvalidEnv {
                var: "CANOPY_CHECKBOX_POSITION",
                value: val,
                message,
            }),
        }
    }

    // CANOPY_VERBOSITY
    if let Some(verbosity) = get_env("CANOPY_VERBOSITY") {
        config.output.verbosity = match verbosity.to_lowercase().as_str() {
            "quiet" => Verbosity::Quiet,
            "normal" => Verbosity::Normal,
            "verbose" => Verbosity::Verbose,
            "debug" => Verbosity::Debug,
            _ => {
                warnings.push(ConfigWarning::InvalidEnv {
                    var: "CANOPY_VERBOSITY",
                    message: "expected quiet, normal, verbose or debug".to_string(),
                    value: verbosity,
                });
                config.output.verbosity
            }
        };
    }

    // CANOPY_ASCII
    if let Some(val) = get_env("CANOPY_ASCII") {
        config.output.ascii = parse_flag(&val);
    }

    (config, warnings)
}

fn parse_flag(val: &str) -> bool {
    !matches!(val.trim().to_lowercase().as_str(), "" | "0" | "false" | "no" | "off")
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "tree",
        "default_expanded",
        "default_checked",
        "default_selected",
        "checkbox_position",
        "multi_select",
        "checkable",
        "search",
        "case_sensitive",
        "output",
        "verbosity",
        "ascii",
        "show_lines",
    ];

    CANDIDATES
        .iter()
        .map(|candidate| (*candidate, edit_distance(unknown, candidate)))
        .min_by_key(|&(_, dist)| dist)
        .filter(|&(_, dist)| dist <= 2)
        .map(|(candidate, _)| candidate.to_string())
}

fn edit_distance(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=b.len()).collect();

    for (i, ca) in a.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let above = row[j + 1];
            row[j + 1] = (above + 1)
                .min(row[j] + 1)
                .min(diagonal + usize::from(ca != *cb));
            diagonal = above;
        }
    }

    row[b.len()]
}
