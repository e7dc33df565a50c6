//! Configuration module for Canopy
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (CANOPY_*)
//! 3. Explicit `--config` file
//! 4. Project config (.canopy/config.toml)
//! 5. User config (~/.config/canopy/config.toml)
//! 6. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::ConfigWarning;
pub use types::{Config, DefaultExpanded, OutputConfig, SearchConfig, TreeOptions, Verbosity};
