//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--config, --json, --ascii, --verbose) are inherited by all subcommands
//! - `apply` takes scripted operations; `interactive` drives the same engine from the keyboard

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands::apply::Operation;

/// Canopy - hierarchical tri-state selection for tree data
#[derive(Parser, Debug)]
#[command(name = "canopy")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Explicit config file (skips project/user lookup)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output format for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Force ASCII icons and connector lines
    #[arg(long, global = true)]
    pub ascii: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the projected tree
    Render {
        /// Tree file (JSON or TOML, `-` for stdin)
        tree: PathBuf,

        /// Show only nodes matching this query and their ancestors
        #[arg(long, value_name = "QUERY")]
        filter: Option<String>,

        /// Expand every internal node
        #[arg(long)]
        expand_all: bool,
    },

    /// Apply scripted operations, then print the result
    Apply {
        /// Tree file (JSON or TOML, `-` for stdin)
        tree: PathBuf,

        /// Operation, in order (check:ID, uncheck:ID, click:ID, expand:ID,
        /// collapse:ID, select:ID, deselect:ID, check-all, uncheck-all, invert)
        #[arg(long = "op", value_name = "OP", required = true)]
        ops: Vec<Operation>,

        /// Filter applied after the operations
        #[arg(long, value_name = "QUERY")]
        filter: Option<String>,
    },

    /// Check that a tree file loads and ids are unique
    Validate {
        /// Tree file (JSON or TOML, `-` for stdin)
        tree: PathBuf,
    },

    /// Pick nodes in a terminal tree view
    Interactive {
        /// Tree file (JSON or TOML)
        tree: PathBuf,
    },
}
