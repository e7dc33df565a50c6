//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Turning parsed flags into resolved configuration for the commands
//!
//! ## Structure
//!
//! - `cli` - clap definitions

pub mod cli;

pub use cli::{Cli, Commands};
