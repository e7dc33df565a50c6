//! Common test utilities for Canopy CLI tests.
//!
//! This module provides:
//! - `TestEnv`: isolated project and home directories plus a CLI runner
//! - Fixtures: reusable tree files

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
