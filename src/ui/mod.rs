//! Terminal UI
//!
//! - `theme` - Icons, connector lines and colors
//! - `terminal` - Capability detection
//! - `json` - Line-delimited JSON output
//! - `widgets/tree_view` - The interactive tree picker

pub mod json;
pub mod terminal;
pub mod theme;
pub mod widgets;
