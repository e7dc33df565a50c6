//! Tree View Widget
//!
//! Terminal front end for a `SelectionEngine`: renders projected rows with
//! tri-state checkboxes and drives the engine from keyboard input.
//!
//! # Module Structure
//!
//! - `view` - TreeView cursor/search state and action handling
//! - `render` - String rendering of rows, status bar and help bar
//! - `input` - Keyboard mapping and the interactive loop

mod input;
mod render;
mod view;

pub use input::{key_to_action, run_interactive};
pub use render::{render_head, render_help_bar, render_rows, render_status_bar, RenderOptions};
pub use view::{TreeAction, TreeView};
