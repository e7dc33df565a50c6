//! Domain Services
//!
//! Stateless functions over a `Tree` and a `SelectionState`:
//!
//! - `propagation` - Check/expand/select transitions and bulk check operations
//! - `filter` - Text filter overlay producing a `VisibleNodeSet`
//! - `projection` - Flattened render rows

pub mod filter;
pub mod projection;
pub mod propagation;

pub use filter::{apply_filter, CaseSensitive, LabelContains, NodeMatcher, VisibleNodeSet};
pub use projection::{project, RenderRow};
pub use propagation::{
    check_all, checked_leaves, click_check, invert, recompute_all, toggle_check, toggle_expand,
    toggle_select, uncheck_all,
};
