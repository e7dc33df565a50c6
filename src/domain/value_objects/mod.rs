//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod check_state;
mod checkbox_position;
mod node_id;

pub use check_state::CheckState;
pub use checkbox_position::CheckboxPosition;
pub use node_id::NodeId;
