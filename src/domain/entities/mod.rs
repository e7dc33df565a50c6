//! Domain Entities
//!
//! - `node` - Caller-supplied tree input (`TreeNode`, `ComposedItem`, `TreeInput`)
//! - `tree` - Arena-indexed `Tree` built once per tree version
//! - `selection` - Copy-on-write `SelectionState` snapshot

mod node;
mod selection;
mod tree;

pub use node::{ComposedItem, TreeInput, TreeNode};
pub use selection::SelectionState;
pub use tree::{Ancestors, NodeRef, Tree};
