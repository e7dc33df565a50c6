//! Application Layer
//!
//! Stateful orchestration over the pure domain services.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain propagation rules (those are in Domain)
//!
//! - `SelectionEngine` - Owns tree, state, filter and hooks

mod engine;

pub use engine::SelectionEngine;
