//! Domain Layer
//!
//! The selection engine proper: pure tree logic with no I/O.
//!
//! ## Structure
//!
//! - `entities/` - Tree input, the indexed `Tree`, and `SelectionState`
//! - `value_objects/` - Immutable value types (NodeId, CheckState, CheckboxPosition)
//! - `services/` - Pure functions: propagation, filtering, view projection
//! - `ports/` - Hook interface for observing selection changes
//!
//! ## Design Principles
//!
//! 1. **No I/O** - Tree files and config are loaded by `infrastructure`/`config`
//! 2. **Pure Functions** - Services take `&Tree` and `&SelectionState` and return a new snapshot
//! 3. **Ports & Adapters** - Side effects on change go through `SelectionEventSink`

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
