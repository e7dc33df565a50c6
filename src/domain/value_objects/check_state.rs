//! Check State Value Object

use serde::{Deserialize, Serialize};

/// Resolved checkbox state of a single node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CheckState {
    /// Neither the node nor any descendant is checked (○)
    #[default]
    Unchecked,
    /// The node and all its descendants are checked (●)
    Checked,
    /// Some but not all descendants are checked (◐)
    Indeterminate,
}

impl CheckState {
    pub fn is_checked(&self) -> bool {
        matches!(self, CheckState::Checked)
    }

    pub fn is_indeterminate(&self) -> bool {
        matches!(self, CheckState::Indeterminate)
    }

    /// State a direct click moves this node to.
    ///
    /// Indeterminate is derived and never settable, so clicking it checks.
    pub fn clicked(&self) -> bool {
        !self.is_checked()
    }
}
