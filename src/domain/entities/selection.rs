//! Selection state snapshot
//!
//! Four independent id sets. Each set lives behind an `Arc` and is copied only
//! when an operation writes to it, so a new snapshot shares every axis the
//! operation did not touch with the previous one.

use std::collections::BTreeSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{CheckState, NodeId};

type IdSet = Arc<BTreeSet<NodeId>>;

/// Checked / indeterminate / expanded / selected state of a tree
///
/// `checked` and `indeterminate` never share an id. Deserializing goes
/// through `SavedSelection` so a snapshot breaking that rule is rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SavedSelection")]
pub struct SelectionState {
    checked: IdSet,
    indeterminate: IdSet,
    expanded: IdSet,
    selected: IdSet,
}

/// Wire form of a stored snapshot
#[derive(Deserialize)]
struct SavedSelection {
    #[serde(default)]
    checked: BTreeSet<NodeId>,
    #[serde(default)]
    indeterminate: BTreeSet<NodeId>,
    #[serde(default)]
    expanded: BTreeSet<NodeId>,
    #[serde(default)]
    selected: BTreeSet<NodeId>,
}

impl TryFrom<SavedSelection> for SelectionState {
    type Error = String;

    fn try_from(saved: SavedSelection) -> Result<Self, Self::Error> {
        if let Some(id) = saved.checked.intersection(&saved.indeterminate).next() {
            return Err(format!("node '{}' is both checked and indeterminate", id));
        }
        Ok(Self {
            checked: Arc::new(saved.checked),
            indeterminate: Arc::new(saved.indeterminate),
            expanded: Arc::new(saved.expanded),
            selected: Arc::new(saved.selected),
        })
    }
}

impl SelectionState {
    /// Empty state: nothing checked, expanded or selected
    pub fn new() -> Self {
        Self::default()
    }

    pub fn checked(&self) -> &BTreeSet<NodeId> {
        &self.checked
    }

    pub fn indeterminate(&self) -> &BTreeSet<NodeId> {
        &self.indeterminate
    }

    pub fn expanded(&self) -> &BTreeSet<NodeId> {
        &self.expanded
    }

    pub fn selected(&self) -> &BTreeSet<NodeId> {
        &self.selected
    }

    pub fn is_checked(&self, id: &str) -> bool {
        self.checked.contains(id)
    }

    pub fn is_indeterminate(&self, id: &str) -> bool {
        self.indeterminate.contains(id)
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.contains(id)
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    pub fn check_state(&self, id: &str) -> CheckState {
        if self.is_checked(id) {
            CheckState::Checked
        } else if self.is_indeterminate(id) {
            CheckState::Indeterminate
        } else {
            CheckState::Unchecked
        }
    }

    /// Whether two snapshots share the same underlying set for every axis
    pub fn shares_storage_with(&self, other: &SelectionState) -> bool {
        Arc::ptr_eq(&self.checked, &other.checked)
            && Arc::ptr_eq(&self.indeterminate, &other.indeterminate)
            && Arc::ptr_eq(&self.expanded, &other.expanded)
            && Arc::ptr_eq(&self.selected, &other.selected)
    }

    /// Write the check axis of one node, keeping the two sets disjoint.
    ///
    /// Only copies a set when membership actually changes.
    pub(crate) fn set_check_state(&mut self, id: &NodeId, state: CheckState) {
        let (in_checked, in_indeterminate) = match state {
            CheckState::Checked => (true, false),
            CheckState::Indeterminate => (false, true),
            CheckState::Unchecked => (false, false),
        };
        set_membership(&mut self.checked, id, in_checked);
        set_membership(&mut self.indeterminate, id, in_indeterminate);
    }

    pub(crate) fn set_expanded(&mut self, id: &NodeId, expanded: bool) {
        set_membership(&mut self.expanded, id, expanded);
    }

    pub(crate) fn set_selected(&mut self, id: &NodeId, selected: bool) {
        set_membership(&mut self.selected, id, selected);
    }

    pub(crate) fn replace_selected(&mut self, ids: BTreeSet<NodeId>) {
        if *self.selected != ids {
            self.selected = Arc::new(ids);
        }
    }
}

fn set_membership(set: &mut IdSet, id: &NodeId, present: bool) {
    if set.contains(id) == present {
        return;
    }
    let set = Arc::make_mut(set);
    if present {
        set.insert(id.clone());
    } else {
        set.remove(id);
    }
}
