//! Node identifier value object
//!
//! Ids are unique across the whole tree, not just among siblings, so every
//! piece of selection state is keyed by `NodeId` rather than tree position.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique identifier of a tree node
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for NodeId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for NodeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NodeId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for NodeId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&NodeId> for NodeId {
    fn from(id: &NodeId) -> Self {
        id.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn set_lookup_by_str() {
        let mut set = BTreeSet::new();
        set.insert(NodeId::from("docs/readme"));
        assert!(set.contains("docs/readme"));
        assert!(!set.contains("docs"));
    }

    #[test]
    fn serde_is_transparent() {
        let id: NodeId = serde_json::from_str(r#""a""#).unwrap();
        assert_eq!(id.as_str(), "a");
        assert_eq!(serde_json::to_string(&id).unwrap(), r#""a""#);
    }
}
