//! Node representation in a KB export

use serde::{Deserialize, Serialize};

/// Identifier of a node as it appears in the export (a CURIE or IRI)
///
/// Serializes as a plain string, e.g. `"UBERON:0000407"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    /// Create a NodeId from a string
    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True for the empty id, which exports use for "no value"
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for NodeId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// A node in the knowledge graph export
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Unique identifier within one export
    pub id: NodeId,
    /// Human-readable label, may be missing or empty
    #[serde(default)]
    pub lbl: Option<String>,
}

impl Node {
    /// Create a node with a label
    pub fn new(id: impl Into<NodeId>, lbl: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            lbl: Some(lbl.into()),
        }
    }

    /// Create a node without a label
    pub fn unlabeled(id: impl Into<NodeId>) -> Self {
        Self {
            id: id.into(),
            lbl: None,
        }
    }

    /// The label, treating an empty string as absent
    pub fn label(&self) -> Option<&str> {
        self.lbl.as_deref().filter(|l| !l.is_empty())
    }

    /// Text a human should see: the label, or the raw id when unlabeled
    pub fn display_label(&self) -> &str {
        self.label().unwrap_or(self.id.as_str())
    }
}
