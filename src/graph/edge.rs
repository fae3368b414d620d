//! Labeled edge representation in a KB export

use super::node::NodeId;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Placeholder class that marks an edge as carrying no real relation
pub const OWL_NOTHING: &str = "owl:Nothing";

/// BFO "has part", used by exports for structural meta edges
pub const BFO_HAS_PART: &str = "http://purl.obolibrary.org/obo/BFO_0000051";

/// A directed, predicate-labeled edge (subject -> object)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// Subject node
    pub sub: NodeId,
    /// Predicate, e.g. "apinatomy:next"
    pub pred: String,
    /// Object node
    pub obj: NodeId,
    /// Free-form metadata attached by the exporter
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Map<String, Value>>,
}

impl Edge {
    /// Create a new edge without metadata
    pub fn new(sub: impl Into<NodeId>, pred: impl Into<String>, obj: impl Into<NodeId>) -> Self {
        Self {
            sub: sub.into(),
            pred: pred.into(),
            obj: obj.into(),
            meta: None,
        }
    }

    /// Attach a metadata entry
    pub fn with_meta(mut self, key: impl Into<String>, value: Value) -> Self {
        self.meta
            .get_or_insert_with(Map::new)
            .insert(key.into(), value);
        self
    }

    /// True if any endpoint or the predicate is `owl:Nothing`
    pub fn touches_nothing(&self) -> bool {
        self.sub.as_str() == OWL_NOTHING || self.obj.as_str() == OWL_NOTHING || self.pred == OWL_NOTHING
    }

    /// True if the metadata marks this as a BFO has-part structural edge
    ///
    /// `owlType` is written either as a single string or as a list.
    pub fn is_has_part(&self) -> bool {
        let Some(owl_type) = self.meta.as_ref().and_then(|m| m.get("owlType")) else {
            return false;
        };
        match owl_type {
            Value::String(s) => s.contains(BFO_HAS_PART),
            Value::Array(items) => items
                .iter()
                .any(|v| v.as_str().is_some_and(|s| s == BFO_HAS_PART)),
            _ => false,
        }
    }

    /// True for edges that are dropped before indexing
    pub fn is_structural(&self) -> bool {
        self.touches_nothing() || self.is_has_part()
    }
}
