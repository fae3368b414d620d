//! Index building blocks: direction, adjacency and reserved ids

use crate::graph::{Edge, FlatmapError, FlatmapResult, NodeId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::str::FromStr;

/// Id and label of the synthetic root introduced for multi-root exports
pub const SYNTHETIC_ROOT: &str = "*ROOT*";
pub const SYNTHETIC_ROOT_LABEL: &str = "ROOT";

/// Reserved id (and label) marking a detected cycle
pub const CYCLE_SENTINEL: &str = "CYCLE DETECTED";

/// How subject/object roles map to parent/child in the derived tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    /// Parent is the subject; labels read `pred>`
    #[default]
    #[serde(alias = "outgoing")]
    Outgoing,
    /// Parent is the object; labels read `<pred`
    #[serde(alias = "incoming")]
    Incoming,
    /// Both at once; needs a merge policy and is rejected by the indexer
    #[serde(alias = "both")]
    Both,
}

impl Direction {
    /// Map an edge to its (parent, child) pair
    pub fn orient<'e>(self, edge: &'e Edge) -> FlatmapResult<(&'e NodeId, &'e NodeId)> {
        match self {
            Direction::Outgoing => Ok((&edge.sub, &edge.obj)),
            Direction::Incoming => Ok((&edge.obj, &edge.sub)),
            Direction::Both => Err(FlatmapError::AmbiguousDirection),
        }
    }

    /// Attach the reading direction to a predicate
    pub fn decorate(self, predicate: &str) -> FlatmapResult<String> {
        match self {
            Direction::Outgoing => Ok(outgoing(predicate)),
            Direction::Incoming => Ok(incoming(predicate)),
            Direction::Both => Err(FlatmapError::AmbiguousDirection),
        }
    }
}

/// `pred>`: the predicate read from subject to object
pub fn outgoing(predicate: &str) -> String {
    format!("{predicate}>")
}

/// `<pred`: the predicate read from object to subject
pub fn incoming(predicate: &str) -> String {
    format!("<{predicate}")
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Direction::Outgoing => "OUTGOING",
            Direction::Incoming => "INCOMING",
            Direction::Both => "BOTH",
        };
        f.write_str(name)
    }
}

impl FromStr for Direction {
    type Err = FlatmapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "OUTGOING" => Ok(Direction::Outgoing),
            "INCOMING" => Ok(Direction::Incoming),
            "BOTH" => Ok(Direction::Both),
            _ => Err(FlatmapError::InvalidDirection(s.to_string())),
        }
    }
}

/// id -> ordered ids, where absent keys read as empty
///
/// Lookups never insert, so iterating keys afterwards only sees ids that
/// actually carry edges.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Adjacency {
    map: HashMap<NodeId, Vec<NodeId>>,
}

impl Adjacency {
    pub fn new() -> Self {
        Self::default()
    }

    /// Neighbors of `id` in insertion order
    pub fn get(&self, id: &NodeId) -> &[NodeId] {
        self.map.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains_key(&self, id: &NodeId) -> bool {
        self.map.contains_key(id)
    }

    pub fn keys(&self) -> impl Iterator<Item = &NodeId> {
        self.map.keys()
    }

    /// Number of ids with at least one neighbor
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub(crate) fn push(&mut self, key: NodeId, value: NodeId) {
        self.map.entry(key).or_default().push(value);
    }

    pub(crate) fn set(&mut self, key: NodeId, values: Vec<NodeId>) {
        self.map.insert(key, values);
    }
}
