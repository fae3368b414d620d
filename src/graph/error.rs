//! Error type shared by indexing, tracing and loading

use super::node::NodeId;
use crate::index::Direction;
use thiserror::Error;

/// Errors that can occur in flatmap operations
#[derive(Debug, Error)]
pub enum FlatmapError {
    #[error("Unknown node: {0}")]
    UnknownNode(NodeId),

    #[error("Direction BOTH needs a merge policy; index OUTGOING and INCOMING separately")]
    AmbiguousDirection,

    #[error("Cycle detected at chain part {part} after {depth} steps")]
    CycleDetected { part: NodeId, depth: usize },

    #[error("Route tracing needs an OUTGOING index, got {0}")]
    TracerDirection(Direction),

    #[error("Invalid direction: {0}")]
    InvalidDirection(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Result type for flatmap operations
pub type FlatmapResult<T> = Result<T, FlatmapError>;
