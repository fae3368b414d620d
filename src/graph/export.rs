//! GraphExport: the `{"nodes": [...], "edges": [...]}` document produced by a KB query

use super::edge::Edge;
use super::error::FlatmapResult;
use super::node::Node;
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// A parsed knowledge-graph export
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphExport {
    /// All nodes, in export order
    #[serde(default)]
    pub nodes: Vec<Node>,
    /// All edges, in export order
    #[serde(default)]
    pub edges: Vec<Edge>,
}

/// Node and edge counts for one export
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ExportStats {
    pub nodes: usize,
    pub edges: usize,
}

/// Edge counts around structural filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct FilterReport {
    /// Edges in the raw export
    pub raw: usize,
    /// Edges left after dropping `owl:Nothing` edges
    pub after_nothing: usize,
    /// Edges left after also dropping has-part meta edges
    pub after_has_part: usize,
}

impl GraphExport {
    /// Create an export from node and edge lists
    pub fn new(nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        Self { nodes, edges }
    }

    /// Parse an export from a JSON string
    pub fn from_json_str(json: &str) -> FlatmapResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse an export from any reader
    pub fn from_reader(reader: impl Read) -> FlatmapResult<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Load an export from a JSON file
    pub fn from_path(path: impl AsRef<Path>) -> FlatmapResult<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let export = Self::from_reader(std::io::BufReader::new(file))?;
        debug!(path = %path.display(), nodes = export.nodes.len(), edges = export.edges.len(), "loaded export");
        Ok(export)
    }

    pub fn stats(&self) -> ExportStats {
        ExportStats {
            nodes: self.nodes.len(),
            edges: self.edges.len(),
        }
    }

    /// Counts [`without_structural_edges`](Self::without_structural_edges) would report, without dropping anything
    pub fn structural_report(&self) -> FilterReport {
        let kept: Vec<&Edge> = self.edges.iter().filter(|e| !e.touches_nothing()).collect();
        FilterReport {
            raw: self.edges.len(),
            after_nothing: kept.len(),
            after_has_part: kept.iter().filter(|e| !e.is_has_part()).count(),
        }
    }

    /// Drop `owl:Nothing` edges, then BFO has-part meta edges
    pub fn without_structural_edges(mut self) -> (Self, FilterReport) {
        let raw = self.edges.len();
        self.edges.retain(|e| !e.touches_nothing());
        let after_nothing = self.edges.len();
        self.edges.retain(|e| !e.is_has_part());
        let report = FilterReport {
            raw,
            after_nothing,
            after_has_part: self.edges.len(),
        };
        debug!(?report, "filtered structural edges");
        (self, report)
    }
}
