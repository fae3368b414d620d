//! Route trace result structures

use super::vocab::{UNRESOLVED_EXTERNAL_ID, UNRESOLVED_NAME};
use crate::graph::{FlatmapError, FlatmapResult, NodeId};
use crate::index::CYCLE_SENTINEL;
use serde::Serialize;

/// What a human should see for one node: id, external ontology id and name
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolved {
    /// `None` when there was nothing to resolve
    pub id: Option<NodeId>,
    pub external_id: Option<NodeId>,
    pub name: String,
}

impl Resolved {
    /// Sentinel pair for an absent or empty id
    pub fn unresolved() -> Self {
        Self {
            id: None,
            external_id: Some(NodeId::from(UNRESOLVED_EXTERNAL_ID)),
            name: UNRESOLVED_NAME.to_string(),
        }
    }

    pub fn is_unresolved(&self) -> bool {
        self.id.is_none()
    }

    /// `"name"`, or `"name (external)"` when an external id is known
    pub fn text(&self) -> String {
        match &self.external_id {
            Some(ext) => format!("{} ({})", self.name, ext),
            None => self.name.clone(),
        }
    }
}

/// Display-resolved identity of a route segment
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlatmapNode {
    pub id: Option<NodeId>,
    pub external_id: Option<NodeId>,
    pub name: String,
    /// The layer this part is embedded in, for layered parts
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layer_in: Option<Resolved>,
}

impl FlatmapNode {
    pub fn new(shown: Resolved, layer_in: Option<Resolved>) -> Self {
        Self {
            id: shown.id,
            external_id: shown.external_id,
            name: shown.name,
            layer_in,
        }
    }

    /// Vertex attributes for the cycle sentinel
    pub fn cycle() -> Self {
        Self {
            id: Some(NodeId::from(CYCLE_SENTINEL)),
            external_id: None,
            name: CYCLE_SENTINEL.to_string(),
            layer_in: None,
        }
    }

    pub fn text(&self) -> String {
        let mut text = match &self.external_id {
            Some(ext) => format!("{} ({})", self.name, ext),
            None => self.name.clone(),
        };
        if let Some(layer) = &self.layer_in {
            text.push_str(" in ");
            text.push_str(&layer.text());
        }
        text
    }
}

/// One step of a traced route
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteRecord {
    /// Nesting level within the chain, 1 for the first part
    pub depth: usize,
    /// Chain part that fasciculates here
    pub part: NodeId,
    /// Raw fasciculation node, also the route graph vertex id
    pub node: NodeId,
    pub flatmap: FlatmapNode,
}

/// Why a chain walk stopped early
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CycleReason {
    /// A `next` link led back to a part already walked
    Revisit,
    /// The chain grew past the configured maximum length
    DepthExceeded,
}

/// Flag left on a chain that was cut short
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CycleMarker {
    /// Part that would have been walked next
    pub part: NodeId,
    /// Parts walked before stopping
    pub depth: usize,
    pub reason: CycleReason,
}

impl CycleMarker {
    /// Route graph vertex the cut-short chain links to, one per chain
    pub fn vertex_id(&self) -> NodeId {
        NodeId::from_string(format!("{}:{}", CYCLE_SENTINEL, self.part))
    }
}

impl From<&CycleMarker> for FlatmapError {
    fn from(marker: &CycleMarker) -> Self {
        FlatmapError::CycleDetected {
            part: marker.part.clone(),
            depth: marker.depth,
        }
    }
}

/// Records produced by walking one chain
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ChainTrace {
    pub records: Vec<RouteRecord>,
    /// Fasciculation node of the first part, if it had one
    pub head: Option<NodeId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cycle: Option<CycleMarker>,
}

impl ChainTrace {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Vertex of a route graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteVertex {
    pub id: NodeId,
    pub node: FlatmapNode,
}

/// Flatmap nodes actually walked and the `next` adjacency between them
///
/// Vertices and edges keep first-insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RouteGraph {
    vertices: Vec<RouteVertex>,
    edges: Vec<(NodeId, NodeId)>,
}

impl RouteGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a vertex; the first attributes seen for an id are kept
    pub fn add_vertex(&mut self, id: NodeId, node: FlatmapNode) {
        if self.vertex(&id).is_none() {
            self.vertices.push(RouteVertex { id, node });
        }
    }

    pub fn add_edge(&mut self, from: NodeId, to: NodeId) {
        if !self.has_edge(&from, &to) {
            self.edges.push((from, to));
        }
    }

    pub fn vertex(&self, id: &NodeId) -> Option<&FlatmapNode> {
        self.vertices.iter().find(|v| &v.id == id).map(|v| &v.node)
    }

    pub fn has_edge(&self, from: &NodeId, to: &NodeId) -> bool {
        self.edges.iter().any(|(f, t)| f == from && t == to)
    }

    pub fn vertices(&self) -> &[RouteVertex] {
        &self.vertices
    }

    pub fn edges(&self) -> &[(NodeId, NodeId)] {
        &self.edges
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Fold another trace's graph into this one
    pub fn merge(&mut self, other: &RouteGraph) {
        for v in &other.vertices {
            self.add_vertex(v.id.clone(), v.node.clone());
        }
        for (from, to) in &other.edges {
            self.add_edge(from.clone(), to.clone());
        }
    }
}

/// Header naming the neuron and the roots its route runs between
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteHeader {
    pub neuron: Resolved,
    pub source_root: Resolved,
    pub target_root: Resolved,
}

/// Complete route of one neuron
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteTrace {
    pub neuron: NodeId,
    pub header: RouteHeader,
    /// Chain walked from the target side
    pub target: ChainTrace,
    /// Chain walked from the source side
    pub source: ChainTrace,
    pub graph: RouteGraph,
}

impl RouteTrace {
    /// True when the neuron produced no route body at all
    pub fn is_empty(&self) -> bool {
        self.target.is_empty() && self.source.is_empty()
    }

    /// All records, target side first
    pub fn records(&self) -> impl Iterator<Item = &RouteRecord> {
        self.target.records.iter().chain(self.source.records.iter())
    }

    pub fn has_cycle(&self) -> bool {
        self.target.cycle.is_some() || self.source.cycle.is_some()
    }

    /// Turn a flagged cycle into `CycleDetected` for callers that want a clean route
    pub fn ensure_acyclic(self) -> FlatmapResult<Self> {
        if let Some(marker) = self.target.cycle.as_ref().or(self.source.cycle.as_ref()) {
            return Err(marker.into());
        }
        Ok(self)
    }

    /// Human-readable listing of the header and both chains
    pub fn render_text(&self) -> String {
        let mut out = vec![
            self.header.neuron.text(),
            format!("  source root: {}", self.header.source_root.text()),
            format!("  target root: {}", self.header.target_root.text()),
        ];
        for (side, chain) in [("target", &self.target), ("source", &self.source)] {
            if chain.is_empty() && chain.cycle.is_none() {
                continue;
            }
            out.push(format!("  {side}:"));
            for record in &chain.records {
                out.push(format!(
                    "  {}|--{}",
                    "|   ".repeat(record.depth.saturating_sub(1)),
                    record.flatmap.text()
                ));
            }
            if let Some(marker) = &chain.cycle {
                out.push(format!(
                    "  {}|--{} ({})",
                    "|   ".repeat(marker.depth),
                    CYCLE_SENTINEL,
                    marker.part
                ));
            }
        }
        out.join("\n")
    }
}
