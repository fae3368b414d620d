//! RouteTracer: follows conveys/target/source/fasciculation chains of a neuron

use super::types::{
    ChainTrace, CycleMarker, CycleReason, FlatmapNode, Resolved, RouteGraph, RouteHeader,
    RouteRecord, RouteTrace,
};
use super::vocab::{
    CLONE_OF, CONVEYS, EXTERNAL, FASCICULATES_IN, LAYER_IN, NEXT, NEXT_CHAIN_START_LEVELS, ROOT_OF,
    SOURCE, SOURCE_OF, SUPERTYPE, TARGET,
};
use crate::graph::{FlatmapError, FlatmapResult, NodeId};
use crate::index::{outgoing, Direction, GraphIndex};
use std::collections::HashSet;
use tracing::{debug, warn};

/// Default bound on the number of parts walked in one chain
pub const DEFAULT_MAX_CHAIN_LENGTH: usize = 256;

/// Traces neuron routes over a read-only OUTGOING index
///
/// Every trace builds its own output; one tracer can serve many neurons.
#[derive(Debug, Clone, Copy)]
pub struct RouteTracer<'a> {
    index: &'a GraphIndex,
    max_chain_length: usize,
}

impl<'a> RouteTracer<'a> {
    /// Create a tracer; the index must be built OUTGOING
    pub fn new(index: &'a GraphIndex) -> FlatmapResult<Self> {
        if index.direction() != Direction::Outgoing {
            return Err(FlatmapError::TracerDirection(index.direction()));
        }
        Ok(Self {
            index,
            max_chain_length: DEFAULT_MAX_CHAIN_LENGTH,
        })
    }

    /// Set the maximum number of parts walked per chain; at least one part is always walked
    pub fn with_max_chain_length(mut self, max_chain_length: usize) -> Self {
        self.max_chain_length = max_chain_length.max(1);
        self
    }

    pub fn max_chain_length(&self) -> usize {
        self.max_chain_length
    }

    /// First child of `parent` whose relation label is exactly `predicate`
    pub fn find_child(&self, parent: &NodeId, predicate: &str) -> Option<&'a NodeId> {
        let index = self.index;
        index
            .children(parent)
            .iter()
            .find(|child| index.relation(parent, child) == Some(predicate))
    }

    /// [`find_child`](Self::find_child) for an undecorated predicate read subject -> object
    fn follow(&self, parent: &NodeId, predicate: &str) -> Option<&'a NodeId> {
        self.find_child(parent, &outgoing(predicate))
    }

    /// Name and external id a human should see for `id`
    ///
    /// An absent or empty id resolves to the unresolved sentinel pair; an
    /// id missing from the index is `UnknownNode`.
    pub fn resolve_display(&self, id: Option<&NodeId>) -> FlatmapResult<Resolved> {
        let Some(id) = id.filter(|id| !id.is_empty()) else {
            return Ok(Resolved::unresolved());
        };
        let name = self.index.display(id)?.to_string();
        Ok(Resolved {
            id: Some(id.clone()),
            external_id: self.follow(id, EXTERNAL).cloned(),
            name,
        })
    }

    /// Display identity of a route segment
    ///
    /// A part that lies in a layer is shown as the supertype of its clone,
    /// with the layer attached; any other part is shown as itself.
    pub fn resolve_flatmap_node(&self, id: &NodeId) -> FlatmapResult<FlatmapNode> {
        if id.is_empty() {
            return Ok(FlatmapNode::new(Resolved::unresolved(), None));
        }
        self.index.label(id)?;

        match self.follow(id, LAYER_IN) {
            Some(layer) => {
                let supertype = self
                    .follow(id, CLONE_OF)
                    .and_then(|clone| self.follow(clone, SUPERTYPE));
                if supertype.is_none() {
                    debug!(%id, "layered part has no clone supertype");
                }
                let shown = self.resolve_display(supertype)?;
                let layer = self.resolve_display(Some(layer))?;
                Ok(FlatmapNode::new(shown, Some(layer)))
            }
            None => Ok(FlatmapNode::new(self.resolve_display(Some(id))?, None)),
        }
    }

    /// Walk a chain from `part` along `next` / `nextChainStartLevels`
    ///
    /// Each part's fasciculation node becomes a record and a route graph
    /// vertex, linked to the next part's node. A revisited part or a chain
    /// longer than the configured bound stops the walk with a cycle marker;
    /// records gathered so far are kept and the last node is linked to the
    /// cycle sentinel.
    pub fn trace_chain_part(
        &self,
        part: &NodeId,
        depth: usize,
        graph: &mut RouteGraph,
    ) -> FlatmapResult<ChainTrace> {
        let mut visited: HashSet<&NodeId> = HashSet::new();
        let mut nodes: Vec<Option<NodeId>> = Vec::new();
        let mut records = Vec::new();
        let mut cycle = None;
        let mut current = Some(part);

        while let Some(part) = current {
            if !visited.insert(part) {
                cycle = Some(CycleMarker {
                    part: part.clone(),
                    depth: nodes.len(),
                    reason: CycleReason::Revisit,
                });
                break;
            }
            if nodes.len() >= self.max_chain_length {
                cycle = Some(CycleMarker {
                    part: part.clone(),
                    depth: nodes.len(),
                    reason: CycleReason::DepthExceeded,
                });
                break;
            }

            let node = self.follow(part, FASCICULATES_IN);
            if let Some(node) = node {
                let flatmap = self.resolve_flatmap_node(node)?;
                graph.add_vertex(node.clone(), flatmap.clone());
                records.push(RouteRecord {
                    depth: depth + nodes.len(),
                    part: part.clone(),
                    node: node.clone(),
                    flatmap,
                });
            }
            debug!(%part, node = ?node, "walked chain part");
            nodes.push(node.cloned());

            current = self
                .follow(part, NEXT)
                .or_else(|| self.follow(part, NEXT_CHAIN_START_LEVELS));
        }

        for pair in nodes.windows(2) {
            if let [Some(from), Some(to)] = pair {
                graph.add_edge(from.clone(), to.clone());
            }
        }

        if let Some(marker) = &cycle {
            warn!(part = %marker.part, depth = marker.depth, reason = ?marker.reason, "cycle detected in chain");
            if let Some(Some(last)) = nodes.last() {
                let sentinel = marker.vertex_id();
                graph.add_vertex(sentinel.clone(), FlatmapNode::cycle());
                graph.add_edge(last.clone(), sentinel);
            }
        }

        Ok(ChainTrace {
            records,
            head: nodes.first().cloned().flatten(),
            cycle,
        })
    }

    /// Full route of one neuron: header, target-side chain, source-side chain
    ///
    /// A neuron that conveys nothing yields a header and no records.
    pub fn trace_neuron_route(&self, neuron: &NodeId) -> FlatmapResult<RouteTrace> {
        self.index.label(neuron)?;
        let mut graph = RouteGraph::new();

        let conveys = self.follow(neuron, CONVEYS);
        if conveys.is_none() {
            debug!(%neuron, "neuron conveys nothing");
        }
        let target = conveys.and_then(|c| self.follow(c, TARGET));
        let target_root = target.and_then(|t| self.follow(t, ROOT_OF));
        let source = conveys.and_then(|c| self.follow(c, SOURCE));
        let source_root = source.and_then(|s| self.follow(s, ROOT_OF));

        let header = RouteHeader {
            neuron: self.resolve_display(Some(neuron))?,
            source_root: self.resolve_display(source_root)?,
            target_root: self.resolve_display(target_root)?,
        };

        let target = match target.and_then(|t| self.follow(t, SOURCE_OF)) {
            Some(part) => self.trace_chain_part(part, 1, &mut graph)?,
            None => ChainTrace::default(),
        };
        let source = match source.and_then(|s| self.follow(s, SOURCE_OF)) {
            Some(part) => self.trace_chain_part(part, 1, &mut graph)?,
            None => ChainTrace::default(),
        };

        debug!(
            %neuron,
            target_records = target.records.len(),
            source_records = source.records.len(),
            vertices = graph.vertices().len(),
            "traced neuron route"
        );

        Ok(RouteTrace {
            neuron: neuron.clone(),
            header,
            target,
            source,
            graph,
        })
    }

    /// Trace several neurons; each result stands alone
    pub fn trace_all<'n>(
        &self,
        neurons: impl IntoIterator<Item = &'n NodeId>,
    ) -> Vec<(NodeId, FlatmapResult<RouteTrace>)> {
        neurons
            .into_iter()
            .map(|neuron| (neuron.clone(), self.trace_neuron_route(neuron)))
            .collect()
    }
}
