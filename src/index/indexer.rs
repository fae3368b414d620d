//! GraphIndex: adjacency, relation labels and roots built once per export

use super::types::{Adjacency, Direction, CYCLE_SENTINEL, SYNTHETIC_ROOT, SYNTHETIC_ROOT_LABEL};
use crate::graph::{Edge, FlatmapError, FlatmapResult, GraphExport, NodeId};
use std::collections::{BTreeSet, HashMap};
use tracing::{debug, warn};

/// Tree-shaped view over a flat edge list
///
/// Read-only after [`GraphIndex::build`]; share it freely between traces.
#[derive(Debug, Clone)]
pub struct GraphIndex {
    direction: Direction,
    /// id -> label ("" when the export has none)
    nodes: HashMap<NodeId, String>,
    children_of: Adjacency,
    parents_of: Adjacency,
    /// (parent, child) -> decorated predicate
    relation_label: HashMap<(NodeId, NodeId), String>,
    root: NodeId,
    roots: Vec<NodeId>,
    leaves: Vec<NodeId>,
    edge_descriptions: Vec<String>,
}

impl GraphIndex {
    /// Index an export in the given direction
    ///
    /// Fails with `AmbiguousDirection` for `Both` and with `UnknownNode` when
    /// an edge names an id missing from the node list.
    pub fn build(export: &GraphExport, direction: Direction) -> FlatmapResult<Self> {
        if direction == Direction::Both {
            return Err(FlatmapError::AmbiguousDirection);
        }

        let mut nodes: HashMap<NodeId, String> = export
            .nodes
            .iter()
            .map(|n| (n.id.clone(), n.lbl.clone().unwrap_or_default()))
            .collect();
        nodes.insert(NodeId::from(CYCLE_SENTINEL), CYCLE_SENTINEL.to_string());

        let mut edge_descriptions = Vec::with_capacity(export.edges.len());
        for edge in &export.edges {
            let sub = lookup(&nodes, &edge.sub)?;
            let obj = lookup(&nodes, &edge.obj)?;
            edge_descriptions.push(format!("{} {} {}", sub, edge.pred, obj));
        }

        // Stable sort: for a repeated pair the greatest predicate is written last and wins
        let mut by_predicate: Vec<&Edge> = export.edges.iter().collect();
        by_predicate.sort_by(|a, b| a.pred.cmp(&b.pred));
        let mut relation_label = HashMap::new();
        for edge in by_predicate {
            let (parent, child) = direction.orient(edge)?;
            relation_label.insert((parent.clone(), child.clone()), direction.decorate(&edge.pred)?);
        }

        let mut children_of = Adjacency::new();
        let mut parents_of = Adjacency::new();
        for edge in &export.edges {
            let (parent, child) = direction.orient(edge)?;
            children_of.push(parent.clone(), child.clone());
            parents_of.push(child.clone(), parent.clone());
        }

        let roots: Vec<NodeId> = children_of
            .keys()
            .filter(|id| !parents_of.contains_key(id))
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let leaves: Vec<NodeId> = parents_of
            .keys()
            .filter(|id| !children_of.contains_key(id))
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let root = match roots.as_slice() {
            [single] => single.clone(),
            _ => {
                warn!(roots = roots.len(), "export is not single-rooted, adding {}", SYNTHETIC_ROOT);
                let synthetic = NodeId::from(SYNTHETIC_ROOT);
                nodes.insert(synthetic.clone(), SYNTHETIC_ROOT_LABEL.to_string());
                children_of.set(synthetic.clone(), roots.clone());
                synthetic
            }
        };

        debug!(
            %direction,
            nodes = nodes.len(),
            parents = children_of.len(),
            children = parents_of.len(),
            %root,
            roots = roots.len(),
            leaves = leaves.len(),
            relations = relation_label.len(),
            "indexed export"
        );

        Ok(Self {
            direction,
            nodes,
            children_of,
            parents_of,
            relation_label,
            root,
            roots,
            leaves,
            edge_descriptions,
        })
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// The single traversal root, possibly the synthetic `*ROOT*`
    pub fn root(&self) -> &NodeId {
        &self.root
    }

    /// Ids with children but no parent, sorted by id
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// Ids with a parent but no children, sorted by id
    pub fn leaves(&self) -> &[NodeId] {
        &self.leaves
    }

    pub fn children_of(&self) -> &Adjacency {
        &self.children_of
    }

    pub fn parents_of(&self) -> &Adjacency {
        &self.parents_of
    }

    pub fn children(&self, id: &NodeId) -> &[NodeId] {
        self.children_of.get(id)
    }

    pub fn parents(&self, id: &NodeId) -> &[NodeId] {
        self.parents_of.get(id)
    }

    /// Decorated predicate linking `parent` to `child`, if any
    pub fn relation(&self, parent: &NodeId, child: &NodeId) -> Option<&str> {
        self.relation_label
            .get(&(parent.clone(), child.clone()))
            .map(String::as_str)
    }

    /// Number of distinct (parent, child) pairs with a label
    pub fn relation_count(&self) -> usize {
        self.relation_label.len()
    }

    pub fn contains(&self, id: &NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Number of known ids, reserved ids included
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Raw label of a known node; may be empty
    pub fn label(&self, id: &NodeId) -> FlatmapResult<&str> {
        lookup(&self.nodes, id)
    }

    /// Label of a known node, or its id when the label is empty
    pub fn display<'s>(&'s self, id: &'s NodeId) -> FlatmapResult<&'s str> {
        let label = self.label(id)?;
        Ok(if label.is_empty() { id.as_str() } else { label })
    }

    /// `"<sub label> <pred> <obj label>"` for every edge, in export order
    pub fn edge_descriptions(&self) -> &[String] {
        &self.edge_descriptions
    }
}

fn lookup<'a>(nodes: &'a HashMap<NodeId, String>, id: &NodeId) -> FlatmapResult<&'a str> {
    nodes
        .get(id)
        .map(String::as_str)
        .ok_or_else(|| FlatmapError::UnknownNode(id.clone()))
}
