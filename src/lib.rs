//! Flatmap: tree indexing and neuron route tracing over ApiNATOMY KB exports
//!
//! Consumes the `{"nodes": [...], "edges": [...]}` export of a knowledge-graph
//! query and produces two views of it:
//!
//! - **Tree index**: parent/child adjacency oriented by a [`Direction`], a
//!   relation label per (parent, child) pair and a single traversal root.
//! - **Route traces**: per neuron, the ordered flatmap nodes its processes
//!   fasciculate through, plus the graph of `next` links actually walked.
//!
//! # Example
//!
//! ```
//! use flatmap::{Direction, Edge, GraphExport, GraphIndex, Node};
//!
//! let export = GraphExport::new(
//!     vec![Node::new("A", "Alpha"), Node::new("B", "Beta")],
//!     vec![Edge::new("A", "apinatomy:next", "B")],
//! );
//! let index = GraphIndex::build(&export, Direction::Outgoing).unwrap();
//! assert_eq!(index.root().as_str(), "A");
//! ```

pub mod config;
mod graph;
pub mod index;
pub mod route;

pub use config::FlatmapConfig;
pub use graph::{
    Edge, ExportStats, FilterReport, FlatmapError, FlatmapResult, GraphExport, Node, NodeId,
    BFO_HAS_PART, OWL_NOTHING,
};
pub use index::{render_tree, render_tree_text, Direction, GraphIndex, TreeLine};
pub use route::{FlatmapNode, Resolved, RouteGraph, RouteRecord, RouteTrace, RouteTracer};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
