//! Core data structures of a KB export

mod edge;
mod error;
mod export;
mod node;

#[cfg(test)]
mod tests;

pub use edge::{Edge, BFO_HAS_PART, OWL_NOTHING};
pub use error::{FlatmapError, FlatmapResult};
pub use export::{ExportStats, FilterReport, GraphExport};
pub use node::{Node, NodeId};
