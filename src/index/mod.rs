//! Graph indexing for tree-shaped rendering
//!
//! Turns a flat edge list into parent/child adjacency oriented by a
//! [`Direction`], labels every (parent, child) pair with its predicate and
//! finds a single root to walk from.

mod indexer;
mod tree;
mod types;

pub use indexer::GraphIndex;
pub use tree::{render_tree, render_tree_text, TreeLine};
pub use types::{
    incoming, outgoing, Adjacency, Direction, CYCLE_SENTINEL, SYNTHETIC_ROOT,
    SYNTHETIC_ROOT_LABEL,
};
