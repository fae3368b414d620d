//! Neuron route tracing
//!
//! Walks the `conveys -> target/source -> sourceOf -> fasciculatesIn`
//! pattern of an OUTGOING [`GraphIndex`](crate::index::GraphIndex) and
//! follows `next` chains to produce an ordered route per neuron.

mod tracer;
mod types;
pub mod vocab;

pub use tracer::{RouteTracer, DEFAULT_MAX_CHAIN_LENGTH};
pub use types::{
    ChainTrace, CycleMarker, CycleReason, FlatmapNode, Resolved, RouteGraph, RouteHeader,
    RouteRecord, RouteTrace, RouteVertex,
};
