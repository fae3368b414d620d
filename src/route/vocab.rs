//! ApiNATOMY relation vocabulary read by the route tracer
//!
//! These are the predicate names exactly as the KB export writes them; the
//! tracer matches them in their OUTGOING-decorated form (`pred>`).

pub const EXTERNAL: &str = "apinatomy:external";
pub const LAYER_IN: &str = "apinatomy:layerIn";
pub const CLONE_OF: &str = "apinatomy:cloneOf";
pub const SUPERTYPE: &str = "apinatomy:supertype";
pub const NEXT: &str = "apinatomy:next";
pub const NEXT_CHAIN_START_LEVELS: &str = "apinatomy:nextChainStartLevels";
pub const FASCICULATES_IN: &str = "apinatomy:fasciculatesIn";
pub const CONVEYS: &str = "apinatomy:conveys";
pub const TARGET: &str = "apinatomy:target";
pub const SOURCE: &str = "apinatomy:source";
pub const ROOT_OF: &str = "apinatomy:rootOf";
pub const SOURCE_OF: &str = "apinatomy:sourceOf";

/// Shown as the external id when a display lookup has no node to resolve
pub const UNRESOLVED_EXTERNAL_ID: &str = "UNKOWN";
/// Shown as the name when a display lookup has no node to resolve
pub const UNRESOLVED_NAME: &str = "REALLY_UNKNOWN";
