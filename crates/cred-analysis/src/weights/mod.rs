//! Weight resolution: declared node/edge types plus overrides become concrete weights.
//!
//! Type dispatch is a longest-prefix walk over a trie keyed by address
//! parts. Each graph address is resolved once per computation into a
//! `ResolvedGraph`.

pub mod prefix_table;
pub mod resolved;
pub mod resolver;

pub use prefix_table::PrefixTable;
pub use resolved::{ResolvedEdge, ResolvedGraph, ResolvedNode};
pub use resolver::WeightResolver;
