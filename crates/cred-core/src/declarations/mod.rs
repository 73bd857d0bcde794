//! Type declarations and weights.
//!
//! Plugins declare the node and edge types they produce, each identified by
//! an address prefix and carrying a default weight. Callers may override
//! any type's weight; the engine only reads these values.

pub mod types;
pub mod weights;

pub use types::{EdgeType, NodeType, PluginDeclaration};
pub use weights::{EdgeWeight, NodeWeight, WeightOverrides};
