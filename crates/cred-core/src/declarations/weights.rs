//! Node and edge weights plus caller-owned overrides.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::{EdgeAddress, NodeAddress};

/// Weight of a node type. Acts as seed mass for propagation.
pub type NodeWeight = f64;

/// Bidirectional edge weight.
///
/// `forward` is the rate at which cred flows from the edge's source to its
/// destination; `backward` the rate from destination back to source. Both
/// channels belong to the same edge.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EdgeWeight {
    pub forward: f64,
    pub backward: f64,
}

impl EdgeWeight {
    pub const fn new(forward: f64, backward: f64) -> Self {
        Self { forward, backward }
    }

    /// Same rate in both directions.
    pub const fn symmetric(weight: f64) -> Self {
        Self {
            forward: weight,
            backward: weight,
        }
    }

    /// True if both channels are finite and non-negative.
    pub fn is_valid(&self) -> bool {
        self.forward.is_finite()
            && self.backward.is_finite()
            && self.forward >= 0.0
            && self.backward >= 0.0
    }
}

/// Type-level weight overrides, keyed by type prefix.
///
/// Unset entries fall back to the declared default. Passed by shared
/// reference into every computation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeightOverrides {
    pub node_type_weights: BTreeMap<NodeAddress, NodeWeight>,
    pub edge_type_weights: BTreeMap<EdgeAddress, EdgeWeight>,
}

impl WeightOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style node type override.
    pub fn with_node_weight(mut self, prefix: NodeAddress, weight: NodeWeight) -> Self {
        self.node_type_weights.insert(prefix, weight);
        self
    }

    /// Builder-style edge type override.
    pub fn with_edge_weight(mut self, prefix: EdgeAddress, weight: EdgeWeight) -> Self {
        self.edge_type_weights.insert(prefix, weight);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.node_type_weights.is_empty() && self.edge_type_weights.is_empty()
    }
}
