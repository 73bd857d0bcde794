//! A graph with every weight already resolved.
//!
//! This is the read-only value shared by all propagation runs of one
//! computation, including parallel timeline workers.

use cred_core::declarations::{EdgeWeight, NodeWeight};
use cred_core::types::{EdgeAddress, NodeAddress};

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedNode {
    pub address: NodeAddress,
    pub timestamp_ms: Option<i64>,
    pub weight: NodeWeight,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedEdge {
    pub address: EdgeAddress,
    /// Index of the source node in `ResolvedGraph::nodes`.
    pub src: usize,
    /// Index of the destination node in `ResolvedGraph::nodes`.
    pub dst: usize,
    pub timestamp_ms: Option<i64>,
    pub weight: EdgeWeight,
}

/// Nodes sorted by address; edges sorted by address with endpoint indices.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedGraph {
    nodes: Vec<ResolvedNode>,
    edges: Vec<ResolvedEdge>,
}

impl ResolvedGraph {
    /// Nodes must already be sorted by address and edge indices must point
    /// into `nodes`.
    pub(crate) fn new(nodes: Vec<ResolvedNode>, edges: Vec<ResolvedEdge>) -> Self {
        debug_assert!(nodes.windows(2).all(|w| w[0].address < w[1].address));
        Self { nodes, edges }
    }

    pub fn nodes(&self) -> &[ResolvedNode] {
        &self.nodes
    }

    pub fn edges(&self) -> &[ResolvedEdge] {
        &self.edges
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Position of `address` in node order.
    pub fn index_of(&self, address: &NodeAddress) -> Option<usize> {
        self.nodes
            .binary_search_by(|n| n.address.cmp(address))
            .ok()
    }

    /// Node addresses in distribution order.
    pub fn node_order(&self) -> Vec<NodeAddress> {
        self.nodes.iter().map(|n| n.address.clone()).collect()
    }

    /// Resolved node weights in distribution order.
    pub fn node_weights(&self) -> Vec<NodeWeight> {
        self.nodes.iter().map(|n| n.weight).collect()
    }

    /// `[earliest, latest + 1)` over timestamped nodes and edges, or `None`
    /// if nothing carries a timestamp.
    pub fn time_range(&self) -> Option<(i64, i64)> {
        let mut timestamps = self
            .nodes
            .iter()
            .filter_map(|n| n.timestamp_ms)
            .chain(self.edges.iter().filter_map(|e| e.timestamp_ms));
        let first = timestamps.next()?;
        let (min, max) = timestamps.fold((first, first), |(lo, hi), t| (lo.min(t), hi.max(t)));
        Some((min, max.saturating_add(1)))
    }
}
