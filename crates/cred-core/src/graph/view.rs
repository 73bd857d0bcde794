//! Read-only graph interface consumed by the engine.

use super::types::{Edge, Node};
use crate::types::{EdgeAddress, NodeAddress};

/// Read-only access to a contribution graph.
///
/// Implementations must not change while a computation borrows them.
/// Iteration order is unspecified; the engine sorts by address itself.
pub trait GraphView {
    /// All nodes.
    fn nodes(&self) -> impl Iterator<Item = &Node>;

    /// All edges, including ones whose endpoints are absent.
    fn edges(&self) -> impl Iterator<Item = &Edge>;

    /// Look up a node by address.
    fn node(&self, address: &NodeAddress) -> Option<&Node>;

    /// Look up an edge by address.
    fn edge(&self, address: &EdgeAddress) -> Option<&Edge>;

    fn node_count(&self) -> usize {
        self.nodes().count()
    }

    fn edge_count(&self) -> usize {
        self.edges().count()
    }

    /// Nodes whose address starts with `prefix`.
    fn nodes_with_prefix<'a>(&'a self, prefix: &'a NodeAddress) -> impl Iterator<Item = &'a Node> {
        self.nodes().filter(move |n| n.address.has_prefix(prefix))
    }

    /// Edges whose address starts with `prefix`.
    fn edges_with_prefix<'a>(&'a self, prefix: &'a EdgeAddress) -> impl Iterator<Item = &'a Edge> {
        self.edges().filter(move |e| e.address.has_prefix(prefix))
    }
}
