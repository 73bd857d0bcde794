//! In-memory contribution graph backed by a petgraph `StableGraph`.

use petgraph::stable_graph::{EdgeIndex, NodeIndex, StableGraph};
use petgraph::visit::EdgeRef;
use petgraph::{Directed, Direction};

use super::types::{Edge, Node};
use super::view::GraphView;
use crate::errors::GraphError;
use crate::types::{EdgeAddress, FxHashMap, NodeAddress};

/// A directed multigraph of contributions.
///
/// Edges must reference nodes already in the graph. Re-adding an identical
/// node or edge is a no-op; re-adding a different one under the same
/// address is an error.
#[derive(Debug, Clone)]
pub struct ContributionGraph {
    /// The underlying petgraph StableGraph.
    graph: StableGraph<Node, Edge, Directed>,
    /// Map from node address → NodeIndex for O(1) lookup.
    node_index: FxHashMap<NodeAddress, NodeIndex>,
    /// Map from edge address → EdgeIndex for O(1) lookup.
    edge_index: FxHashMap<EdgeAddress, EdgeIndex>,
}

impl ContributionGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self {
            graph: StableGraph::new(),
            node_index: FxHashMap::default(),
            edge_index: FxHashMap::default(),
        }
    }

    /// Add a node.
    pub fn add_node(&mut self, node: Node) -> Result<(), GraphError> {
        if let Some(&existing) = self.node_index.get(&node.address) {
            if self.graph.node_weight(existing) == Some(&node) {
                return Ok(());
            }
            return Err(GraphError::DuplicateNode {
                address: node.address.to_string(),
            });
        }
        let address = node.address.clone();
        let idx = self.graph.add_node(node);
        self.node_index.insert(address, idx);
        Ok(())
    }

    /// Add an edge between two existing nodes.
    pub fn add_edge(&mut self, edge: Edge) -> Result<(), GraphError> {
        if let Some(&existing) = self.edge_index.get(&edge.address) {
            if self.graph.edge_weight(existing) == Some(&edge) {
                return Ok(());
            }
            return Err(GraphError::DuplicateEdge {
                address: edge.address.to_string(),
            });
        }
        let src = self.require_node(&edge, &edge.src)?;
        let dst = self.require_node(&edge, &edge.dst)?;
        let address = edge.address.clone();
        let idx = self.graph.add_edge(src, dst, edge);
        self.edge_index.insert(address, idx);
        Ok(())
    }

    /// Remove an edge, returning it if present.
    pub fn remove_edge(&mut self, address: &EdgeAddress) -> Option<Edge> {
        let idx = self.edge_index.remove(address)?;
        self.graph.remove_edge(idx)
    }

    /// Edges leaving `address` (edges whose `src` is `address`).
    pub fn out_edges(&self, address: &NodeAddress) -> Vec<&Edge> {
        self.directed_edges(address, Direction::Outgoing)
    }

    /// Edges arriving at `address` (edges whose `dst` is `address`).
    pub fn in_edges(&self, address: &NodeAddress) -> Vec<&Edge> {
        self.directed_edges(address, Direction::Incoming)
    }

    fn directed_edges(&self, address: &NodeAddress, direction: Direction) -> Vec<&Edge> {
        match self.node_index.get(address) {
            Some(&idx) => self
                .graph
                .edges_directed(idx, direction)
                .map(|e| e.weight())
                .collect(),
            None => Vec::new(),
        }
    }

    fn require_node(&self, edge: &Edge, node: &NodeAddress) -> Result<NodeIndex, GraphError> {
        self.node_index
            .get(node)
            .copied()
            .ok_or_else(|| GraphError::MissingEndpoint {
                edge: edge.address.to_string(),
                node: node.to_string(),
            })
    }
}

impl Default for ContributionGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphView for ContributionGraph {
    fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.graph
            .node_indices()
            .filter_map(move |idx| self.graph.node_weight(idx))
    }

    fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.graph
            .edge_indices()
            .filter_map(move |idx| self.graph.edge_weight(idx))
    }

    fn node(&self, address: &NodeAddress) -> Option<&Node> {
        self.node_index
            .get(address)
            .and_then(|&idx| self.graph.node_weight(idx))
    }

    fn edge(&self, address: &EdgeAddress) -> Option<&Edge> {
        self.edge_index
            .get(address)
            .and_then(|&idx| self.graph.edge_weight(idx))
    }

    fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}
