//! Sparse Markov chain built from a resolved graph.
//!
//! Stored column-wise: for every node, the list of connections that carry
//! mass *into* it. A single edge contributes up to two connections, one per
//! channel, and each connection remembers which edge and which channel it
//! came from.

use crate::weights::ResolvedGraph;

/// Which channel of an edge a connection represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Adjacency {
    /// Mass flowing from the edge's source to its destination.
    /// Holds the edge's index in `ResolvedGraph::edges`.
    Forward(usize),
    /// Mass flowing from the edge's destination back to its source.
    Backward(usize),
}

impl Adjacency {
    /// Index of the underlying edge in `ResolvedGraph::edges`.
    pub fn edge_index(&self) -> usize {
        match *self {
            Self::Forward(e) | Self::Backward(e) => e,
        }
    }
}

/// Incoming transition into a chain node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Connection {
    /// Chain-local index of the node the mass comes from.
    pub src: usize,
    /// Transition probability `src → this node`. The outgoing probabilities
    /// of every non-dangling node sum to 1.
    pub weight: f64,
    pub adjacency: Adjacency,
}

/// Column-oriented sparse transition structure over a node set.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkovChain {
    /// Chain-local index → index in `ResolvedGraph::nodes`. Ascending.
    node_indices: Vec<usize>,
    incoming: Vec<Vec<Connection>>,
    /// Chain-local indices of nodes with zero total outgoing weight.
    dangling: Vec<usize>,
    edge_count: usize,
}

impl MarkovChain {
    /// Chain over every node of `graph`.
    pub fn from_resolved(graph: &ResolvedGraph) -> Self {
        let all: Vec<usize> = (0..graph.node_count()).collect();
        Self::from_subset(graph, &all)
    }

    /// Chain over the nodes at `subset` (ascending indices into
    /// `graph.nodes()`). Edges with an endpoint outside the subset are
    /// ignored.
    pub fn from_subset(graph: &ResolvedGraph, subset: &[usize]) -> Self {
        debug_assert!(subset.windows(2).all(|w| w[0] < w[1]));

        let mut local: Vec<Option<usize>> = vec![None; graph.node_count()];
        for (i, &global) in subset.iter().enumerate() {
            local[global] = Some(i);
        }

        let n = subset.len();
        let mut out_totals = vec![0.0_f64; n];
        let mut members = Vec::new();
        for (e, edge) in graph.edges().iter().enumerate() {
            if let (Some(src), Some(dst)) = (local[edge.src], local[edge.dst]) {
                out_totals[src] += edge.weight.forward;
                out_totals[dst] += edge.weight.backward;
                members.push((e, src, dst));
            }
        }

        let mut incoming: Vec<Vec<Connection>> = vec![Vec::new(); n];
        for &(e, src, dst) in &members {
            let weight = graph.edges()[e].weight;
            if weight.forward > 0.0 {
                incoming[dst].push(Connection {
                    src,
                    weight: weight.forward / out_totals[src],
                    adjacency: Adjacency::Forward(e),
                });
            }
            if weight.backward > 0.0 {
                incoming[src].push(Connection {
                    src: dst,
                    weight: weight.backward / out_totals[dst],
                    adjacency: Adjacency::Backward(e),
                });
            }
        }

        let dangling = out_totals
            .iter()
            .enumerate()
            .filter(|(_, total)| **total <= 0.0)
            .map(|(i, _)| i)
            .collect();

        Self {
            node_indices: subset.to_vec(),
            incoming,
            dangling,
            edge_count: members.len(),
        }
    }

    pub fn node_count(&self) -> usize {
        self.node_indices.len()
    }

    /// Edges with both endpoints inside the chain.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Chain-local index → index in `ResolvedGraph::nodes`.
    pub fn node_indices(&self) -> &[usize] {
        &self.node_indices
    }

    /// Connections carrying mass into chain node `node`.
    pub fn incoming(&self, node: usize) -> &[Connection] {
        &self.incoming[node]
    }

    /// Chain-local indices of nodes without outgoing weight.
    pub fn dangling(&self) -> &[usize] {
        &self.dangling
    }

    pub fn is_dangling(&self, node: usize) -> bool {
        self.dangling.binary_search(&node).is_ok()
    }

    /// Chain-local index of a `ResolvedGraph` node index, if present.
    pub fn local_index(&self, global: usize) -> Option<usize> {
        self.node_indices.binary_search(&global).ok()
    }
}
