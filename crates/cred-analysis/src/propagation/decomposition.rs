//! Explain a node's score as the sum of what flowed into it.
//!
//! At a fixed point, a node's score equals one more propagation step
//! applied to the distribution. That step is a sum of per-connection
//! inflows plus the dangling share plus the seed restart; this module
//! returns each term separately, largest first.

use cred_core::errors::NumericError;
use cred_core::types::{EdgeAddress, NodeAddress};

use super::markov_chain::{Adjacency, MarkovChain};
use crate::weights::ResolvedGraph;

/// Which channel of an edge carried the mass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowDirection {
    /// From the edge's source to its destination.
    Forward,
    /// From the edge's destination back to its source.
    Backward,
}

/// Mass that reached the node through one edge channel.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeContribution {
    pub edge: EdgeAddress,
    pub direction: FlowDirection,
    /// Node the mass came from.
    pub neighbor: NodeAddress,
    pub contribution: f64,
}

/// A node's score broken down by origin.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeDecomposition {
    pub node: NodeAddress,
    pub score: f64,
    /// Restart mass from the seed vector.
    pub seed_contribution: f64,
    /// Share of the mass redistributed from dangling nodes.
    pub dangling_contribution: f64,
    /// Edge inflows, sorted by contribution descending.
    pub edges: Vec<EdgeContribution>,
}

impl NodeDecomposition {
    /// Sum of all parts. Equals `score` up to the convergence threshold.
    pub fn total(&self) -> f64 {
        self.seed_contribution
            + self.dangling_contribution
            + self.edges.iter().map(|e| e.contribution).sum::<f64>()
    }
}

/// Decompose the score of `node` (a `graph.nodes()` index) under a chain,
/// its distribution, the seed vector, and the seed weight that produced it.
pub fn decompose(
    graph: &ResolvedGraph,
    chain: &MarkovChain,
    distribution: &[f64],
    seed: &[f64],
    seed_weight: f64,
    node: usize,
) -> Result<NodeDecomposition, NumericError> {
    let n = chain.node_count();
    if distribution.len() != n || seed.len() != n {
        return Err(NumericError::invalid_input(format!(
            "expected {n} entries, got distribution {} and seed {}",
            distribution.len(),
            seed.len()
        )));
    }
    let local = chain.local_index(node).ok_or_else(|| {
        NumericError::invalid_input(format!("node index {node} is not part of the chain"))
    })?;

    let damping = 1.0 - seed_weight;
    let dangling_mass: f64 = chain.dangling().iter().map(|&u| distribution[u]).sum();

    let mut edges: Vec<EdgeContribution> = chain
        .incoming(local)
        .iter()
        .map(|c| {
            let edge = &graph.edges()[c.adjacency.edge_index()];
            let direction = match c.adjacency {
                Adjacency::Forward(_) => FlowDirection::Forward,
                Adjacency::Backward(_) => FlowDirection::Backward,
            };
            let neighbor = graph.nodes()[chain.node_indices()[c.src]].address.clone();
            EdgeContribution {
                edge: edge.address.clone(),
                direction,
                neighbor,
                contribution: damping * distribution[c.src] * c.weight,
            }
        })
        .collect();
    edges.sort_by(|a, b| {
        b.contribution
            .total_cmp(&a.contribution)
            .then_with(|| a.edge.cmp(&b.edge))
    });

    Ok(NodeDecomposition {
        node: graph.nodes()[node].address.clone(),
        score: distribution[local],
        seed_contribution: seed_weight * seed[local],
        dangling_contribution: damping * dangling_mass / n as f64,
        edges,
    })
}
