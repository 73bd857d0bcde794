//! Full-graph propagation output keyed by node address.

use cred_core::constants::DEFAULT_MAX_SCORE;
use cred_core::types::NodeAddress;
use serde::{Deserialize, Serialize};

use super::engine::PropagationResult;
use crate::distribution::Distribution;

/// Result of `compute_distribution`.
///
/// `distribution[i]` is the score of `node_order[i]`; nodes are in
/// ascending address order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CredDistribution {
    pub node_order: Vec<NodeAddress>,
    pub distribution: Distribution,
    pub iterations: usize,
    pub converged: bool,
    pub final_delta: f64,
}

impl CredDistribution {
    pub(crate) fn new(node_order: Vec<NodeAddress>, result: PropagationResult) -> Self {
        Self {
            node_order,
            distribution: result.distribution,
            iterations: result.iterations,
            converged: result.converged,
            final_delta: result.final_delta,
        }
    }

    /// Score of `address`, if it is in the graph.
    pub fn score_of(&self, address: &NodeAddress) -> Option<f64> {
        self.node_order
            .binary_search(address)
            .ok()
            .map(|i| self.distribution[i])
    }

    /// Scores rescaled so the highest-scoring node gets `max_score`.
    /// An all-zero distribution stays all zero.
    pub fn scores_by_maximum(&self, max_score: f64) -> Vec<(NodeAddress, f64)> {
        let top = self.distribution.iter().copied().fold(0.0, f64::max);
        let scale = if top > 0.0 { max_score / top } else { 0.0 };
        self.node_order
            .iter()
            .zip(&self.distribution)
            .map(|(address, &p)| (address.clone(), p * scale))
            .collect()
    }

    /// `scores_by_maximum` with the conventional top score of 1000.
    pub fn display_scores(&self) -> Vec<(NodeAddress, f64)> {
        self.scores_by_maximum(DEFAULT_MAX_SCORE)
    }

    /// Scores of nodes under `prefix`, in node order.
    pub fn scores_with_prefix(&self, prefix: &NodeAddress) -> Vec<(NodeAddress, f64)> {
        self.node_order
            .iter()
            .zip(&self.distribution)
            .filter(|(address, _)| address.has_prefix(prefix))
            .map(|(address, &p)| (address.clone(), p))
            .collect()
    }

    /// The `n` highest-scoring nodes, ties broken by address.
    pub fn top(&self, n: usize) -> Vec<(NodeAddress, f64)> {
        let mut ranked: Vec<(NodeAddress, f64)> = self
            .node_order
            .iter()
            .cloned()
            .zip(self.distribution.iter().copied())
            .collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        ranked.truncate(n);
        ranked
    }
}
