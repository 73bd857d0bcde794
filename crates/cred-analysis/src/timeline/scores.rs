//! Per-node score sequences aligned with the timeline's intervals.

use std::collections::BTreeMap;

use cred_core::types::NodeAddress;

use super::intervals::Interval;

/// Output of a timeline decomposition.
///
/// Every sequence in `node_scores` has exactly one entry per interval.
/// Entry `i` is the node's share of interval `i`'s distribution, 0 when the
/// node was not active in that interval.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimelineScores {
    pub intervals: Vec<Interval>,
    /// Total weight of the nodes evidenced in each interval.
    pub interval_weights: Vec<f64>,
    pub node_scores: BTreeMap<NodeAddress, Vec<f64>>,
}

impl TimelineScores {
    pub fn is_empty(&self) -> bool {
        self.node_scores.is_empty()
    }

    pub fn interval_count(&self) -> usize {
        self.intervals.len()
    }

    pub fn node_count(&self) -> usize {
        self.node_scores.len()
    }

    pub fn scores_for(&self, address: &NodeAddress) -> Option<&[f64]> {
        self.node_scores.get(address).map(Vec::as_slice)
    }

    /// Sum of a node's sequence, 0 for unknown nodes.
    pub fn total_for(&self, address: &NodeAddress) -> f64 {
        self.scores_for(address)
            .map_or(0.0, |scores| scores.iter().sum())
    }

    /// Each share multiplied by its interval's weight: the cred the node
    /// earned in that interval.
    pub fn weighted_scores(&self) -> BTreeMap<NodeAddress, Vec<f64>> {
        self.node_scores
            .iter()
            .map(|(address, scores)| {
                let weighted = scores
                    .iter()
                    .zip(&self.interval_weights)
                    .map(|(share, weight)| share * weight)
                    .collect();
                (address.clone(), weighted)
            })
            .collect()
    }
}
