//! Timeline decomposition: one propagation run per interval.
//!
//! A node is evidenced in an interval when its timestamp falls inside it.
//! An edge whose own timestamp falls inside it makes both endpoints restart
//! targets. Each run covers the restart targets plus both endpoints of every
//! edge touching one of them, and restarts only into the targets. The
//! runs share the resolved graph read-only and are independent, so they
//! can run on the rayon pool and be merged by interval index.

use std::collections::BTreeMap;

use cred_core::errors::{CredError, CredResult, NumericError};
use cred_core::tracing::metrics::{INTERVAL_SPAN, TIMELINE_SPAN};
use cred_core::traits::{Cancellable, CancellationToken};
use rayon::prelude::*;
use tracing::{debug, debug_span, info_span};

use super::intervals::{validate_intervals, Interval};
use super::options::TimelineOptions;
use super::scores::TimelineScores;
use crate::distribution::Distribution;
use crate::propagation::{seed_vector, MarkovChain, PropagationEngine};
use crate::weights::ResolvedGraph;

/// Result of one interval run.
#[derive(Debug, Clone, PartialEq)]
pub struct IntervalDistribution {
    pub interval: Interval,
    /// Total weight of the evidenced nodes.
    pub weight: f64,
    /// Indices into `ResolvedGraph::nodes` of the nodes the run covered,
    /// ascending. Empty when nothing was evidenced.
    pub active: Vec<usize>,
    /// Scores aligned with `active`.
    pub distribution: Distribution,
    pub iterations: usize,
    pub converged: bool,
}

impl IntervalDistribution {
    /// Scores over all `node_count` nodes, zero outside the active set.
    pub fn embed(&self, node_count: usize) -> Distribution {
        let mut full = vec![0.0; node_count];
        for (&global, &score) in self.active.iter().zip(&self.distribution) {
            full[global] = score;
        }
        full
    }
}

#[derive(Debug, Clone)]
pub struct TimelineDecomposer {
    engine: PropagationEngine,
    options: TimelineOptions,
    cancellation: Option<CancellationToken>,
}

impl TimelineDecomposer {
    pub fn new(options: TimelineOptions) -> Result<Self, NumericError> {
        let mut propagation = options.propagation.clone();
        propagation.initial_distribution = None;
        Ok(Self {
            engine: PropagationEngine::new(propagation)?,
            options,
            cancellation: None,
        })
    }

    /// Check `token` before every interval and every iteration.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.engine = self.engine.with_cancellation(token.clone());
        self.cancellation = Some(token);
        self
    }

    pub fn options(&self) -> &TimelineOptions {
        &self.options
    }

    /// Run every interval, results in interval order.
    pub fn interval_distributions(
        &self,
        graph: &ResolvedGraph,
        intervals: &[Interval],
    ) -> CredResult<Vec<IntervalDistribution>> {
        validate_intervals(intervals)?;
        let _span = info_span!(TIMELINE_SPAN, intervals = intervals.len(), parallel = self.options.parallel)
            .entered();

        if self.options.parallel {
            intervals
                .par_iter()
                .enumerate()
                .map(|(index, interval)| self.run_interval(graph, index, interval))
                .collect()
        } else {
            intervals
                .iter()
                .enumerate()
                .map(|(index, interval)| self.run_interval(graph, index, interval))
                .collect()
        }
    }

    /// Assemble per-node score sequences.
    pub fn decompose(&self, graph: &ResolvedGraph, intervals: &[Interval]) -> CredResult<TimelineScores> {
        let runs = self.interval_distributions(graph, intervals)?;
        let interval_count = runs.len();

        let mut node_scores: BTreeMap<_, Vec<f64>> = BTreeMap::new();
        for (i, run) in runs.iter().enumerate() {
            for (&global, &score) in run.active.iter().zip(&run.distribution) {
                let address = &graph.nodes()[global].address;
                if let Some(prefix) = &self.options.node_filter {
                    if !address.has_prefix(prefix) {
                        continue;
                    }
                }
                node_scores
                    .entry(address.clone())
                    .or_insert_with(|| vec![0.0; interval_count])[i] = score;
            }
        }

        debug!(intervals = interval_count, nodes = node_scores.len(), "timeline assembled");
        Ok(TimelineScores {
            intervals: intervals.to_vec(),
            interval_weights: runs.iter().map(|run| run.weight).collect(),
            node_scores,
        })
    }

    fn run_interval(
        &self,
        graph: &ResolvedGraph,
        index: usize,
        interval: &Interval,
    ) -> CredResult<IntervalDistribution> {
        if self.is_cancelled() {
            return Err(CredError::Cancelled);
        }
        let _span = debug_span!(INTERVAL_SPAN, index).entered();

        let n = graph.node_count();
        let mut evidenced = vec![false; n];
        let mut weight = 0.0;
        for (i, node) in graph.nodes().iter().enumerate() {
            if node.timestamp_ms.is_some_and(|t| interval.contains(t)) {
                evidenced[i] = true;
                weight += node.weight;
            }
        }

        // Restart targets: evidenced nodes and endpoints of edges stamped in the interval.
        let mut restart = evidenced;
        for edge in graph.edges() {
            if edge.timestamp_ms.is_some_and(|t| interval.contains(t)) {
                restart[edge.src] = true;
                restart[edge.dst] = true;
            }
        }
        if !restart.contains(&true) {
            return Ok(IntervalDistribution {
                interval: *interval,
                weight: 0.0,
                active: Vec::new(),
                distribution: Vec::new(),
                iterations: 0,
                converged: true,
            });
        }

        let mut active = restart.clone();
        for edge in graph.edges() {
            if restart[edge.src] || restart[edge.dst] {
                active[edge.src] = true;
                active[edge.dst] = true;
            }
        }
        let subset: Vec<usize> = (0..n).filter(|&i| active[i]).collect();

        let chain = MarkovChain::from_subset(graph, &subset);
        let seed = restart_seed(graph, &subset, &restart);
        let result = self.engine.run_from(&chain, &seed, None)?;

        Ok(IntervalDistribution {
            interval: *interval,
            weight,
            active: subset,
            distribution: result.distribution,
            iterations: result.iterations,
            converged: result.converged,
        })
    }

    fn is_cancelled(&self) -> bool {
        self.cancellation
            .as_ref()
            .is_some_and(|token| token.is_cancelled())
    }
}

/// Node weights of the restart targets within `subset`, normalized. Uniform
/// over the restart targets when their weights sum to zero; nodes that are
/// only active through an edge never receive restart mass.
fn restart_seed(graph: &ResolvedGraph, subset: &[usize], restart: &[bool]) -> Distribution {
    let weights: Vec<f64> = subset
        .iter()
        .map(|&i| if restart[i] { graph.nodes()[i].weight } else { 0.0 })
        .collect();
    if weights.iter().sum::<f64>() > 0.0 {
        return seed_vector(&weights);
    }
    let indicator: Vec<f64> = subset
        .iter()
        .map(|&i| if restart[i] { 1.0 } else { 0.0 })
        .collect();
    seed_vector(&indicator)
}
