//! Top-level entry points.
//!
//! Each call resolves weights once, then hands the read-only
//! `ResolvedGraph` to the propagation engine or the timeline decomposer.
//! Graph, declarations and overrides are only borrowed.

use cred_core::declarations::{PluginDeclaration, WeightOverrides};
use cred_core::errors::{CredResult, NumericError};
use cred_core::graph::GraphView;
use cred_core::types::NodeAddress;
use tracing::info;

use crate::propagation::{
    decompose, seed_vector, CredDistribution, MarkovChain, NodeDecomposition, PropagationEngine,
    PropagationOptions,
};
use crate::timeline::{intervals_for_graph, Interval, TimelineDecomposer, TimelineOptions, TimelineScores};
use crate::weights::{ResolvedGraph, WeightResolver};

/// Cred scores of every node of `graph` over the whole graph.
pub fn compute_distribution<G: GraphView>(
    graph: &G,
    declarations: &[PluginDeclaration],
    overrides: &WeightOverrides,
    options: &PropagationOptions,
) -> CredResult<CredDistribution> {
    let engine = PropagationEngine::new(options.clone())?;
    let resolved = resolve(graph, declarations, overrides)?;
    let chain = MarkovChain::from_resolved(&resolved);
    let seed = seed_vector(&resolved.node_weights());
    let result = engine.run(&chain, &seed)?;
    info!(
        nodes = resolved.node_count(),
        iterations = result.iterations,
        converged = result.converged,
        "cred distribution computed"
    );
    Ok(CredDistribution::new(resolved.node_order(), result))
}

/// Per-interval score sequences over explicit `intervals`.
pub fn compute_timeline<G: GraphView>(
    graph: &G,
    declarations: &[PluginDeclaration],
    overrides: &WeightOverrides,
    intervals: &[Interval],
    options: &TimelineOptions,
) -> CredResult<TimelineScores> {
    let decomposer = TimelineDecomposer::new(options.clone())?;
    let resolved = resolve(graph, declarations, overrides)?;
    decomposer.decompose(&resolved, intervals)
}

/// Timeline over `options.bucket_ms` buckets spanning the graph's timestamps.
pub fn compute_timeline_for_graph<G: GraphView>(
    graph: &G,
    declarations: &[PluginDeclaration],
    overrides: &WeightOverrides,
    options: &TimelineOptions,
) -> CredResult<TimelineScores> {
    let decomposer = TimelineDecomposer::new(options.clone())?;
    let resolved = resolve(graph, declarations, overrides)?;
    let intervals = intervals_for_graph(&resolved, options.bucket_ms)?;
    decomposer.decompose(&resolved, &intervals)
}

/// Run full-graph propagation and break `address`'s score into its inflows.
pub fn decompose_node<G: GraphView>(
    graph: &G,
    declarations: &[PluginDeclaration],
    overrides: &WeightOverrides,
    options: &PropagationOptions,
    address: &NodeAddress,
) -> CredResult<NodeDecomposition> {
    let engine = PropagationEngine::new(options.clone())?;
    let resolved = resolve(graph, declarations, overrides)?;
    let node = resolved
        .index_of(address)
        .ok_or_else(|| NumericError::invalid_input(format!("{address} is not in the graph")))?;
    let chain = MarkovChain::from_resolved(&resolved);
    let seed = seed_vector(&resolved.node_weights());
    let result = engine.run(&chain, &seed)?;
    Ok(decompose(
        &resolved,
        &chain,
        &result.distribution,
        &seed,
        options.seed_weight,
        node,
    )?)
}

fn resolve<G: GraphView>(
    graph: &G,
    declarations: &[PluginDeclaration],
    overrides: &WeightOverrides,
) -> CredResult<ResolvedGraph> {
    let resolver = WeightResolver::new(declarations, overrides)?;
    Ok(resolver.resolve_graph(graph)?)
}
