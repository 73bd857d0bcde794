//! Tests for the propagation engine and the full-graph entry points.

mod common;

use cred_analysis::distribution::{total_mass, uniform_distribution};
use cred_analysis::propagation::{seed_vector, FlowDirection, MarkovChain, PropagationEngine, PropagationOptions};
use cred_analysis::weights::{ResolvedGraph, WeightResolver};
use cred_analysis::{compute_distribution, decompose_node};
use cred_core::declarations::WeightOverrides;
use cred_core::errors::{CredError, NumericError};
use cred_core::graph::ContributionGraph;
use cred_core::traits::{Cancellable, CancellationToken};

use common::*;

fn resolved_sample(graph: &ContributionGraph) -> ResolvedGraph {
    WeightResolver::new(&[github_declaration()], &WeightOverrides::new())
        .unwrap()
        .resolve_graph(graph)
        .unwrap()
}

fn precise() -> PropagationOptions {
    PropagationOptions::default().with_convergence_threshold(1e-10)
}

#[test]
fn test_symmetric_pair_splits_evenly() {
    let (graph, declaration) = pair_graph();
    let options = PropagationOptions::default().with_seed_weight(0.0);
    let result = compute_distribution(&graph, &[declaration], &WeightOverrides::new(), &options).unwrap();

    assert_eq!(result.distribution, vec![0.5, 0.5]);
    assert!(result.converged);
    assert_eq!(result.iterations, 1);
    assert_eq!(result.final_delta, 0.0);
}

#[test]
fn test_converged_distribution_is_normalized() {
    let graph = sample_graph();
    let result = compute_distribution(&graph, &[github_declaration()], &WeightOverrides::new(), &precise()).unwrap();
    assert!(result.converged);
    assert!(result.final_delta < 1e-10);
    assert_close(total_mass(&result.distribution), 1.0, 1e-9);
    assert!(result.distribution.iter().all(|&p| p >= 0.0));
}

#[test]
fn test_dangling_nodes_never_lose_mass() {
    let mut graph = sample_graph();
    graph.add_node(pull("isolated", 5)).unwrap();
    let resolved = resolved_sample(&graph);
    let chain = MarkovChain::from_resolved(&resolved);
    assert_eq!(chain.dangling().len(), 1);
    let isolated = resolved.index_of(&node_addr(&["github", "pull", "isolated"])).unwrap();
    assert!(chain.is_dangling(chain.local_index(isolated).unwrap()));

    let engine = PropagationEngine::new(PropagationOptions::default()).unwrap();
    let seed = seed_vector(&resolved.node_weights());
    let mut pi = uniform_distribution(chain.node_count()).unwrap();
    for _ in 0..50 {
        pi = engine.step(&chain, &pi, &seed);
        assert_close(total_mass(&pi), 1.0, 1e-12);
    }
}

#[test]
fn test_budget_exhaustion_is_not_an_error() {
    let graph = sample_graph();
    let options = PropagationOptions::default()
        .with_max_iterations(1)
        .with_convergence_threshold(1e-15);
    let result = compute_distribution(&graph, &[github_declaration()], &WeightOverrides::new(), &options).unwrap();
    assert!(!result.converged);
    assert_eq!(result.iterations, 1);
    assert!(result.final_delta >= 1e-15);
}

#[test]
fn test_empty_graph_is_invalid_input() {
    let graph = ContributionGraph::new();
    let err = compute_distribution(
        &graph,
        &[github_declaration()],
        &WeightOverrides::new(),
        &PropagationOptions::default(),
    )
    .unwrap_err();
    assert!(matches!(err, CredError::Numeric(NumericError::InvalidInput { .. })));
}

#[test]
fn test_out_of_range_options_rejected() {
    let graph = sample_graph();
    let declarations = [github_declaration()];
    let overrides = WeightOverrides::new();
    let bad = [
        PropagationOptions::default().with_max_iterations(0),
        PropagationOptions::default().with_convergence_threshold(0.0),
        PropagationOptions::default().with_convergence_threshold(f64::NAN),
        PropagationOptions::default().with_seed_weight(1.5),
        PropagationOptions::default().with_seed_weight(-0.1),
    ];
    for options in bad {
        let err = compute_distribution(&graph, &declarations, &overrides, &options).unwrap_err();
        assert!(
            matches!(err, CredError::Numeric(NumericError::InvalidArgument { .. })),
            "{options:?} gave {err:?}"
        );
    }
}

#[test]
fn test_initial_distribution_length_checked() {
    let graph = sample_graph();
    let options = PropagationOptions::default().with_initial_distribution(vec![0.5, 0.5]);
    let err = compute_distribution(&graph, &[github_declaration()], &WeightOverrides::new(), &options).unwrap_err();
    assert!(matches!(err, CredError::Numeric(NumericError::InvalidInput { .. })));
}

#[test]
fn test_starting_at_the_fixed_point_converges_immediately() {
    let graph = sample_graph();
    let declarations = [github_declaration()];
    let overrides = WeightOverrides::new();
    let first = compute_distribution(&graph, &declarations, &overrides, &precise()).unwrap();

    let options = PropagationOptions::default().with_initial_distribution(first.distribution.clone());
    let second = compute_distribution(&graph, &declarations, &overrides, &options).unwrap();
    assert!(second.converged);
    assert_eq!(second.iterations, 1);
}

#[test]
fn test_identical_inputs_give_identical_output() {
    let graph = sample_graph();
    let declarations = [github_declaration()];
    let overrides = WeightOverrides::new();
    let a = compute_distribution(&graph, &declarations, &overrides, &precise()).unwrap();
    let b = compute_distribution(&graph, &declarations, &overrides, &precise()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_full_restart_returns_the_seed() {
    let graph = sample_graph();
    let options = PropagationOptions::default().with_seed_weight(1.0);
    let result = compute_distribution(&graph, &[github_declaration()], &WeightOverrides::new(), &options).unwrap();
    // pulls weigh 4, the comment 1, users 0
    assert_close(result.score_of(&node_addr(&["github", "pull", "1"])).unwrap(), 4.0 / 13.0, 1e-12);
    assert_close(result.score_of(&node_addr(&["github", "comment", "1"])).unwrap(), 1.0 / 13.0, 1e-12);
    assert_eq!(result.score_of(&node_addr(&["github", "user", "alice"])), Some(0.0));
    assert_eq!(result.score_of(&node_addr(&["github", "user", "nobody"])), None);
}

#[test]
fn test_users_earn_cred_through_backward_flow() {
    let graph = sample_graph();
    let result = compute_distribution(&graph, &[github_declaration()], &WeightOverrides::new(), &precise()).unwrap();
    let alice = result.score_of(&node_addr(&["github", "user", "alice"])).unwrap();
    assert!(alice > 0.0);

    // without the backward channel users only receive dangling share
    let overrides = WeightOverrides::new()
        .with_edge_weight(edge_addr(&["github", "authors"]), cred_core::EdgeWeight::new(1.0, 0.0))
        .with_edge_weight(edge_addr(&["github", "reacts"]), cred_core::EdgeWeight::new(1.0, 0.0));
    let one_way = compute_distribution(&graph, &[github_declaration()], &overrides, &precise()).unwrap();
    let alice_one_way = one_way.score_of(&node_addr(&["github", "user", "alice"])).unwrap();
    assert!(alice_one_way < alice);
}

#[test]
fn test_scores_by_maximum_and_top() {
    let graph = sample_graph();
    let result = compute_distribution(&graph, &[github_declaration()], &WeightOverrides::new(), &precise()).unwrap();

    let scaled = result.scores_by_maximum(1000.0);
    let best = scaled.iter().map(|(_, s)| *s).fold(0.0, f64::max);
    assert_close(best, 1000.0, 1e-9);
    assert_eq!(result.display_scores(), scaled);

    let top = result.top(2);
    assert_eq!(top.len(), 2);
    assert!(top[0].1 >= top[1].1);
    assert_eq!(result.top(100).len(), 6);

    let users = result.scores_with_prefix(&node_addr(&["github", "user"]));
    assert_eq!(users.len(), 2);
}

#[test]
fn test_cancelled_run_reports_cancelled() {
    let graph = sample_graph();
    let resolved = resolved_sample(&graph);
    let chain = MarkovChain::from_resolved(&resolved);
    let seed = seed_vector(&resolved.node_weights());

    let token = CancellationToken::new();
    token.cancel();
    let engine = PropagationEngine::new(precise()).unwrap().with_cancellation(token);
    assert_eq!(engine.run(&chain, &seed).unwrap_err(), CredError::Cancelled);
}

#[test]
fn test_decomposition_sums_to_score() {
    let graph = sample_graph();
    let target = node_addr(&["github", "pull", "1"]);
    let parts = decompose_node(&graph, &[github_declaration()], &WeightOverrides::new(), &precise(), &target).unwrap();

    assert_eq!(parts.node, target);
    assert_close(parts.total(), parts.score, 1e-9);
    assert!(parts.seed_contribution > 0.0);
    assert_eq!(parts.dangling_contribution, 0.0);
    assert!(parts
        .edges
        .windows(2)
        .all(|w| w[0].contribution >= w[1].contribution));

    // alice authored pull 1 (forward), pull 2 references it (forward)
    let neighbors: Vec<_> = parts
        .edges
        .iter()
        .filter(|e| e.direction == FlowDirection::Forward)
        .map(|e| e.neighbor.clone())
        .collect();
    assert!(neighbors.contains(&node_addr(&["github", "user", "alice"])));
    assert!(neighbors.contains(&node_addr(&["github", "pull", "2"])));
}

#[test]
fn test_decompose_unknown_node_is_invalid_input() {
    let graph = sample_graph();
    let err = decompose_node(
        &graph,
        &[github_declaration()],
        &WeightOverrides::new(),
        &precise(),
        &node_addr(&["github", "pull", "404"]),
    )
    .unwrap_err();
    assert!(matches!(err, CredError::Numeric(NumericError::InvalidInput { .. })));
}

#[test]
fn test_distribution_serializes_to_json() {
    let (graph, declaration) = pair_graph();
    let options = PropagationOptions::default().with_seed_weight(0.0);
    let result = compute_distribution(&graph, &[declaration], &WeightOverrides::new(), &options).unwrap();

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["node_order"][0], serde_json::json!(["pair", "thing", "a"]));
    assert_eq!(json["converged"], serde_json::json!(true));
    let back: cred_analysis::CredDistribution = serde_json::from_value(json).unwrap();
    assert_eq!(back, result);
}
