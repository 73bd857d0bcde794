//! Propagation and timeline benchmarks
//!
//! Run with: cargo bench --package cred-analysis

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use cred_analysis::propagation::{seed_vector, MarkovChain, PropagationEngine, PropagationOptions};
use cred_analysis::timeline::{generate_intervals, TimelineDecomposer, TimelineOptions};
use cred_analysis::weights::{ResolvedGraph, WeightResolver};
use cred_core::constants::DAY_MS;
use cred_core::declarations::{EdgeType, EdgeWeight, NodeType, PluginDeclaration, WeightOverrides};
use cred_core::graph::{ContributionGraph, Edge, Node};
use cred_core::types::{EdgeAddress, NodeAddress};

const DAYS: i64 = 90;

fn declaration() -> PluginDeclaration {
    PluginDeclaration {
        name: "bench".into(),
        node_prefix: NodeAddress::from_parts(["bench"]),
        edge_prefix: EdgeAddress::from_parts(["bench"]),
        node_types: vec![
            NodeType::new("user", NodeAddress::from_parts(["bench", "user"]), 0.0),
            NodeType::new("post", NodeAddress::from_parts(["bench", "post"]), 1.0),
        ],
        edge_types: vec![
            EdgeType::new(
                "authors",
                "is authored by",
                EdgeAddress::from_parts(["bench", "authors"]),
                EdgeWeight::new(1.0, 0.5),
            ),
            EdgeType::new(
                "replies to",
                "is replied to by",
                EdgeAddress::from_parts(["bench", "replies"]),
                EdgeWeight::new(1.0, 0.1),
            ),
        ],
    }
}

/// `users` authors and `posts` posts spread over `DAYS` days. Every post is
/// authored by one user and replies to an earlier post.
fn build_graph(users: usize, posts: usize) -> ResolvedGraph {
    let mut graph = ContributionGraph::new();
    let user_addr = |u: usize| NodeAddress::from_parts(["bench".to_string(), "user".to_string(), u.to_string()]);
    let post_addr = |p: usize| NodeAddress::from_parts(["bench".to_string(), "post".to_string(), p.to_string()]);

    for u in 0..users {
        graph.add_node(Node::new(user_addr(u), "", None)).unwrap();
    }
    for p in 0..posts {
        let ts = (p as i64 * DAYS * DAY_MS) / posts as i64;
        graph.add_node(Node::new(post_addr(p), "", Some(ts))).unwrap();
        graph
            .add_edge(Edge::new(
                EdgeAddress::from_parts(["bench".to_string(), "authors".to_string(), p.to_string()]),
                user_addr((p * 7) % users),
                post_addr(p),
            ))
            .unwrap();
        if p > 0 {
            graph
                .add_edge(Edge::new(
                    EdgeAddress::from_parts(["bench".to_string(), "replies".to_string(), p.to_string()]),
                    post_addr(p),
                    post_addr((p * 13) % p),
                ))
                .unwrap();
        }
    }

    WeightResolver::new(&[declaration()], &WeightOverrides::new())
        .unwrap()
        .resolve_graph(&graph)
        .unwrap()
}

fn bench_propagation(c: &mut Criterion) {
    let mut group = c.benchmark_group("propagation");
    for posts in [1_000, 10_000] {
        let resolved = build_graph(posts / 10, posts);
        let chain = MarkovChain::from_resolved(&resolved);
        let seed = seed_vector(&resolved.node_weights());
        let engine = PropagationEngine::new(PropagationOptions::default()).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(posts), &posts, |b, _| {
            b.iter(|| engine.run(black_box(&chain), black_box(&seed)).unwrap())
        });
    }
    group.finish();
}

fn bench_chain_build(c: &mut Criterion) {
    let resolved = build_graph(1_000, 10_000);
    c.bench_function("markov_chain_10k", |b| {
        b.iter(|| MarkovChain::from_resolved(black_box(&resolved)))
    });
}

fn bench_timeline(c: &mut Criterion) {
    let resolved = build_graph(500, 5_000);
    let intervals = generate_intervals(0, DAYS * DAY_MS, 7 * DAY_MS).unwrap();
    let mut group = c.benchmark_group("timeline_weekly");
    for parallel in [false, true] {
        let decomposer = TimelineDecomposer::new(TimelineOptions::default().with_parallel(parallel)).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(parallel), &parallel, |b, _| {
            b.iter(|| decomposer.decompose(black_box(&resolved), black_box(&intervals)).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_propagation, bench_chain_build, bench_timeline);
criterion_main!(benches);
