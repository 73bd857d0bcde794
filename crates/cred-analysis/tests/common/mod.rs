//! Shared fixtures for cred-analysis integration tests.

#![allow(dead_code)]

use cred_core::declarations::{EdgeType, EdgeWeight, NodeType, PluginDeclaration};
use cred_core::graph::{ContributionGraph, Edge, Node};
use cred_core::types::{EdgeAddress, NodeAddress};

pub const DAY: i64 = 86_400_000;

pub fn node_addr(parts: &[&str]) -> NodeAddress {
    NodeAddress::from_parts(parts.iter().copied())
}

pub fn edge_addr(parts: &[&str]) -> EdgeAddress {
    EdgeAddress::from_parts(parts.iter().copied())
}

/// One plugin with users, pull requests, comments and three edge types:
///
/// - `authors`   user → pull/comment, forward 1.0, backward 0.5
/// - `references` pull → pull, forward 1.0, backward 0.0
/// - `reacts`    user → comment, forward 0.25, backward 0.25
pub fn github_declaration() -> PluginDeclaration {
    PluginDeclaration {
        name: "github".into(),
        node_prefix: node_addr(&["github"]),
        edge_prefix: edge_addr(&["github"]),
        node_types: vec![
            NodeType::new("user", node_addr(&["github", "user"]), 0.0),
            NodeType::new("pull", node_addr(&["github", "pull"]), 4.0),
            NodeType::new("comment", node_addr(&["github", "comment"]), 1.0),
        ],
        edge_types: vec![
            EdgeType::new(
                "authors",
                "is authored by",
                edge_addr(&["github", "authors"]),
                EdgeWeight::new(1.0, 0.5),
            ),
            EdgeType::new(
                "references",
                "is referenced by",
                edge_addr(&["github", "references"]),
                EdgeWeight::new(1.0, 0.0),
            ),
            EdgeType::new(
                "reacts to",
                "is reacted to by",
                edge_addr(&["github", "reacts"]),
                EdgeWeight::symmetric(0.25),
            ),
        ],
    }
}

pub fn user(name: &str) -> Node {
    Node::new(node_addr(&["github", "user", name]), name, None)
}

pub fn pull(id: &str, ts: i64) -> Node {
    Node::new(node_addr(&["github", "pull", id]), format!("PR #{id}"), Some(ts))
}

pub fn comment(id: &str, ts: i64) -> Node {
    Node::new(node_addr(&["github", "comment", id]), format!("comment {id}"), Some(ts))
}

pub fn authors(id: &str, src: &Node, dst: &Node) -> Edge {
    Edge::new(
        edge_addr(&["github", "authors", id]),
        src.address.clone(),
        dst.address.clone(),
    )
}

pub fn references(id: &str, src: &Node, dst: &Node) -> Edge {
    Edge::new(
        edge_addr(&["github", "references", id]),
        src.address.clone(),
        dst.address.clone(),
    )
}

pub fn reacts(id: &str, src: &Node, dst: &Node) -> Edge {
    Edge::new(
        edge_addr(&["github", "reacts", id]),
        src.address.clone(),
        dst.address.clone(),
    )
}

/// Two users authoring activity over three days.
///
/// - day 0: alice opens pull 1, bob comments on it
/// - day 1: bob opens pull 2, which references pull 1; alice reacts to
///   bob's comment
/// - day 2: nothing
/// - day 3: alice opens pull 3
pub fn sample_graph() -> ContributionGraph {
    let alice = user("alice");
    let bob = user("bob");
    let pull1 = pull("1", 10);
    let comment1 = comment("1", 20);
    let pull2 = pull("2", DAY + 10);
    let pull3 = pull("3", 3 * DAY + 10);

    let mut graph = ContributionGraph::new();
    for node in [&alice, &bob, &pull1, &comment1, &pull2, &pull3] {
        graph.add_node(node.clone()).unwrap();
    }
    let edges = [
        authors("a1", &alice, &pull1),
        authors("a2", &bob, &comment1),
        authors("a3", &bob, &pull2),
        authors("a4", &alice, &pull3),
        references("r1", &pull2, &pull1),
        reacts("x1", &alice, &comment1),
    ];
    for edge in edges {
        graph.add_edge(edge).unwrap();
    }
    graph
}

/// Two nodes joined by one edge of equal forward/backward weight.
pub fn pair_graph() -> (ContributionGraph, PluginDeclaration) {
    let declaration = PluginDeclaration {
        name: "pair".into(),
        node_prefix: node_addr(&["pair"]),
        edge_prefix: edge_addr(&["pair"]),
        node_types: vec![NodeType::new("thing", node_addr(&["pair", "thing"]), 1.0)],
        edge_types: vec![EdgeType::new(
            "links",
            "is linked by",
            edge_addr(&["pair", "link"]),
            EdgeWeight::symmetric(1.0),
        )],
    };
    let a = Node::new(node_addr(&["pair", "thing", "a"]), "a", None);
    let b = Node::new(node_addr(&["pair", "thing", "b"]), "b", None);
    let mut graph = ContributionGraph::new();
    graph.add_node(a.clone()).unwrap();
    graph.add_node(b.clone()).unwrap();
    graph
        .add_edge(Edge::new(
            edge_addr(&["pair", "link", "ab"]),
            a.address.clone(),
            b.address.clone(),
        ))
        .unwrap();
    (graph, declaration)
}

pub fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected} ± {tolerance}, got {actual}"
    );
}
