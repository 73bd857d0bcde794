//! Contribution graph interface and in-memory implementation.
//!
//! The engine consumes graphs through `GraphView` only. `ContributionGraph`
//! is a petgraph-backed implementation for hosts and tests.

pub mod contribution_graph;
pub mod types;
pub mod view;

pub use contribution_graph::ContributionGraph;
pub use types::{Edge, Node};
pub use view::GraphView;
