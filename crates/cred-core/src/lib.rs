//! # cred-core
//!
//! Foundation crate for the cred attribution engine.
//! Defines addresses, the graph interface, type declarations and weights,
//! errors, config, cancellation, tracing, and constants.
//! `cred-analysis` builds the numeric engine on top of this.

pub mod config;
pub mod constants;
pub mod declarations;
pub mod errors;
pub mod graph;
pub mod traits;
pub mod tracing;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::CredConfig;
pub use declarations::{EdgeType, EdgeWeight, NodeType, PluginDeclaration, WeightOverrides};
pub use errors::{CredError, CredResult};
pub use graph::{ContributionGraph, Edge, GraphView, Node};
pub use traits::{Cancellable, CancellationToken};
pub use types::{EdgeAddress, NodeAddress};
