//! Propagation engine: a PageRank-family fixed point over a weighted graph.
//!
//! Every edge carries cred in both directions at independent rates. Node
//! type weights seed the restart vector. Dangling nodes hand their mass
//! back uniformly to every node, so a distribution stays normalized through
//! every iteration.

pub mod decomposition;
pub mod engine;
pub mod markov_chain;
pub mod options;
pub mod scores;

pub use decomposition::{decompose, EdgeContribution, FlowDirection, NodeDecomposition};
pub use engine::{seed_vector, PropagationEngine, PropagationResult};
pub use markov_chain::{Adjacency, Connection, MarkovChain};
pub use options::PropagationOptions;
pub use scores::CredDistribution;
