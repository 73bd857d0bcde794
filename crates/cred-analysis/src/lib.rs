//! # cred-analysis
//!
//! The cred attribution engine.
//!
//! - **distribution**: uniform construction and L∞ convergence checks
//! - **weights**: longest-prefix type lookup turning declarations and
//!   overrides into concrete node and edge weights
//! - **propagation**: seeded mass propagation over a sparse Markov chain
//!   until the distribution stabilizes
//! - **timeline**: per-interval propagation assembled into score sequences

pub mod api;
pub mod distribution;
pub mod propagation;
pub mod timeline;
pub mod weights;

pub use api::{compute_distribution, compute_timeline, compute_timeline_for_graph, decompose_node};
pub use distribution::{compute_delta, delta_less_than, uniform_distribution, Distribution};
pub use propagation::{CredDistribution, PropagationEngine, PropagationOptions, PropagationResult};
pub use timeline::{Interval, TimelineOptions, TimelineScores};
pub use weights::{ResolvedGraph, WeightResolver};
