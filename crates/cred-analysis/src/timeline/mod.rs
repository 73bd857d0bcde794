//! Timeline decomposer: per-interval propagation assembled into per-node
//! score sequences.

pub mod decomposer;
pub mod intervals;
pub mod options;
pub mod scores;

pub use decomposer::{IntervalDistribution, TimelineDecomposer};
pub use intervals::{generate_intervals, intervals_for_graph, validate_intervals, weekly_intervals, Interval};
pub use options::TimelineOptions;
pub use scores::TimelineScores;
