//! Shared constants for the cred attribution engine.

/// Engine version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default iteration budget for a single propagation run.
pub const DEFAULT_MAX_ITERATIONS: usize = 255;

/// Default L∞ convergence threshold between successive distributions.
pub const DEFAULT_CONVERGENCE_THRESHOLD: f64 = 1e-7;

/// Default restart probability toward the seed vector.
pub const DEFAULT_SEED_WEIGHT: f64 = 0.05;

/// One day in milliseconds.
pub const DAY_MS: i64 = 24 * 60 * 60 * 1000;

/// One week in milliseconds.
pub const WEEK_MS: i64 = 7 * DAY_MS;

/// Default timeline bucket size (one week).
pub const DEFAULT_BUCKET_MS: i64 = WEEK_MS;

/// Timelines run intervals on the rayon pool unless told otherwise.
pub const DEFAULT_TIMELINE_PARALLEL: bool = true;

/// Score given to the top node by `scores_by_maximum` when callers
/// don't pick their own scale.
pub const DEFAULT_MAX_SCORE: f64 = 1000.0;
