//! Timeline configuration.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Configuration for the timeline decomposer.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct TimelineConfig {
    /// Interval length in milliseconds. Default: one week.
    pub bucket_ms: Option<i64>,
    /// Run intervals on the rayon pool. Default: true.
    pub parallel: Option<bool>,
    /// Only report nodes under these address parts (e.g. `["github", "user"]`).
    #[serde(default)]
    pub node_filter: Vec<String>,
}

impl TimelineConfig {
    /// Returns the effective bucket size, defaulting to one week.
    pub fn effective_bucket_ms(&self) -> i64 {
        self.bucket_ms.unwrap_or(constants::DEFAULT_BUCKET_MS)
    }

    /// Returns whether intervals run in parallel, defaulting to true.
    pub fn effective_parallel(&self) -> bool {
        self.parallel.unwrap_or(constants::DEFAULT_TIMELINE_PARALLEL)
    }
}
