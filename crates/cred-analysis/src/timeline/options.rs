//! Timeline options.

use cred_core::config::CredConfig;
use cred_core::constants;
use cred_core::types::NodeAddress;

use crate::propagation::PropagationOptions;

/// Parameters of a timeline decomposition.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineOptions {
    /// Applied to every interval run. `initial_distribution` is ignored;
    /// each interval starts from uniform over its active nodes.
    pub propagation: PropagationOptions,
    /// Run intervals on the rayon pool.
    pub parallel: bool,
    /// Only report nodes under this prefix.
    pub node_filter: Option<NodeAddress>,
    /// Bucket size for intervals derived from the graph's time range.
    pub bucket_ms: i64,
}

impl Default for TimelineOptions {
    fn default() -> Self {
        Self {
            propagation: PropagationOptions::default(),
            parallel: constants::DEFAULT_TIMELINE_PARALLEL,
            node_filter: None,
            bucket_ms: constants::DEFAULT_BUCKET_MS,
        }
    }
}

impl TimelineOptions {
    pub fn from_config(config: &CredConfig) -> Self {
        let filter = &config.timeline.node_filter;
        Self {
            propagation: PropagationOptions::from_config(&config.propagation),
            parallel: config.timeline.effective_parallel(),
            node_filter: (!filter.is_empty()).then(|| NodeAddress::from_parts(filter.iter().cloned())),
            bucket_ms: config.timeline.effective_bucket_ms(),
        }
    }

    pub fn with_propagation(mut self, propagation: PropagationOptions) -> Self {
        self.propagation = propagation;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_node_filter(mut self, prefix: NodeAddress) -> Self {
        self.node_filter = Some(prefix);
        self
    }

    pub fn with_bucket_ms(mut self, bucket_ms: i64) -> Self {
        self.bucket_ms = bucket_ms;
        self
    }
}
