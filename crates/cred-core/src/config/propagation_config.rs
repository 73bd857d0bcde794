//! Propagation configuration.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Configuration for a single propagation run.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct PropagationConfig {
    /// Iteration budget. Default: 255.
    pub max_iterations: Option<usize>,
    /// L∞ distance below which the iteration is considered converged. Default: 1e-7.
    pub convergence_threshold: Option<f64>,
    /// Restart probability toward the seed vector, in [0, 1]. Default: 0.05.
    pub seed_weight: Option<f64>,
}

impl PropagationConfig {
    /// Returns the effective iteration budget, defaulting to 255.
    pub fn effective_max_iterations(&self) -> usize {
        self.max_iterations
            .unwrap_or(constants::DEFAULT_MAX_ITERATIONS)
    }

    /// Returns the effective convergence threshold, defaulting to 1e-7.
    pub fn effective_convergence_threshold(&self) -> f64 {
        self.convergence_threshold
            .unwrap_or(constants::DEFAULT_CONVERGENCE_THRESHOLD)
    }

    /// Returns the effective seed weight, defaulting to 0.05.
    pub fn effective_seed_weight(&self) -> f64 {
        self.seed_weight.unwrap_or(constants::DEFAULT_SEED_WEIGHT)
    }
}
