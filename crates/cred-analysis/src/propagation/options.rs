//! Propagation options.

use cred_core::config::PropagationConfig;
use cred_core::constants;
use cred_core::errors::NumericError;

use crate::distribution::Distribution;

/// Parameters of one propagation run.
#[derive(Debug, Clone, PartialEq)]
pub struct PropagationOptions {
    /// Iteration budget; must be positive.
    pub max_iterations: usize,
    /// Stop once the L∞ distance between successive distributions drops
    /// strictly below this value.
    pub convergence_threshold: f64,
    /// Restart probability toward the seed vector, in [0, 1].
    pub seed_weight: f64,
    /// Starting point of the iteration; uniform when `None`.
    pub initial_distribution: Option<Distribution>,
}

impl Default for PropagationOptions {
    fn default() -> Self {
        Self {
            max_iterations: constants::DEFAULT_MAX_ITERATIONS,
            convergence_threshold: constants::DEFAULT_CONVERGENCE_THRESHOLD,
            seed_weight: constants::DEFAULT_SEED_WEIGHT,
            initial_distribution: None,
        }
    }
}

impl PropagationOptions {
    /// Options from the effective values of a `PropagationConfig`.
    pub fn from_config(config: &PropagationConfig) -> Self {
        Self {
            max_iterations: config.effective_max_iterations(),
            convergence_threshold: config.effective_convergence_threshold(),
            seed_weight: config.effective_seed_weight(),
            initial_distribution: None,
        }
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn with_convergence_threshold(mut self, threshold: f64) -> Self {
        self.convergence_threshold = threshold;
        self
    }

    pub fn with_seed_weight(mut self, seed_weight: f64) -> Self {
        self.seed_weight = seed_weight;
        self
    }

    pub fn with_initial_distribution(mut self, initial: Distribution) -> Self {
        self.initial_distribution = Some(initial);
        self
    }

    /// Check parameter ranges. Does not look at the initial distribution's
    /// length, which depends on the graph.
    pub fn validate(&self) -> Result<(), NumericError> {
        if self.max_iterations == 0 {
            return Err(NumericError::invalid_argument(
                "max_iterations: expected positive integer, got 0",
            ));
        }
        if !self.convergence_threshold.is_finite() || self.convergence_threshold <= 0.0 {
            return Err(NumericError::invalid_argument(format!(
                "convergence_threshold: expected finite positive number, got {}",
                self.convergence_threshold
            )));
        }
        if !(0.0..=1.0).contains(&self.seed_weight) {
            return Err(NumericError::invalid_argument(format!(
                "seed_weight: expected value in [0, 1], got {}",
                self.seed_weight
            )));
        }
        Ok(())
    }
}
