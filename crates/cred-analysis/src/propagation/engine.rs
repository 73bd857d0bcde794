//! Seeded mass propagation via power iteration.
//!
//! ```text
//! π'[v] = (1 - α) · ( Σ_{u→v} π[u] · w(u→v)  +  D / n )  +  α · seed[v]
//! D     = Σ_{u dangling} π[u]
//! ```
//!
//! `w` are the chain's normalized transition probabilities, `α` the seed
//! weight. Mass held by dangling nodes is spread uniformly over all `n`
//! chain nodes, so the total is conserved at every step.

use std::time::Instant;

use cred_core::errors::{CredError, CredResult, NumericError};
use cred_core::tracing::metrics::PROPAGATION_SPAN;
use cred_core::traits::{Cancellable, CancellationToken};
use tracing::{debug, info_span, warn};

use super::markov_chain::MarkovChain;
use super::options::PropagationOptions;
use crate::distribution::{compute_delta, uniform_distribution, Distribution};

/// Outcome of a propagation run.
///
/// `converged == false` means the iteration budget ran out and
/// `distribution` is the last approximation.
#[derive(Debug, Clone, PartialEq)]
pub struct PropagationResult {
    pub distribution: Distribution,
    pub iterations: usize,
    pub converged: bool,
    /// L∞ distance between the last two distributions.
    pub final_delta: f64,
}

/// Runs propagation over Markov chains with fixed options.
#[derive(Debug, Clone)]
pub struct PropagationEngine {
    options: PropagationOptions,
    cancellation: Option<CancellationToken>,
}

impl PropagationEngine {
    /// Create an engine, rejecting out-of-range options.
    pub fn new(options: PropagationOptions) -> Result<Self, NumericError> {
        options.validate()?;
        Ok(Self {
            options,
            cancellation: None,
        })
    }

    /// Check `token` once per iteration and abort when it is cancelled.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }

    pub fn options(&self) -> &PropagationOptions {
        &self.options
    }

    /// Run from `options.initial_distribution`, or uniform.
    pub fn run(&self, chain: &MarkovChain, seed: &[f64]) -> CredResult<PropagationResult> {
        self.run_from(chain, seed, self.options.initial_distribution.as_deref())
    }

    /// Run from an explicit starting distribution, or uniform when `None`.
    pub fn run_from(
        &self,
        chain: &MarkovChain,
        seed: &[f64],
        initial: Option<&[f64]>,
    ) -> CredResult<PropagationResult> {
        let n = chain.node_count();
        if n == 0 {
            return Err(NumericError::invalid_input("graph has no nodes").into());
        }
        if seed.len() != n {
            return Err(NumericError::invalid_input(format!(
                "seed has {} entries for {} nodes",
                seed.len(),
                n
            ))
            .into());
        }
        let mut pi = match initial {
            Some(initial) if initial.len() != n => {
                return Err(NumericError::invalid_input(format!(
                    "initial distribution has {} entries for {} nodes",
                    initial.len(),
                    n
                ))
                .into());
            }
            Some(initial) => initial.to_vec(),
            None => uniform_distribution(n)?,
        };

        let _span = info_span!(PROPAGATION_SPAN, nodes = n, edges = chain.edge_count()).entered();
        let start = Instant::now();

        let threshold = self.options.convergence_threshold;
        let mut iterations = 0;
        let mut converged = false;
        let mut final_delta = f64::INFINITY;

        while iterations < self.options.max_iterations {
            if self.is_cancelled() {
                return Err(CredError::Cancelled);
            }
            let next = self.step(chain, &pi, seed);
            iterations += 1;
            final_delta = compute_delta(&pi, &next)?;
            pi = next;
            if final_delta < threshold {
                converged = true;
                break;
            }
        }

        let duration_ms = start.elapsed().as_millis() as u64;
        if converged {
            debug!(iterations, final_delta, duration_ms, "propagation converged");
        } else {
            warn!(
                iterations,
                final_delta,
                threshold,
                duration_ms,
                "propagation exhausted its iteration budget"
            );
        }

        Ok(PropagationResult {
            distribution: pi,
            iterations,
            converged,
            final_delta,
        })
    }

    /// One iteration. `pi` and `seed` must have one entry per chain node.
    pub fn step(&self, chain: &MarkovChain, pi: &[f64], seed: &[f64]) -> Distribution {
        let n = chain.node_count();
        let alpha = self.options.seed_weight;
        let dangling_mass: f64 = chain.dangling().iter().map(|&u| pi[u]).sum();
        let dangling_share = dangling_mass / n as f64;

        (0..n)
            .map(|v| {
                let inflow: f64 = chain
                    .incoming(v)
                    .iter()
                    .map(|c| pi[c.src] * c.weight)
                    .sum();
                (1.0 - alpha) * (inflow + dangling_share) + alpha * seed[v]
            })
            .collect()
    }

    fn is_cancelled(&self) -> bool {
        self.cancellation
            .as_ref()
            .is_some_and(|token| token.is_cancelled())
    }
}

/// Normalize raw node weights into a seed vector.
///
/// Falls back to uniform when the weights sum to zero, so a restart step
/// never destroys mass.
pub fn seed_vector(weights: &[f64]) -> Distribution {
    let total: f64 = weights.iter().sum();
    if total > 0.0 {
        weights.iter().map(|w| w / total).collect()
    } else if weights.is_empty() {
        Vec::new()
    } else {
        vec![1.0 / weights.len() as f64; weights.len()]
    }
}
