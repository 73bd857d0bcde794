//! Top-level cred configuration with layered resolution.

use serde::{Deserialize, Serialize};

use super::{PropagationConfig, TimelineConfig};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Programmatic overrides (applied via `apply_overrides`)
/// 2. Environment variables (`CRED_*`)
/// 3. TOML text handed in by the caller
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct CredConfig {
    pub propagation: PropagationConfig,
    pub timeline: TimelineConfig,
}

/// Overrides a host application applies on top of TOML and environment.
#[derive(Debug, Clone, Default)]
pub struct ProgrammaticOverrides {
    pub max_iterations: Option<usize>,
    pub convergence_threshold: Option<f64>,
    pub seed_weight: Option<f64>,
    pub bucket_ms: Option<i64>,
    pub parallel: Option<bool>,
}

impl CredConfig {
    /// Resolve configuration from optional TOML text, the environment,
    /// and programmatic overrides, then validate.
    pub fn load(
        toml_text: Option<&str>,
        overrides: Option<&ProgrammaticOverrides>,
    ) -> Result<Self, ConfigError> {
        let mut config = match toml_text {
            Some(text) => Self::parse(text)?,
            None => Self::default(),
        };

        Self::apply_env_overrides(&mut config);

        if let Some(overrides) = overrides {
            Self::apply_overrides(&mut config, overrides);
        }

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML string alone, then validate.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config = Self::parse(toml_str)?;
        Self::validate(&config)?;
        Ok(config)
    }

    fn parse(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            source_name: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &CredConfig) -> Result<(), ConfigError> {
        if let Some(max_iterations) = config.propagation.max_iterations {
            if max_iterations == 0 {
                return Err(ConfigError::ValidationFailed {
                    field: "propagation.max_iterations".to_string(),
                    message: "must be greater than 0".to_string(),
                });
            }
        }
        if let Some(threshold) = config.propagation.convergence_threshold {
            if !threshold.is_finite() || threshold <= 0.0 {
                return Err(ConfigError::ValidationFailed {
                    field: "propagation.convergence_threshold".to_string(),
                    message: "must be a finite number greater than 0".to_string(),
                });
            }
        }
        if let Some(seed_weight) = config.propagation.seed_weight {
            if !(0.0..=1.0).contains(&seed_weight) {
                return Err(ConfigError::ValidationFailed {
                    field: "propagation.seed_weight".to_string(),
                    message: "must be between 0.0 and 1.0".to_string(),
                });
            }
        }
        if let Some(bucket_ms) = config.timeline.bucket_ms {
            if bucket_ms <= 0 {
                return Err(ConfigError::ValidationFailed {
                    field: "timeline.bucket_ms".to_string(),
                    message: "must be greater than 0".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Apply environment variable overrides. Unparseable values are ignored.
    fn apply_env_overrides(config: &mut CredConfig) {
        if let Ok(val) = std::env::var("CRED_MAX_ITERATIONS") {
            if let Ok(v) = val.parse::<usize>() {
                config.propagation.max_iterations = Some(v);
            }
        }
        if let Ok(val) = std::env::var("CRED_CONVERGENCE_THRESHOLD") {
            if let Ok(v) = val.parse::<f64>() {
                config.propagation.convergence_threshold = Some(v);
            }
        }
        if let Ok(val) = std::env::var("CRED_SEED_WEIGHT") {
            if let Ok(v) = val.parse::<f64>() {
                config.propagation.seed_weight = Some(v);
            }
        }
        if let Ok(val) = std::env::var("CRED_TIMELINE_BUCKET_MS") {
            if let Ok(v) = val.parse::<i64>() {
                config.timeline.bucket_ms = Some(v);
            }
        }
        if let Ok(val) = std::env::var("CRED_TIMELINE_PARALLEL") {
            if let Ok(v) = val.parse::<bool>() {
                config.timeline.parallel = Some(v);
            }
        }
    }

    /// Apply programmatic overrides (highest priority).
    pub fn apply_overrides(config: &mut CredConfig, overrides: &ProgrammaticOverrides) {
        if let Some(v) = overrides.max_iterations {
            config.propagation.max_iterations = Some(v);
        }
        if let Some(v) = overrides.convergence_threshold {
            config.propagation.convergence_threshold = Some(v);
        }
        if let Some(v) = overrides.seed_weight {
            config.propagation.seed_weight = Some(v);
        }
        if let Some(v) = overrides.bucket_ms {
            config.timeline.bucket_ms = Some(v);
        }
        if let Some(v) = overrides.parallel {
            config.timeline.parallel = Some(v);
        }
    }

    /// Serialize back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::InvalidValue {
            field: "<root>".to_string(),
            message: e.to_string(),
        })
    }
}
