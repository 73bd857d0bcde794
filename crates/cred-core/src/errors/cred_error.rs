//! Top-level engine error.

use super::error_code::{self, CredErrorCode};
use super::{ConfigError, GraphError, NumericError, WeightError};

/// Errors returned by engine entry points.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CredError {
    #[error(transparent)]
    Numeric(#[from] NumericError),

    #[error(transparent)]
    Weight(#[from] WeightError),

    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Computation cancelled")]
    Cancelled,
}

impl CredErrorCode for CredError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Numeric(e) => e.error_code(),
            Self::Weight(e) => e.error_code(),
            Self::Graph(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::Cancelled => error_code::CANCELLED,
        }
    }
}

pub type CredResult<T> = Result<T, CredError>;
