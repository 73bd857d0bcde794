//! Weight resolution errors.

use super::error_code::{self, CredErrorCode};

/// Errors that can occur while turning type declarations into weights.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WeightError {
    /// No declared type prefix matches the address.
    #[error("no {kind} type matches {address}")]
    SchemaMismatch { kind: &'static str, address: String },

    /// Two declarations share the exact same prefix.
    #[error("duplicate {kind} type prefix {prefix}")]
    DuplicateType { kind: &'static str, prefix: String },

    /// A default or override weight is negative or not finite.
    #[error("invalid weight {value} for type {prefix}")]
    InvalidWeight { prefix: String, value: f64 },
}

impl CredErrorCode for WeightError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::SchemaMismatch { .. } => error_code::SCHEMA_MISMATCH,
            Self::DuplicateType { .. } => error_code::DUPLICATE_TYPE,
            Self::InvalidWeight { .. } => error_code::INVALID_WEIGHT,
        }
    }
}
