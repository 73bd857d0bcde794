//! Numeric primitive errors.

use super::error_code::{self, CredErrorCode};

/// Precondition failures of the distribution utilities and the
/// propagation engine's numeric parameters.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NumericError {
    /// A size or count parameter is not a positive integer, or a numeric
    /// parameter is out of its allowed range.
    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },

    /// An array argument is empty or has the wrong length.
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },
}

impl NumericError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }
}

impl CredErrorCode for NumericError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidArgument { .. } => error_code::INVALID_ARGUMENT,
            Self::InvalidInput { .. } => error_code::INVALID_INPUT,
        }
    }
}
