//! CredErrorCode trait for stable, machine-readable error codes.

/// Every error enum implements this to provide a structured error code
/// string for callers that branch on error kind without matching variants.
pub trait CredErrorCode {
    /// Returns the error code string (e.g., "INVALID_ARGUMENT").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted coded string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const INVALID_ARGUMENT: &str = "INVALID_ARGUMENT";
pub const INVALID_INPUT: &str = "INVALID_INPUT";
pub const SCHEMA_MISMATCH: &str = "SCHEMA_MISMATCH";
pub const DUPLICATE_TYPE: &str = "DUPLICATE_TYPE";
pub const INVALID_WEIGHT: &str = "INVALID_WEIGHT";
pub const GRAPH_ERROR: &str = "GRAPH_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const CANCELLED: &str = "CANCELLED";
