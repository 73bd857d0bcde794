//! Error handling for the cred engine.
//! One error enum per subsystem, `thiserror` only, aggregated by `CredError`.

pub mod config_error;
pub mod cred_error;
pub mod error_code;
pub mod graph_error;
pub mod numeric_error;
pub mod weight_error;

pub use config_error::ConfigError;
pub use cred_error::{CredError, CredResult};
pub use error_code::CredErrorCode;
pub use graph_error::GraphError;
pub use numeric_error::NumericError;
pub use weight_error::WeightError;
