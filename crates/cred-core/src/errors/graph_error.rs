//! Contribution graph errors.

use super::error_code::{self, CredErrorCode};

/// Errors raised while building an in-memory contribution graph.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GraphError {
    #[error("node {address} already exists with different data")]
    DuplicateNode { address: String },

    #[error("edge {address} already exists with different data")]
    DuplicateEdge { address: String },

    #[error("edge {edge} references missing node {node}")]
    MissingEndpoint { edge: String, node: String },
}

impl CredErrorCode for GraphError {
    fn error_code(&self) -> &'static str {
        error_code::GRAPH_ERROR
    }
}
