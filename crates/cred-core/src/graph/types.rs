//! Graph nodes and edges.

use serde::{Deserialize, Serialize};

use crate::types::{EdgeAddress, NodeAddress};

/// A node in a contribution graph. Immutable once added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub address: NodeAddress,
    pub description: String,
    /// Creation time in epoch milliseconds. `None` for timeless nodes
    /// such as user identities.
    pub timestamp_ms: Option<i64>,
}

impl Node {
    pub fn new(address: NodeAddress, description: impl Into<String>, timestamp_ms: Option<i64>) -> Self {
        Self {
            address,
            description: description.into(),
            timestamp_ms,
        }
    }
}

/// A directed edge. Its type is determined by its address prefix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub address: EdgeAddress,
    pub src: NodeAddress,
    pub dst: NodeAddress,
    pub timestamp_ms: Option<i64>,
}

impl Edge {
    pub fn new(address: EdgeAddress, src: NodeAddress, dst: NodeAddress) -> Self {
        Self {
            address,
            src,
            dst,
            timestamp_ms: None,
        }
    }

    pub fn with_timestamp(mut self, timestamp_ms: i64) -> Self {
        self.timestamp_ms = Some(timestamp_ms);
        self
    }

    pub fn is_loop(&self) -> bool {
        self.src == self.dst
    }
}
