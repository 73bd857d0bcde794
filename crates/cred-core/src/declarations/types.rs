//! Node type, edge type, and plugin declarations.

use serde::{Deserialize, Serialize};

use super::weights::{EdgeWeight, NodeWeight};
use crate::types::{EdgeAddress, NodeAddress};

/// A class of nodes, identified by address prefix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeType {
    pub name: String,
    pub plural_name: String,
    pub prefix: NodeAddress,
    pub default_weight: NodeWeight,
    pub description: String,
}

impl NodeType {
    pub fn new(name: impl Into<String>, prefix: NodeAddress, default_weight: NodeWeight) -> Self {
        let name = name.into();
        Self {
            plural_name: format!("{name}s"),
            name,
            prefix,
            default_weight,
            description: String::new(),
        }
    }
}

/// A class of edges, identified by address prefix.
///
/// `forward_name` reads "src <forward_name> dst" (e.g. "authors"),
/// `backward_name` reads "dst <backward_name> src" (e.g. "is authored by").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeType {
    pub forward_name: String,
    pub backward_name: String,
    pub prefix: EdgeAddress,
    pub default_weight: EdgeWeight,
    pub description: String,
}

impl EdgeType {
    pub fn new(
        forward_name: impl Into<String>,
        backward_name: impl Into<String>,
        prefix: EdgeAddress,
        default_weight: EdgeWeight,
    ) -> Self {
        Self {
            forward_name: forward_name.into(),
            backward_name: backward_name.into(),
            prefix,
            default_weight,
            description: String::new(),
        }
    }
}

/// The node and edge types contributed by one plugin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PluginDeclaration {
    pub name: String,
    pub node_prefix: NodeAddress,
    pub edge_prefix: EdgeAddress,
    pub node_types: Vec<NodeType>,
    pub edge_types: Vec<EdgeType>,
}

impl PluginDeclaration {
    /// Total number of declared types.
    pub fn type_count(&self) -> usize {
        self.node_types.len() + self.edge_types.len()
    }
}
