//! Type-level weight resolution.
//!
//! Every declared type is stored once in a prefix trie together with its
//! effective weight (the override if one is set for that exact type prefix,
//! else the declared default). Resolving an address is a single
//! longest-prefix walk.

use cred_core::declarations::{EdgeType, EdgeWeight, NodeType, NodeWeight, PluginDeclaration, WeightOverrides};
use cred_core::errors::WeightError;
use cred_core::graph::GraphView;
use cred_core::types::{EdgeAddress, FxHashMap, NodeAddress};
use tracing::{debug, warn};

use super::prefix_table::PrefixTable;
use super::resolved::{ResolvedEdge, ResolvedGraph, ResolvedNode};

const NODE_KIND: &str = "node";
const EDGE_KIND: &str = "edge";

#[derive(Debug, Clone)]
struct NodeEntry {
    node_type: NodeType,
    weight: NodeWeight,
}

#[derive(Debug, Clone)]
struct EdgeEntry {
    edge_type: EdgeType,
    weight: EdgeWeight,
}

/// Resolves node and edge addresses to concrete weights.
///
/// Built once per computation from borrowed declarations and overrides;
/// neither is mutated.
#[derive(Debug, Clone)]
pub struct WeightResolver {
    node_types: PrefixTable<NodeEntry>,
    edge_types: PrefixTable<EdgeEntry>,
}

impl WeightResolver {
    /// Build the lookup tables.
    ///
    /// Fails if two declarations share an exact prefix or if any default or
    /// override weight is negative or not finite. Overrides naming a prefix
    /// with no declared type are ignored.
    pub fn new(
        declarations: &[PluginDeclaration],
        overrides: &WeightOverrides,
    ) -> Result<Self, WeightError> {
        let mut node_types = PrefixTable::new();
        let mut edge_types = PrefixTable::new();

        for declaration in declarations {
            for node_type in &declaration.node_types {
                let weight = overrides
                    .node_type_weights
                    .get(&node_type.prefix)
                    .copied()
                    .unwrap_or(node_type.default_weight);
                if !weight.is_finite() || weight < 0.0 {
                    return Err(WeightError::InvalidWeight {
                        prefix: node_type.prefix.to_string(),
                        value: weight,
                    });
                }
                let entry = NodeEntry {
                    node_type: node_type.clone(),
                    weight,
                };
                node_types
                    .insert(node_type.prefix.parts(), entry)
                    .map_err(|_| WeightError::DuplicateType {
                        kind: NODE_KIND,
                        prefix: node_type.prefix.to_string(),
                    })?;
            }

            for edge_type in &declaration.edge_types {
                let weight = overrides
                    .edge_type_weights
                    .get(&edge_type.prefix)
                    .copied()
                    .unwrap_or(edge_type.default_weight);
                if !weight.is_valid() {
                    let value = if weight.forward.is_finite() && weight.forward >= 0.0 {
                        weight.backward
                    } else {
                        weight.forward
                    };
                    return Err(WeightError::InvalidWeight {
                        prefix: edge_type.prefix.to_string(),
                        value,
                    });
                }
                let entry = EdgeEntry {
                    edge_type: edge_type.clone(),
                    weight,
                };
                edge_types
                    .insert(edge_type.prefix.parts(), entry)
                    .map_err(|_| WeightError::DuplicateType {
                        kind: EDGE_KIND,
                        prefix: edge_type.prefix.to_string(),
                    })?;
            }
        }

        for prefix in overrides.node_type_weights.keys() {
            if node_types.get_exact(prefix.parts()).is_none() {
                warn!(prefix = %prefix, "node weight override names no declared type");
            }
        }
        for prefix in overrides.edge_type_weights.keys() {
            if edge_types.get_exact(prefix.parts()).is_none() {
                warn!(prefix = %prefix, "edge weight override names no declared type");
            }
        }

        debug!(
            plugins = declarations.len(),
            types = declarations.iter().map(PluginDeclaration::type_count).sum::<usize>(),
            "weight tables built"
        );
        Ok(Self {
            node_types,
            edge_types,
        })
    }

    /// Weight of the most specific node type matching `address`.
    pub fn node_weight(&self, address: &NodeAddress) -> Result<NodeWeight, WeightError> {
        self.node_entry(address).map(|e| e.weight)
    }

    /// Weight pair of the most specific edge type matching `address`.
    pub fn edge_weight(&self, address: &EdgeAddress) -> Result<EdgeWeight, WeightError> {
        self.edge_entry(address).map(|e| e.weight)
    }

    /// The most specific node type matching `address`.
    pub fn node_type(&self, address: &NodeAddress) -> Result<&NodeType, WeightError> {
        self.node_entry(address).map(|e| &e.node_type)
    }

    /// The most specific edge type matching `address`.
    pub fn edge_type(&self, address: &EdgeAddress) -> Result<&EdgeType, WeightError> {
        self.edge_entry(address).map(|e| &e.edge_type)
    }

    pub fn node_type_count(&self) -> usize {
        self.node_types.len()
    }

    pub fn edge_type_count(&self) -> usize {
        self.edge_types.len()
    }

    fn node_entry(&self, address: &NodeAddress) -> Result<&NodeEntry, WeightError> {
        self.node_types
            .longest_match(address.parts())
            .map(|(_, entry)| entry)
            .ok_or_else(|| WeightError::SchemaMismatch {
                kind: NODE_KIND,
                address: address.to_string(),
            })
    }

    fn edge_entry(&self, address: &EdgeAddress) -> Result<&EdgeEntry, WeightError> {
        self.edge_types
            .longest_match(address.parts())
            .map(|(_, entry)| entry)
            .ok_or_else(|| WeightError::SchemaMismatch {
                kind: EDGE_KIND,
                address: address.to_string(),
            })
    }

    /// Resolve every node and edge of `graph` exactly once.
    ///
    /// Nodes come out in ascending address order, which fixes the
    /// distribution ordering for every downstream computation. Edges whose
    /// endpoints are not in the graph are skipped.
    pub fn resolve_graph<G: GraphView>(&self, graph: &G) -> Result<ResolvedGraph, WeightError> {
        let mut nodes = graph
            .nodes()
            .map(|node| {
                Ok(ResolvedNode {
                    address: node.address.clone(),
                    timestamp_ms: node.timestamp_ms,
                    weight: self.node_weight(&node.address)?,
                })
            })
            .collect::<Result<Vec<_>, WeightError>>()?;
        nodes.sort_by(|a, b| a.address.cmp(&b.address));

        let index: FxHashMap<&NodeAddress, usize> = nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (&n.address, i))
            .collect();

        let mut edges = Vec::new();
        for edge in graph.edges() {
            let (Some(&src), Some(&dst)) = (index.get(&edge.src), index.get(&edge.dst)) else {
                debug!(edge = %edge.address, "skipping edge with missing endpoint");
                continue;
            };
            edges.push(ResolvedEdge {
                address: edge.address.clone(),
                src,
                dst,
                timestamp_ms: edge.timestamp_ms,
                weight: self.edge_weight(&edge.address)?,
            });
        }
        edges.sort_by(|a, b| a.address.cmp(&b.address));

        Ok(ResolvedGraph::new(nodes, edges))
    }
}
