//! Data structures shared across the engine.
//! FxHashMap/SmallVec re-exports and hierarchical address types.

pub mod address;
pub mod collections;

pub use address::{EdgeAddress, NodeAddress};
pub use collections::FxHashMap;
