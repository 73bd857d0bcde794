//! Re-exports of performance-oriented collection types.

pub use rustc_hash::FxHashMap;
pub use smallvec::SmallVec;

/// SmallVec sized for address parts (plugin, kind, id, ... rarely more than 4).
pub type AddressParts = SmallVec<[String; 4]>;
