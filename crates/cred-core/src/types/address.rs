//! Hierarchical address types for graph nodes and edges.
//!
//! An address is an ordered sequence of string parts. Addresses compare
//! lexicographically by part, so a prefix always sorts before every address
//! it is a prefix of. `NodeAddress` and `EdgeAddress` share the same shape
//! but are distinct types so one can't be used where the other is expected.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::collections::AddressParts;

macro_rules! define_address {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(AddressParts);

        impl $name {
            /// The empty address. Every address has it as a prefix.
            pub fn empty() -> Self {
                Self(AddressParts::new())
            }

            /// Build an address from its parts.
            pub fn from_parts<I, S>(parts: I) -> Self
            where
                I: IntoIterator<Item = S>,
                S: Into<String>,
            {
                Self(parts.into_iter().map(Into::into).collect())
            }

            /// Return a new address with `part` appended.
            pub fn append(&self, part: impl Into<String>) -> Self {
                let mut parts = self.0.clone();
                parts.push(part.into());
                Self(parts)
            }

            /// The address parts in order.
            pub fn parts(&self) -> &[String] {
                &self.0
            }

            /// Number of parts.
            pub fn len(&self) -> usize {
                self.0.len()
            }

            /// True for the empty address.
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }

            /// True if `prefix` is a (non-strict) prefix of this address.
            pub fn has_prefix(&self, prefix: &Self) -> bool {
                self.0.starts_with(&prefix.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}[", stringify!($name))?;
                for (i, part) in self.0.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{part:?}")?;
                }
                f.write_str("]")
            }
        }
    };
}

define_address!(
    /// Address of a node in a contribution graph.
    NodeAddress
);

define_address!(
    /// Address of an edge in a contribution graph.
    EdgeAddress
);
