//! Prefix trie keyed by address parts.
//!
//! Lookup walks the address one part at a time and remembers the deepest
//! node holding a value, so the most specific declared prefix wins.

use cred_core::types::FxHashMap;

#[derive(Debug, Clone)]
struct TrieNode<V> {
    value: Option<V>,
    children: FxHashMap<String, TrieNode<V>>,
}

impl<V> Default for TrieNode<V> {
    fn default() -> Self {
        Self {
            value: None,
            children: FxHashMap::default(),
        }
    }
}

/// Longest-prefix lookup table.
#[derive(Debug, Clone)]
pub struct PrefixTable<V> {
    root: TrieNode<V>,
    len: usize,
}

impl<V> PrefixTable<V> {
    pub fn new() -> Self {
        Self {
            root: TrieNode::default(),
            len: 0,
        }
    }

    /// Insert a value at `prefix`. Returns the rejected value if the exact
    /// prefix is already taken.
    pub fn insert(&mut self, prefix: &[String], value: V) -> Result<(), V> {
        let mut node = &mut self.root;
        for part in prefix {
            node = node.children.entry(part.clone()).or_default();
        }
        if node.value.is_some() {
            return Err(value);
        }
        node.value = Some(value);
        self.len += 1;
        Ok(())
    }

    /// Value stored at the deepest prefix of `address`, with that prefix's
    /// length in parts.
    pub fn longest_match(&self, address: &[String]) -> Option<(usize, &V)> {
        let mut node = &self.root;
        let mut best = node.value.as_ref().map(|v| (0, v));
        for (depth, part) in address.iter().enumerate() {
            match node.children.get(part) {
                Some(child) => {
                    node = child;
                    if let Some(v) = node.value.as_ref() {
                        best = Some((depth + 1, v));
                    }
                }
                None => break,
            }
        }
        best
    }

    /// Value stored at exactly `prefix`.
    pub fn get_exact(&self, prefix: &[String]) -> Option<&V> {
        let mut node = &self.root;
        for part in prefix {
            node = node.children.get(part)?;
        }
        node.value.as_ref()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<V> Default for PrefixTable<V> {
    fn default() -> Self {
        Self::new()
    }
}
