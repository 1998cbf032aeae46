// --- File: src/core/trie.rs
use crate::core::types::EntryId;
use std::collections::HashMap;

#[derive(Debug, Clone)]
struct TrieNode {
    children: HashMap<char, usize>,
    entry: Option<EntryId>,
}

impl TrieNode {
    fn new() -> Self {
        Self { children: HashMap::new(), entry: None }
    }
}

/// Char-keyed trie over pattern keys, built once and read-only afterwards.
/// Nodes live in a flat arena; index 0 is the root.
#[derive(Debug, Clone)]
pub struct PatternTrie {
    nodes: Vec<TrieNode>,
}

impl PatternTrie {
    pub fn new() -> Self {
        Self { nodes: vec![TrieNode::new()] }
    }

    /// Inserts `key` for `entry`. Returns the entry previously stored under
    /// the same key, leaving it in place.
    /// O(k) complexity where k is key length.
    pub fn insert(&mut self, key: &str, entry: EntryId) -> Result<(), EntryId> {
        let mut node_idx = 0;
        for ch in key.chars() {
            let next_idx = if let Some(&id) = self.nodes[node_idx].children.get(&ch) {
                id
            } else {
                let new_node_id = self.nodes.len();
                self.nodes.push(TrieNode::new());
                self.nodes[node_idx].children.insert(ch, new_node_id);
                new_node_id
            };
            node_idx = next_idx;
        }

        match self.nodes[node_idx].entry {
            Some(existing) => Err(existing),
            None => {
                self.nodes[node_idx].entry = Some(entry);
                Ok(())
            }
        }
    }

    /// Exact lookup of a whole key.
    pub fn get(&self, key: &str) -> Option<EntryId> {
        let mut node_idx = 0;
        for ch in key.chars() {
            node_idx = *self.nodes[node_idx].children.get(&ch)?;
        }
        self.nodes[node_idx].entry
    }

    /// Walks `input` from its start and returns the deepest entry passed,
    /// with the number of chars its key spans.
    /// O(m) where m is the longest key length.
    pub fn longest_prefix(&self, input: &[char]) -> Option<(EntryId, usize)> {
        let mut node_idx = 0;
        let mut best = None;
        for (depth, ch) in input.iter().enumerate() {
            match self.nodes[node_idx].children.get(ch) {
                Some(&next_idx) => node_idx = next_idx,
                None => break,
            }
            if let Some(entry) = self.nodes[node_idx].entry {
                best = Some((entry, depth + 1));
            }
        }
        best
    }
}

impl Default for PatternTrie {
    fn default() -> Self {
        Self::new()
    }
}
