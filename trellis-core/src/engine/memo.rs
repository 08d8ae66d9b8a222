//! Memoization Table
//!
//! Maps each resolved vertex to its computed value.
//!
//! # Invariants
//!
//! Once a vertex has an entry, the entry is never recomputed or overwritten.
//! Every write path goes through [`MemoTable::insert_once`], which keeps the
//! first value it sees.
//!
//! Entries iterate in the order they were finalized. Because a vertex is only
//! finalized after all of its dependencies, every dependency appears before
//! its dependents.

use std::fmt::{self, Debug};

use indexmap::map::Entry;
use indexmap::IndexMap;
use serde::Serialize;

use crate::graph::Vertex;

/// Resolved values, keyed by vertex.
#[derive(Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct MemoTable<K: Vertex, V> {
    values: IndexMap<K, V>,
}

impl<K: Vertex, V> MemoTable<K, V> {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            values: IndexMap::new(),
        }
    }

    /// Get the value for a vertex, if resolved.
    pub fn get(&self, vertex: &K) -> Option<&V> {
        self.values.get(vertex)
    }

    /// Check if a vertex has been resolved.
    pub fn contains(&self, vertex: &K) -> bool {
        self.values.contains_key(vertex)
    }

    /// Record a value unless the vertex already has one.
    ///
    /// Returns `true` if the value was stored.
    pub fn insert_once(&mut self, vertex: K, value: V) -> bool {
        match self.values.entry(vertex) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(value);
                true
            }
        }
    }

    /// Fold another table into this one, keeping existing entries.
    ///
    /// Returns the number of vertices that were new to this table.
    pub fn merge(&mut self, other: MemoTable<K, V>) -> usize {
        let mut added = 0;
        for (vertex, value) in other.values {
            if self.insert_once(vertex, value) {
                added += 1;
            }
        }
        added
    }

    /// Take the value for a vertex out of the table.
    pub fn into_value(mut self, vertex: &K) -> Option<V> {
        self.values.swap_remove(vertex)
    }

    /// Iterate over resolved vertices in finalization order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.values.iter()
    }

    /// Iterate over resolved vertices in finalization order.
    pub fn vertices(&self) -> impl Iterator<Item = &K> {
        self.values.keys()
    }

    /// Get the number of resolved vertices.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if nothing has been resolved.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Dump the table as JSON for diagnostics.
    ///
    /// Identifiers must serialize as JSON object keys (strings or integers).
    pub fn to_json(&self) -> serde_json::Result<serde_json::Value>
    where
        K: Serialize,
        V: Serialize,
    {
        serde_json::to_value(self)
    }
}

impl<K: Vertex, V> Default for MemoTable<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Vertex, V: Debug> Debug for MemoTable<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.values.iter()).finish()
    }
}
