//! Graph Container
//!
//! Holds the node descriptor for every vertex, indexed by identifier.

use std::fmt::{self, Debug};

use indexmap::IndexMap;

use super::node::Node;
use super::Vertex;

/// An immutable-by-convention mapping from vertex to node descriptor.
///
/// Iteration follows insertion order.
pub struct Graph<K, V> {
    nodes: IndexMap<K, Node<K, V>>,
}

impl<K: Vertex, V> Graph<K, V> {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self {
            nodes: IndexMap::new(),
        }
    }

    /// Add a vertex to the graph.
    ///
    /// Returns the previous descriptor if the identifier was already used.
    /// The replaced vertex keeps its original position.
    pub fn insert(&mut self, vertex: K, node: Node<K, V>) -> Option<Node<K, V>> {
        self.nodes.insert(vertex, node)
    }

    /// Builder form of [`Graph::insert`].
    pub fn with(mut self, vertex: K, node: Node<K, V>) -> Self {
        self.insert(vertex, node);
        self
    }

    /// Get the descriptor for a vertex.
    pub fn get(&self, vertex: &K) -> Option<&Node<K, V>> {
        self.nodes.get(vertex)
    }

    /// Check if the graph declares a vertex.
    pub fn contains(&self, vertex: &K) -> bool {
        self.nodes.contains_key(vertex)
    }

    /// Iterate over every declared vertex in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = &K> {
        self.nodes.keys()
    }

    /// Iterate over every vertex and its descriptor in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &Node<K, V>)> {
        self.nodes.iter()
    }

    /// Get the number of declared vertices.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the graph declares no vertices.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl<K: Vertex, V> Default for Graph<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Vertex, V> FromIterator<(K, Node<K, V>)> for Graph<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, Node<K, V>)>>(iter: I) -> Self {
        Self {
            nodes: iter.into_iter().collect(),
        }
    }
}

impl<K: Vertex, V> Extend<(K, Node<K, V>)> for Graph<K, V> {
    fn extend<I: IntoIterator<Item = (K, Node<K, V>)>>(&mut self, iter: I) {
        self.nodes.extend(iter);
    }
}

impl<K: Clone, V> Clone for Graph<K, V> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes.clone(),
        }
    }
}

impl<K: Debug, V> Debug for Graph<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.nodes.iter()).finish()
    }
}
