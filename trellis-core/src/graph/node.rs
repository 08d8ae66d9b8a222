//! Node Descriptors
//!
//! This module defines the descriptor stored for every vertex in a graph.

use std::fmt::{self, Debug};
use std::sync::Arc;

use smallvec::SmallVec;

/// The function that produces a vertex's value from its dependencies.
///
/// Arguments arrive in the same order as the node's declared dependencies.
pub type Combinator<V> = Arc<dyn Fn(&[V]) -> V + Send + Sync>;

/// Describes how to compute one vertex.
pub struct Node<K, V> {
    /// Vertices this node reads from, in argument order.
    dependencies: SmallVec<[K; 4]>,

    /// Number of arguments the combinator expects, if it declared one.
    /// `None` means the combinator accepts any number of arguments.
    arity: Option<usize>,

    /// Produces the value.
    combinator: Combinator<V>,
}

impl<K, V> Node<K, V> {
    /// Create a node with a variadic combinator.
    pub fn new<I, F>(dependencies: I, combinator: F) -> Self
    where
        I: IntoIterator<Item = K>,
        F: Fn(&[V]) -> V + Send + Sync + 'static,
    {
        Self {
            dependencies: dependencies.into_iter().collect(),
            arity: None,
            combinator: Arc::new(combinator),
        }
    }

    /// Create a node whose combinator expects exactly `arity` arguments.
    ///
    /// The engine rejects the node with `InvalidNode` if the number of
    /// declared dependencies differs.
    pub fn with_arity<I, F>(dependencies: I, arity: usize, combinator: F) -> Self
    where
        I: IntoIterator<Item = K>,
        F: Fn(&[V]) -> V + Send + Sync + 'static,
    {
        Self {
            arity: Some(arity),
            ..Self::new(dependencies, combinator)
        }
    }

    /// Create a node with no dependencies.
    pub fn source<F>(compute: F) -> Self
    where
        V: 'static,
        F: Fn() -> V + Send + Sync + 'static,
    {
        Self::with_arity([], 0, move |_: &[V]| compute())
    }

    /// Create a node that always yields `value`.
    pub fn constant(value: V) -> Self
    where
        V: Clone + Send + Sync + 'static,
    {
        Self::source(move || value.clone())
    }

    /// Create a node derived from a single dependency.
    pub fn map<F>(dependency: K, compute: F) -> Self
    where
        V: 'static,
        F: Fn(&V) -> V + Send + Sync + 'static,
    {
        Self::with_arity([dependency], 1, move |args: &[V]| compute(&args[0]))
    }

    /// Create a node derived from two dependencies.
    pub fn zip<F>(first: K, second: K, compute: F) -> Self
    where
        V: 'static,
        F: Fn(&V, &V) -> V + Send + Sync + 'static,
    {
        Self::with_arity([first, second], 2, move |args: &[V]| {
            compute(&args[0], &args[1])
        })
    }

    /// Get the declared dependencies, in argument order.
    pub fn dependencies(&self) -> &[K] {
        &self.dependencies
    }

    /// Get the declared arity, if any.
    pub fn arity(&self) -> Option<usize> {
        self.arity
    }

    /// Whether the declared arity disagrees with the dependency list.
    pub fn arity_mismatch(&self) -> Option<usize> {
        self.arity.filter(|&expected| expected != self.dependencies.len())
    }

    /// Check if this node has no dependencies.
    pub fn is_source(&self) -> bool {
        self.dependencies.is_empty()
    }

    /// Run the combinator on already-resolved dependency values.
    pub fn apply(&self, args: &[V]) -> V {
        (self.combinator)(args)
    }
}

impl<K: Clone, V> Clone for Node<K, V> {
    fn clone(&self) -> Self {
        Self {
            dependencies: self.dependencies.clone(),
            arity: self.arity,
            combinator: Arc::clone(&self.combinator),
        }
    }
}

impl<K: Debug, V> Debug for Node<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("dependencies", &self.dependencies)
            .field("arity", &self.arity)
            .finish_non_exhaustive()
    }
}
