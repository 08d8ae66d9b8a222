//! Error types for graph traversal.

use std::fmt::Debug;

use thiserror::Error;

/// Result alias for traversal operations.
pub type Result<T, K> = std::result::Result<T, GraphError<K>>;

/// The category of a structural failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A vertex was requested or depended on but never declared.
    UnknownVertex,

    /// A vertex's dependencies loop back onto the active evaluation path.
    CyclicDependency,

    /// A node's combinator arity disagrees with its dependency list.
    InvalidNode,
}

/// Structural errors detected while walking a graph.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError<K: Debug> {
    /// No descriptor exists for a vertex.
    #[error("can't find vertex {vertex:?} in graph (reached via {})", chain(.trace))]
    UnknownVertex {
        /// The missing vertex.
        vertex: K,
        /// Work stack at the moment of failure, missing vertex last.
        trace: Vec<K>,
    },

    /// A dependency is already pending on the current path.
    #[error("cyclic dependency detected at {vertex:?}: {}", chain(.trace))]
    CyclicDependency {
        /// The vertex whose dependencies closed the cycle.
        vertex: K,
        /// Work stack, then the vertex, then its declared dependencies.
        trace: Vec<K>,
    },

    /// A node cannot be invoked with its declared dependencies.
    #[error("invalid node {vertex:?}: combinator expects {expected} arguments, {declared} dependencies declared")]
    InvalidNode {
        /// The malformed vertex.
        vertex: K,
        /// Arity the combinator declared.
        expected: usize,
        /// Number of dependencies the node lists.
        declared: usize,
    },
}

impl<K: Debug> GraphError<K> {
    /// Get the failure category.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UnknownVertex { .. } => ErrorKind::UnknownVertex,
            Self::CyclicDependency { .. } => ErrorKind::CyclicDependency,
            Self::InvalidNode { .. } => ErrorKind::InvalidNode,
        }
    }

    /// Get the vertex the failure is attributed to.
    pub fn vertex(&self) -> &K {
        match self {
            Self::UnknownVertex { vertex, .. }
            | Self::CyclicDependency { vertex, .. }
            | Self::InvalidNode { vertex, .. } => vertex,
        }
    }

    /// Get the vertex chain that led to the failure.
    ///
    /// Empty for `InvalidNode`, which is a property of a single node.
    pub fn trace(&self) -> &[K] {
        match self {
            Self::UnknownVertex { trace, .. } | Self::CyclicDependency { trace, .. } => trace,
            Self::InvalidNode { .. } => &[],
        }
    }
}

fn chain<K: Debug>(trace: &[K]) -> String {
    trace
        .iter()
        .map(|vertex| format!("{vertex:?}"))
        .collect::<Vec<_>>()
        .join(" -> ")
}
