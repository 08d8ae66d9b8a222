//! Traversal Engine
//!
//! Resolves a vertex and everything it transitively depends on.
//!
//! # Algorithm
//!
//! The walk uses an explicit work stack instead of recursion, so call depth
//! does not grow with graph depth:
//!
//! 1. Pop a vertex. Skip it if it is already memoized.
//! 2. Fail with `UnknownVertex` if the graph has no descriptor for it.
//! 3. Fail with `InvalidNode` if its declared arity disagrees with its
//!    dependency list.
//! 4. Fail with `CyclicDependency` if any dependency is on the active path.
//! 5. If some dependencies are unresolved, push the vertex back, mark it
//!    active, then push the unresolved dependencies on top of it.
//! 6. Otherwise run the combinator, memoize the result and leave the path.
//!
//! A vertex can be popped several times before it is finalized; each
//! deferral simulates one level of recursion.
//!
//! # Cycle Detection
//!
//! The active path holds exactly the deferred vertices that are still waiting
//! on a dependency, which is the ancestor chain of whatever is on top of the
//! stack. A cycle is reported when a vertex depends on one of its own
//! ancestors. Memoized vertices are never on the path, and a memoized vertex
//! has an acyclic dependency closure, so skipping them cannot hide a cycle.

use std::collections::HashSet;

use smallvec::SmallVec;
use tracing::{debug, trace};

use super::error::{GraphError, Result};
use super::memo::MemoTable;
use crate::graph::{Graph, Vertex};

/// A single-threaded walk over a borrowed graph.
///
/// The engine holds no state between runs. Each call to [`Traversal::run`]
/// builds its own active path and memoization table.
#[derive(Debug)]
pub struct Traversal<'g, K, V> {
    graph: &'g Graph<K, V>,
}

impl<'g, K: Vertex, V: Clone> Traversal<'g, K, V> {
    /// Create a traversal over the given graph.
    pub fn new(graph: &'g Graph<K, V>) -> Self {
        Self { graph }
    }

    /// Evaluate `start` against `graph` in one call.
    pub fn evaluate(graph: &'g Graph<K, V>, start: &K) -> Result<MemoTable<K, V>, K> {
        Self::new(graph).run(start)
    }

    /// Compute `start` and every vertex it transitively requires.
    ///
    /// On success the returned table contains `start` plus all of its
    /// dependencies, in finalization order.
    pub fn run(&self, start: &K) -> Result<MemoTable<K, V>, K> {
        let mut table = MemoTable::new();
        let mut active: HashSet<K> = HashSet::new();
        let mut stack: Vec<K> = vec![start.clone()];

        while let Some(vertex) = stack.pop() {
            if table.contains(&vertex) {
                continue;
            }
            trace!(?vertex, depth = stack.len(), "visiting vertex");

            let Some(node) = self.graph.get(&vertex) else {
                stack.push(vertex.clone());
                return Err(fail(GraphError::UnknownVertex {
                    vertex,
                    trace: stack,
                }));
            };

            if let Some(expected) = node.arity_mismatch() {
                return Err(fail(GraphError::InvalidNode {
                    declared: node.dependencies().len(),
                    vertex,
                    expected,
                }));
            }

            let dependencies = node.dependencies();

            if dependencies.iter().any(|dep| active.contains(dep)) {
                stack.push(vertex.clone());
                stack.extend(dependencies.iter().cloned());
                return Err(fail(GraphError::CyclicDependency {
                    vertex,
                    trace: stack,
                }));
            }

            let resolved: Option<SmallVec<[V; 4]>> = dependencies
                .iter()
                .map(|dep| table.get(dep).cloned())
                .collect();

            match resolved {
                Some(args) => {
                    let value = node.apply(&args);
                    active.remove(&vertex);
                    trace!(?vertex, "vertex resolved");
                    table.insert_once(vertex, value);
                }
                None => {
                    active.insert(vertex.clone());
                    stack.push(vertex);
                    // Reversed so the first declared dependency is popped first.
                    stack.extend(
                        dependencies
                            .iter()
                            .rev()
                            .filter(|dep| !table.contains(dep))
                            .cloned(),
                    );
                }
            }
        }

        Ok(table)
    }
}

fn fail<K: Vertex>(error: GraphError<K>) -> GraphError<K> {
    debug!(%error, "traversal failed");
    error
}
