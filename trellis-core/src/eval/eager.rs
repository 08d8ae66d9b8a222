//! Eager Evaluation
//!
//! Computes every vertex when the graph is bound.
//!
//! # Failure Policy
//!
//! The first error aborts eager construction. Vertices are visited in the
//! graph's insertion order; once a traversal fails, no further vertex is
//! attempted and the table accumulated so far becomes final. Values from the
//! failing traversal itself are discarded. Vertices that were never reached
//! report `None`.

use std::fmt::{self, Debug};

use tracing::{debug, error};

use super::{Evaluator, Strategy};
use crate::engine::{GraphError, MemoTable, Traversal};
use crate::graph::{Graph, Vertex};

/// Evaluates every vertex up front and serves lookups from the result.
pub struct EagerGraph<K: Vertex, V> {
    values: MemoTable<K, V>,
    failure: Option<GraphError<K>>,
}

impl<K: Vertex, V: Clone> EagerGraph<K, V> {
    /// Evaluate every vertex of `graph`.
    ///
    /// Each traversal's table is merged into the accumulated one without
    /// overwriting existing entries. A vertex already resolved by an earlier
    /// traversal is not used as a new starting point.
    pub fn bind(graph: &Graph<K, V>) -> Self {
        let traversal = Traversal::new(graph);
        let mut values = MemoTable::new();
        let mut failure = None;

        for vertex in graph.vertices() {
            if values.contains(vertex) {
                continue;
            }
            match traversal.run(vertex) {
                Ok(table) => {
                    let added = values.merge(table);
                    debug!(?vertex, added, "merged eager traversal");
                }
                Err(err) => {
                    error!(?vertex, error = %err, "eager construction aborted");
                    failure = Some(err);
                    break;
                }
            }
        }

        Self { values, failure }
    }
}

impl<K: Vertex, V> EagerGraph<K, V> {
    /// Get the accumulated table.
    pub fn values(&self) -> &MemoTable<K, V> {
        &self.values
    }

    /// Get the error that aborted construction, if any.
    pub fn failure(&self) -> Option<&GraphError<K>> {
        self.failure.as_ref()
    }

    /// Check if every vertex was evaluated.
    pub fn is_complete(&self) -> bool {
        self.failure.is_none()
    }
}

impl<K: Vertex, V: Clone> Evaluator<K, V> for EagerGraph<K, V> {
    fn value(&self, vertex: &K) -> Option<V> {
        self.values.get(vertex).cloned()
    }

    fn strategy(&self) -> Strategy {
        Strategy::Eager
    }
}

impl<K: Vertex, V: Debug> Debug for EagerGraph<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EagerGraph")
            .field("values", &self.values)
            .field("failure", &self.failure)
            .finish()
    }
}
