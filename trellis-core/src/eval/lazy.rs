//! Lazy Evaluation
//!
//! Computes a vertex only when it is requested.

use std::fmt::{self, Debug};
use std::sync::Arc;

use tracing::error;

use super::{Evaluator, Strategy};
use crate::engine::{GraphError, Result, Traversal};
use crate::graph::{Graph, Vertex};

/// Evaluates vertices on demand.
///
/// Each request runs its own traversal and discards the memoization table
/// when done, so repeated requests recompute from scratch.
pub struct LazyGraph<K, V> {
    graph: Arc<Graph<K, V>>,
}

impl<K: Vertex, V: Clone> LazyGraph<K, V> {
    /// Bind a graph. No computation happens here.
    pub fn bind(graph: impl Into<Arc<Graph<K, V>>>) -> Self {
        Self {
            graph: graph.into(),
        }
    }

    /// Get the bound graph.
    pub fn graph(&self) -> &Graph<K, V> {
        &self.graph
    }

    /// Compute a vertex, returning the structural error on failure.
    pub fn try_value(&self, vertex: &K) -> Result<V, K> {
        Traversal::evaluate(self.graph(), vertex)?
            .into_value(vertex)
            .ok_or_else(|| GraphError::UnknownVertex {
                vertex: vertex.clone(),
                trace: vec![vertex.clone()],
            })
    }
}

impl<K: Vertex, V: Clone> Evaluator<K, V> for LazyGraph<K, V> {
    fn value(&self, vertex: &K) -> Option<V> {
        match self.try_value(vertex) {
            Ok(value) => Some(value),
            Err(err) => {
                error!(?vertex, error = %err, "lazy evaluation failed");
                None
            }
        }
    }

    fn strategy(&self) -> Strategy {
        Strategy::Lazy
    }
}

impl<K, V> Clone for LazyGraph<K, V> {
    fn clone(&self) -> Self {
        Self {
            graph: Arc::clone(&self.graph),
        }
    }
}

impl<K: Debug, V> Debug for LazyGraph<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazyGraph")
            .field("graph", &self.graph)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::ErrorKind;
    use crate::graph::Node;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn bind_computes_nothing() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let graph: Graph<&str, i64> = Graph::new().with(
            "x",
            Node::source(move || {
                counter.fetch_add(1, Ordering::SeqCst);
                1
            }),
        );

        let lazy = LazyGraph::bind(graph);
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        assert_eq!(lazy.value(&"x"), Some(1));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn every_request_recomputes() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let graph: Graph<&str, i64> = Graph::new()
            .with(
                "x",
                Node::source(move || {
                    counter.fetch_add(1, Ordering::SeqCst);
                    5
                }),
            )
            .with("y", Node::map("x", |x| x * 2));

        let lazy = LazyGraph::bind(graph);
        assert_eq!(lazy.value(&"y"), Some(10));
        assert_eq!(lazy.value(&"y"), Some(10));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn failures_are_isolated_per_request() {
        let graph: Graph<&str, i64> = Graph::new()
            .with("ok", Node::constant(1))
            .with("broken", Node::map("ghost", |g| *g));

        let lazy = LazyGraph::bind(graph);
        assert_eq!(lazy.value(&"broken"), None);
        assert_eq!(lazy.value(&"ok"), Some(1));

        let error = lazy.try_value(&"broken").unwrap_err();
        assert_eq!(error.kind(), ErrorKind::UnknownVertex);
        assert_eq!(error.vertex(), &"ghost");
    }
}
