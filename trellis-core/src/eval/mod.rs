//! Evaluation Strategies
//!
//! Evaluators wrap the traversal engine and decide when values are computed
//! and what happens to structural errors.
//!
//! # Strategies
//!
//! ## Lazy
//!
//! [`LazyGraph`] computes nothing up front. Every request runs a fresh
//! traversal from the requested vertex and throws the memoization table away
//! afterwards. This favors freshness: no state survives between requests.
//!
//! ## Eager
//!
//! [`EagerGraph`] evaluates every vertex when it is bound and answers
//! requests from the accumulated table. This favors reuse: nothing is
//! computed after construction.
//!
//! # Errors
//!
//! Neither evaluator propagates a failure from [`Evaluator::value`]. Failures
//! are logged through `tracing` and the caller sees `None`.

mod eager;
mod lazy;

use std::sync::Arc;

use crate::graph::{Graph, Vertex};

pub use eager::EagerGraph;
pub use lazy::LazyGraph;

/// When vertex values are computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Strategy {
    /// Compute on request.
    #[default]
    Lazy,

    /// Compute everything when the graph is bound.
    Eager,
}

impl Strategy {
    /// Check if this strategy computes everything up front.
    pub fn is_eager(self) -> bool {
        self == Strategy::Eager
    }

    /// Bind a graph using this strategy.
    pub fn bind<K, V>(self, graph: impl Into<Arc<Graph<K, V>>>) -> Box<dyn Evaluator<K, V>>
    where
        K: Vertex + 'static,
        V: Clone + 'static,
    {
        let graph: Arc<Graph<K, V>> = graph.into();
        match self {
            Strategy::Lazy => Box::new(LazyGraph::bind(graph)),
            Strategy::Eager => Box::new(EagerGraph::bind(&*graph)),
        }
    }
}

/// Answers value requests for a bound graph.
pub trait Evaluator<K, V> {
    /// Get the value of a vertex, or `None` if it could not be computed.
    fn value(&self, vertex: &K) -> Option<V>;

    /// Get the strategy this evaluator implements.
    fn strategy(&self) -> Strategy;
}
