//! Trellis Core
//!
//! This crate evaluates directed graphs of named computations. Each vertex's
//! value is derived from the values of the vertices it depends on.
//! It implements:
//!
//! - Explicit graph definitions (ordered dependencies plus a combinator)
//! - A stack-based traversal engine with memoization and cycle detection
//! - Lazy and eager evaluation strategies on top of the engine
//!
//! # Architecture
//!
//! The crate is organized into three modules:
//!
//! - `graph`: Vertex identifiers, node descriptors and the graph container
//! - `engine`: The traversal engine, memoization table and structural errors
//! - `eval`: Lazy and eager evaluators behind a common `Evaluator` trait
//!
//! # Example
//!
//! ```rust
//! use trellis_core::eval::{EagerGraph, Evaluator, LazyGraph};
//! use trellis_core::graph::{Graph, Node};
//!
//! let graph: Graph<&str, i64> = Graph::new()
//!     .with("n", Node::constant(3))
//!     .with("m", Node::map("n", |n| *n))
//!     .with("v", Node::map("m", |m| m * m));
//!
//! // Computed on request
//! let lazy = LazyGraph::bind(graph.clone());
//! assert_eq!(lazy.value(&"v"), Some(9));
//!
//! // Computed up front
//! let eager = EagerGraph::bind(&graph);
//! assert_eq!(eager.value(&"v"), Some(9));
//! ```

pub mod engine;
pub mod eval;
pub mod graph;

pub use engine::{ErrorKind, GraphError, MemoTable, Traversal};
pub use eval::{EagerGraph, Evaluator, LazyGraph, Strategy};
pub use graph::{Graph, Node, Vertex};
