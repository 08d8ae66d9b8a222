//! Traversal Engine
//!
//! This module walks a graph definition from a starting vertex, computing
//! every vertex the start transitively needs.
//!
//! # Overview
//!
//! - [`Traversal`] performs one stack-based walk and returns a [`MemoTable`]
//! - [`MemoTable`] holds resolved values and never overwrites an entry
//! - [`GraphError`] reports unknown vertices, cycles and malformed nodes,
//!   each with the vertex chain that led to it
//!
//! The engine never recovers from a structural error. Deciding what to do
//! with a failure is left to the evaluators in [`crate::eval`].

mod error;
mod memo;
mod traversal;

pub use error::{ErrorKind, GraphError, Result};
pub use memo::MemoTable;
pub use traversal::Traversal;
