//! Graph Definition
//!
//! This module defines the caller-supplied description of a computation
//! graph: a mapping from vertex identifiers to node descriptors.
//!
//! # Overview
//!
//! Each vertex names one computation. Its node descriptor carries:
//!
//! - An ordered list of the vertices it depends on
//! - A combinator that turns the resolved dependency values into its own value
//!
//! Edges are declared explicitly as data. The engine never inspects a
//! combinator to discover what it reads, so the graph structure is
//! independent of how the combinator happens to name its arguments.
//!
//! # Design Decisions
//!
//! 1. The graph is immutable from the engine's point of view. Evaluators
//!    share it through an `Arc`.
//!
//! 2. Vertices are kept in insertion order. Eager evaluation walks them in
//!    that order, so construction is deterministic.

mod definition;
mod node;

use std::fmt::Debug;
use std::hash::Hash;

pub use definition::Graph;
pub use node::{Combinator, Node};

/// Bound for anything usable as a vertex identifier.
///
/// Identifiers are opaque tokens. The engine hashes them, compares them and
/// clones them into its work stack and diagnostic traces.
pub trait Vertex: Eq + Hash + Clone + Debug {}

impl<T> Vertex for T where T: Eq + Hash + Clone + Debug {}
