//! # `graphwalk` - Depth-first queries over branded vertex graphs
//!
//! A small toolkit for answering reachability-style questions about a directed
//! graph from a given starting vertex. Graphs may contain cycles, self-loops
//! and shared sub-structure; every query terminates and reports each vertex
//! at most once.
//!
//! ## Queries
//!
//! | Query | Absent start | Result |
//! |-------|--------------|--------|
//! | [`traversal::print_vertex_vals`] | emits nothing | each reachable value, once, to a sink |
//! | [`traversal::reachable`] | empty set | every reachable vertex |
//! | [`traversal::max`] | `T::min_value()` | largest reachable value |
//! | [`traversal::leaves`] | empty set | reachable vertices without edges |
//! | [`traversal::has_strictly_increasing_path`] | `Err(MissingEndpoint)` | path existence |
//!
//! ## Identity
//!
//! A graph is only available inside a branded scope, opened with
//! [`VertexGraph::new`]. Handles ([`VertexId`]) carry the scope's brand, so
//! a handle can only be used with the graph that issued it. Every visited set
//! keys on handles, never on values, so two vertices carrying equal values
//! stay distinct.
//!
//! ## Example
//!
//! ```rust
//! use graphwalk::{traversal, VertexGraph};
//!
//! let (values, max) = VertexGraph::new(|mut graph| {
//!     let a = graph.add_vertex(3);
//!     let b = graph.add_vertex(7);
//!     let c = graph.add_vertex(5);
//!     graph.add_edge(a, b);
//!     graph.add_edge(b, c);
//!     graph.add_edge(c, a);
//!
//!     let reached = traversal::reachable(&graph, Some(b));
//!     let mut values: Vec<i32> = reached.iter().map(|id| *graph.value(id)).collect();
//!     values.sort_unstable();
//!     (values, traversal::max(&graph, Some(a)))
//! });
//!
//! assert_eq!(values, vec![3, 5, 7]);
//! assert_eq!(max, 7);
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod error;
pub mod graph;
pub mod traversal;

pub use error::{Endpoint, GraphError};
pub use graph::{GraphDescription, Vertex, VertexGraph, VertexId, VertexSet, VertexSpec};

// Compile-time layout checks.
const _: () = {
    use core::mem;

    // Brands are ZSTs.
    assert!(mem::size_of::<graph::vertex::Brand<'static>>() == 0);

    // `Option<VertexId>` uses the `NonZeroUsize` niche.
    assert!(mem::size_of::<Option<VertexId<'static>>>() == mem::size_of::<usize>());
};
