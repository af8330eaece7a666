//! Strictly increasing path search.
//!
//! This is the one query that cannot share the global visited set: whether a
//! vertex helps depends on the value we arrive with, so "seen before" is not
//! a valid reason to skip it. The search instead tracks which vertices are on
//! the current branch, and unmarks them on backtrack.
//!
//! A vertex that has been fully explored and popped is also recorded as
//! exhausted. From a vertex `v`, the continuations that are allowed depend
//! only on `v`'s own value (the next step must be larger), never on how `v`
//! was reached, so a vertex that failed once fails on every later branch too.
//! Skipping it keeps the search linear in the size of the graph.

use crate::error::{Endpoint, GraphError};
use crate::graph::access::visited::PathSet;
use crate::graph::{VertexGraph, VertexId};

/// One level of the explicit DFS stack.
#[derive(Clone, Copy)]
struct Frame<'brand> {
    vertex: VertexId<'brand>,
    /// Index of the next edge of `vertex` to try.
    cursor: usize,
}

/// Depth-first search for a path whose values strictly increase at every step.
///
/// Uses an explicit stack of `(vertex, next-edge)` frames, so the frames on
/// the stack are always exactly the current candidate path.
pub struct IncreasingPathSearch<'g, 'brand, T> {
    graph: &'g VertexGraph<'brand, T>,
    paths: PathSet<'brand>,
    stack: Vec<Frame<'brand>>,
}

impl<'g, 'brand, T: Ord> IncreasingPathSearch<'g, 'brand, T> {
    /// Prepares a search over `graph`.
    pub fn new(graph: &'g VertexGraph<'brand, T>) -> Self {
        Self {
            graph,
            paths: PathSet::new(graph.vertex_count()),
            stack: Vec::new(),
        }
    }

    /// Returns the first strictly increasing path from `start` to `end`, both
    /// included, or `None` if there is none.
    ///
    /// `start == end` is the trivial path `[start]`.
    pub fn find(
        mut self,
        start: VertexId<'brand>,
        end: VertexId<'brand>,
    ) -> Option<Vec<VertexId<'brand>>> {
        let graph = self.graph;

        self.push(start);
        if start == end {
            return Some(self.current_path());
        }

        while let Some(frame) = self.stack.last_mut() {
            let u = frame.vertex;
            let next = graph.neighbors(u).get(frame.cursor).copied();

            match next {
                Some(v) => {
                    frame.cursor += 1;
                    if graph.value(v) > graph.value(u) && self.paths.is_open(v) {
                        self.push(v);
                        if v == end {
                            return Some(self.current_path());
                        }
                    }
                }
                None => {
                    self.stack.pop();
                    self.paths.leave(u);
                }
            }
        }

        None
    }

    fn push(&mut self, vertex: VertexId<'brand>) {
        debug_assert!(!self.paths.is_on_path(vertex), "increasing path revisited {vertex:?}");
        self.paths.enter(vertex);
        self.stack.push(Frame { vertex, cursor: 0 });
    }

    fn current_path(&self) -> Vec<VertexId<'brand>> {
        let mut path = Vec::with_capacity(self.paths.depth());
        path.extend(self.stack.iter().map(|frame| frame.vertex));
        path
    }
}

/// Returns `true` iff a strictly increasing directed path leads from `start` to `end`.
///
/// Every vertex counts as reaching itself through the zero-edge path.
///
/// # Errors
/// Returns [`GraphError::MissingEndpoint`] if either endpoint is `None`.
/// A missing endpoint is never reported as `Ok(false)`.
///
/// ```rust
/// use graphwalk::{traversal, Endpoint, GraphError, VertexGraph};
///
/// VertexGraph::new(|mut graph| {
///     let a = graph.add_vertex(5);
///     let b = graph.add_vertex(10);
///     graph.add_edge(a, b);
///
///     assert_eq!(traversal::has_strictly_increasing_path(&graph, Some(a), Some(b)), Ok(true));
///     assert_eq!(traversal::has_strictly_increasing_path(&graph, Some(b), Some(a)), Ok(false));
///     assert_eq!(
///         traversal::has_strictly_increasing_path(&graph, Some(a), None),
///         Err(GraphError::MissingEndpoint(Endpoint::End)),
///     );
/// });
/// ```
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(level = "debug", skip_all, fields(start = ?start, end = ?end))
)]
pub fn has_strictly_increasing_path<'brand, T: Ord>(
    graph: &VertexGraph<'brand, T>,
    start: Option<VertexId<'brand>>,
    end: Option<VertexId<'brand>>,
) -> Result<bool, GraphError> {
    increasing_path(graph, start, end).map(|path| path.is_some())
}

/// Like [`has_strictly_increasing_path`], but returns the path it found.
///
/// # Errors
/// Returns [`GraphError::MissingEndpoint`] if either endpoint is `None`.
pub fn increasing_path<'brand, T: Ord>(
    graph: &VertexGraph<'brand, T>,
    start: Option<VertexId<'brand>>,
    end: Option<VertexId<'brand>>,
) -> Result<Option<Vec<VertexId<'brand>>>, GraphError> {
    let start = start.ok_or(GraphError::MissingEndpoint(Endpoint::Start))?;
    let end = end.ok_or(GraphError::MissingEndpoint(Endpoint::End))?;

    let path = IncreasingPathSearch::new(graph).find(start, end);

    #[cfg(feature = "tracing")]
    tracing::trace!(
        found = path.is_some(),
        len = path.as_ref().map_or(0, Vec::len),
        "increasing path search finished"
    );

    Ok(path)
}
