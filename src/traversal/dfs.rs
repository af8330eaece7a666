//! The global-dedup depth-first template.
//!
//! Every reachability-style query is a fold over this iterator. The walk uses
//! an explicit stack, so a long chain costs heap, not call-stack frames.

use crate::graph::access::visited::VisitedSet;
use crate::graph::{VertexGraph, VertexId, VertexSet};

/// An iterator for Depth-First Search (DFS).
///
/// Yields every vertex reachable from the start exactly once, in pre-order.
/// Neighbours are explored in edge order. A vertex is checked against the
/// visited set when it is popped, so shared sub-structure, cycles and
/// self-loops are all skipped the second time round.
pub struct Dfs<'g, 'brand, T> {
    graph: &'g VertexGraph<'brand, T>,
    visited: VisitedSet<'brand>,
    stack: Vec<VertexId<'brand>>,
}

impl<'g, 'brand, T> Dfs<'g, 'brand, T> {
    /// Creates a new DFS iterator starting from `start`.
    ///
    /// An absent start yields nothing.
    pub fn new(graph: &'g VertexGraph<'brand, T>, start: Option<VertexId<'brand>>) -> Self {
        Self {
            graph,
            visited: VisitedSet::new(graph.vertex_count()),
            stack: start.into_iter().collect(),
        }
    }

    /// Number of vertices yielded so far.
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    /// Runs the walk to completion and returns every vertex it reached.
    pub fn into_visited(mut self) -> VertexSet<'brand> {
        self.by_ref().for_each(drop);
        self.visited.into_set()
    }
}

impl<'brand, T> Iterator for Dfs<'_, 'brand, T> {
    type Item = VertexId<'brand>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let u = self.stack.pop()?;
            if !self.visited.try_visit(u) {
                continue;
            }

            // Reverse push so the first edge is explored first.
            for &v in self.graph.neighbors(u).iter().rev() {
                if !self.visited.is_visited(v) {
                    self.stack.push(v);
                }
            }

            return Some(u);
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.graph.vertex_count() - self.visited.len();
        (0, Some(remaining))
    }
}

impl<T> core::iter::FusedIterator for Dfs<'_, '_, T> {}
