//! Visited tracking for the two traversal templates.
//!
//! - `VisitedSet`: one set per top-level call. A vertex is visited at most once,
//!   ever, which is what reachability-style queries need.
//! - `PathSet`: marks only the vertices on the current DFS branch, plus the
//!   vertices whose every continuation was already explored without success.
//!
//! Both key on `VertexId`, i.e. on identity, never on the carried value.

use crate::graph::vertex::VertexId;
use crate::graph::vertex_set::VertexSet;

/// Global visited state for a single traversal.
pub(crate) struct VisitedSet<'brand> {
    seen: VertexSet<'brand>,
}

impl<'brand> VisitedSet<'brand> {
    #[inline]
    pub(crate) fn new(vertex_count: usize) -> Self {
        Self {
            seen: VertexSet::with_capacity(vertex_count),
        }
    }

    /// Returns `true` iff this call observed the vertex as not-yet-visited and marks it visited.
    #[inline(always)]
    pub(crate) fn try_visit(&mut self, id: VertexId<'brand>) -> bool {
        self.seen.insert(id)
    }

    #[inline(always)]
    pub(crate) fn is_visited(&self, id: VertexId<'brand>) -> bool {
        self.seen.contains(id)
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.seen.len()
    }

    /// Hands the visited set back as a result.
    #[inline]
    pub(crate) fn into_set(self) -> VertexSet<'brand> {
        self.seen
    }
}

/// Path-local visited state for searches whose answer depends on the route taken.
pub(crate) struct PathSet<'brand> {
    on_path: VertexSet<'brand>,
    exhausted: VertexSet<'brand>,
}

impl<'brand> PathSet<'brand> {
    #[inline]
    pub(crate) fn new(vertex_count: usize) -> Self {
        Self {
            on_path: VertexSet::with_capacity(vertex_count),
            exhausted: VertexSet::with_capacity(vertex_count),
        }
    }

    /// Pushes `id` onto the current branch.
    #[inline(always)]
    pub(crate) fn enter(&mut self, id: VertexId<'brand>) {
        self.on_path.insert(id);
    }

    /// Pops `id` off the current branch after all its continuations failed.
    #[inline(always)]
    pub(crate) fn leave(&mut self, id: VertexId<'brand>) {
        self.on_path.remove(id);
        self.exhausted.insert(id);
    }

    #[inline(always)]
    pub(crate) fn is_on_path(&self, id: VertexId<'brand>) -> bool {
        self.on_path.contains(id)
    }

    /// Returns `true` if `id` may still be entered: not on the branch, not known dead.
    #[inline(always)]
    pub(crate) fn is_open(&self, id: VertexId<'brand>) -> bool {
        !self.on_path.contains(id) && !self.exhausted.contains(id)
    }

    #[inline]
    pub(crate) fn depth(&self) -> usize {
        self.on_path.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn try_visit_reports_first_visit_only() {
        let mut visited = VisitedSet::new(4);
        let a = VertexId::from_index(2);
        assert!(!visited.is_visited(a));
        assert!(visited.try_visit(a));
        assert!(!visited.try_visit(a));
        assert!(visited.is_visited(a));
        assert_eq!(visited.len(), 1);
        assert_eq!(visited.into_set().len(), 1);
    }

    #[test]
    fn leaving_a_vertex_closes_it() {
        let mut path = PathSet::new(4);
        let a = VertexId::from_index(0);
        let b = VertexId::from_index(1);

        path.enter(a);
        path.enter(b);
        assert_eq!(path.depth(), 2);
        assert!(path.is_on_path(b));
        assert!(!path.is_open(b));

        path.leave(b);
        assert_eq!(path.depth(), 1);
        assert!(!path.is_on_path(b));
        assert!(!path.is_open(b));
        assert!(path.is_on_path(a));
    }
}
