//! An append-only vertex arena with branded handles.
//!
//! Vertices live in a single `Vec` owned by the graph, and edges are stored as
//! ordered lists of `VertexId`s. A `VertexId<'brand>` is only ever issued by
//! the graph that owns the vertex, and the brand ties it to that graph at the
//! type level:
//! - identity is the handle itself, so two vertices carrying equal values are
//!   still distinct
//! - a handle is always in bounds for the graph that accepts it
//! - traversals borrow the graph immutably, so nothing can change mid-walk
//!
//! ```rust
//! use graphwalk::VertexGraph;
//!
//! let count = VertexGraph::new(|mut graph| {
//!     let a = graph.add_vertex(1);
//!     let b = graph.add_vertex(2);
//!     graph.add_edge(a, b);
//!     graph.add_edge(b, a);
//!     graph.edge_count()
//! });
//! assert_eq!(count, 2);
//! ```

use core::fmt;
use core::marker::PhantomData;
use core::num::NonZeroUsize;

/// Invariant in `'brand`, so two graph scopes never unify to one lifetime.
///
/// Each scope is a fresh `for<'brand>` closure, and every handle and set
/// issued inside it carries this marker.
pub(crate) type Brand<'brand> = PhantomData<fn(&'brand ()) -> &'brand ()>;

/// A handle to a vertex of one particular `VertexGraph`.
///
/// Stored 1-based in a `NonZeroUsize` so `Option<VertexId>` stays one word.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId<'brand> {
    idx: NonZeroUsize,
    _brand: Brand<'brand>,
}

impl<'brand> VertexId<'brand> {
    /// Builds a handle from a 0-based arena index.
    ///
    /// Callers inside the crate must only pass indices that the branded
    /// graph has already issued, or use the handle purely as a set key.
    #[inline(always)]
    pub(crate) fn from_index(index: usize) -> Self {
        Self {
            idx: NonZeroUsize::MIN.saturating_add(index),
            _brand: PhantomData,
        }
    }

    /// Returns the 0-based position of this vertex in insertion order.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.idx.get() - 1
    }
}

impl fmt::Debug for VertexId<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VertexId({})", self.index())
    }
}

/// A vertex: one value and an ordered list of outgoing edges.
///
/// The edge list is `None` until an edge is added or the neighbours are set
/// explicitly. Readers never see the difference: `neighbors` returns an empty
/// slice for both, and both count as leaves.
pub struct Vertex<'brand, T> {
    value: T,
    neighbors: Option<Vec<VertexId<'brand>>>,
}

impl<'brand, T> Vertex<'brand, T> {
    /// Returns the carried value.
    #[inline]
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Returns the outgoing edges in insertion order.
    #[inline]
    pub fn neighbors(&self) -> &[VertexId<'brand>] {
        self.neighbors.as_deref().unwrap_or(&[])
    }

    /// Returns `true` if the vertex has no outgoing edges.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.neighbors().is_empty()
    }

    /// Returns `true` if the edge list was ever initialised, even to empty.
    #[inline]
    pub fn has_edge_list(&self) -> bool {
        self.neighbors.is_some()
    }

    /// Number of outgoing edges, counting duplicates and self-loops.
    #[inline]
    pub fn out_degree(&self) -> usize {
        self.neighbors().len()
    }
}

impl<T: fmt::Debug> fmt::Debug for Vertex<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vertex")
            .field("value", &self.value)
            .field("neighbors", &self.neighbors)
            .finish()
    }
}

/// A directed graph of valued vertices, built by the caller and then queried.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `add_vertex` | \(O(1)\) amortized | Appends to the arena |
/// | `add_edge` | \(O(1)\) amortized | Appends to the source's edge list |
/// | `neighbors` | \(O(1)\) | Borrowed slice, no copy |
/// | `edge_count` | \(O(n)\) | Sums out-degrees |
/// | `find` | \(O(n)\) | Linear scan by value |
///
/// `VertexGraph` is deliberately not `Clone`: a clone would share the brand,
/// and a handle added to one copy would be out of bounds for the other.
pub struct VertexGraph<'brand, T> {
    vertices: Vec<Vertex<'brand, T>>,
    _brand: Brand<'brand>,
}

impl<'brand, T> VertexGraph<'brand, T> {
    /// Creates an empty graph under a fresh brand and runs `f` with it.
    ///
    /// Nothing branded can escape the closure, so the result type `R` must
    /// be independent of the graph (map handles to values before returning).
    pub fn new<F, R>(f: F) -> R
    where
        F: for<'new_brand> FnOnce(VertexGraph<'new_brand, T>) -> R,
    {
        Self::with_capacity(0, f)
    }

    /// Like [`VertexGraph::new`], with room for `capacity` vertices.
    pub fn with_capacity<F, R>(capacity: usize, f: F) -> R
    where
        F: for<'new_brand> FnOnce(VertexGraph<'new_brand, T>) -> R,
    {
        f(VertexGraph {
            vertices: Vec::with_capacity(capacity),
            _brand: PhantomData,
        })
    }

    /// Adds a vertex with an uninitialised edge list and returns its handle.
    pub fn add_vertex(&mut self, value: T) -> VertexId<'brand> {
        let id = VertexId::from_index(self.vertices.len());
        self.vertices.push(Vertex {
            value,
            neighbors: None,
        });
        id
    }

    /// Appends the directed edge `from -> to`.
    ///
    /// Duplicate edges and self-loops are kept as given.
    pub fn add_edge(&mut self, from: VertexId<'brand>, to: VertexId<'brand>) {
        self.vertex_mut(from)
            .neighbors
            .get_or_insert_with(Vec::new)
            .push(to);
    }

    /// Replaces the outgoing edges of `vertex`.
    ///
    /// An empty iterator leaves the vertex with an initialised, empty list.
    pub fn set_neighbors<I>(&mut self, vertex: VertexId<'brand>, neighbors: I)
    where
        I: IntoIterator<Item = VertexId<'brand>>,
    {
        self.vertex_mut(vertex).neighbors = Some(neighbors.into_iter().collect());
    }

    /// Returns the vertex behind a handle.
    #[inline]
    pub fn vertex(&self, id: VertexId<'brand>) -> &Vertex<'brand, T> {
        // In bounds: the brand proves `id` was issued by this arena, which never shrinks.
        &self.vertices[id.index()]
    }

    #[inline]
    fn vertex_mut(&mut self, id: VertexId<'brand>) -> &mut Vertex<'brand, T> {
        &mut self.vertices[id.index()]
    }

    /// Returns the value carried by `id`.
    #[inline]
    pub fn value(&self, id: VertexId<'brand>) -> &T {
        self.vertex(id).value()
    }

    /// Returns the outgoing edges of `id`, empty if none were ever set.
    #[inline]
    pub fn neighbors(&self, id: VertexId<'brand>) -> &[VertexId<'brand>] {
        self.vertex(id).neighbors()
    }

    /// Returns `true` if `id` has no outgoing edges.
    #[inline]
    pub fn is_leaf(&self, id: VertexId<'brand>) -> bool {
        self.vertex(id).is_leaf()
    }

    /// Returns `true` if the edge list of `id` was ever initialised.
    #[inline]
    pub fn has_edge_list(&self, id: VertexId<'brand>) -> bool {
        self.vertex(id).has_edge_list()
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns `true` if no vertex was added yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns the number of edges.
    pub fn edge_count(&self) -> usize {
        self.vertices.iter().map(Vertex::out_degree).sum()
    }

    /// Iterates over all handles in insertion order.
    pub fn vertex_ids(&self) -> impl ExactSizeIterator<Item = VertexId<'brand>> + '_ {
        (0..self.vertices.len()).map(VertexId::from_index)
    }

    /// Iterates over `(handle, vertex)` pairs in insertion order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (VertexId<'brand>, &Vertex<'brand, T>)> + '_ {
        self.vertices
            .iter()
            .enumerate()
            .map(|(idx, vertex)| (VertexId::from_index(idx), vertex))
    }

    /// Returns the first vertex carrying `value`.
    ///
    /// A lookup helper for building and inspecting graphs; traversals never
    /// compare values to decide identity.
    pub fn find(&self, value: &T) -> Option<VertexId<'brand>>
    where
        T: PartialEq,
    {
        self.vertices
            .iter()
            .position(|vertex| vertex.value == *value)
            .map(VertexId::from_index)
    }

    /// Collects the values behind a set of handles.
    pub fn values_of<'a, I>(&'a self, ids: I) -> Vec<&'a T>
    where
        I: IntoIterator<Item = VertexId<'brand>>,
    {
        ids.into_iter().map(|id| self.value(id)).collect()
    }
}

impl<T: fmt::Debug> fmt::Debug for VertexGraph<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_handle_is_one_word() {
        assert_eq!(
            core::mem::size_of::<Option<VertexId<'static>>>(),
            core::mem::size_of::<usize>()
        );
    }

    #[test]
    fn new_vertex_has_no_edge_list() {
        VertexGraph::new(|mut graph| {
            let a = graph.add_vertex("a");
            assert!(!graph.has_edge_list(a));
            assert!(graph.is_leaf(a));
            assert!(graph.neighbors(a).is_empty());
            assert_eq!(a.index(), 0);
        });
    }

    #[test]
    fn set_neighbors_initialises_empty_list() {
        VertexGraph::new(|mut graph| {
            let a = graph.add_vertex(1);
            graph.set_neighbors(a, []);
            assert!(graph.has_edge_list(a));
            assert!(graph.is_leaf(a));
        });
    }

    #[test]
    fn edges_keep_order_duplicates_and_self_loops() {
        VertexGraph::new(|mut graph| {
            let a = graph.add_vertex(1);
            let b = graph.add_vertex(2);
            graph.add_edge(a, b);
            graph.add_edge(a, a);
            graph.add_edge(a, b);
            assert_eq!(graph.neighbors(a), &[b, a, b]);
            assert_eq!(graph.edge_count(), 3);
            assert!(!graph.is_leaf(a));
        });
    }

    #[test]
    fn equal_values_are_distinct_vertices() {
        VertexGraph::new(|mut graph| {
            let a = graph.add_vertex(7);
            let b = graph.add_vertex(7);
            assert_ne!(a, b);
            assert_eq!(graph.value(a), graph.value(b));
            assert_eq!(graph.find(&7), Some(a));
            assert_eq!(graph.find(&8), None);
        });
    }

    #[test]
    fn iteration_follows_insertion_order() {
        VertexGraph::with_capacity(3, |mut graph| {
            let ids: Vec<_> = (10..13).map(|v| graph.add_vertex(v)).collect();
            assert_eq!(graph.vertex_ids().collect::<Vec<_>>(), ids);
            let values: Vec<i32> = graph.iter().map(|(_, v)| *v.value()).collect();
            assert_eq!(values, vec![10, 11, 12]);
            assert_eq!(graph.values_of(ids.iter().rev().copied()), vec![&12, &11, &10]);
        });
    }
}
