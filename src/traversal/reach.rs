//! Reachability queries built on the global-dedup [`Dfs`] template.
//!
//! All four follow the same absence policy: a `None` start is not an error,
//! it just yields the empty answer for that query.

use num_traits::Bounded;

use super::dfs::Dfs;
use super::sink::VertexSink;
use crate::graph::{VertexGraph, VertexId, VertexSet};

/// Emits the value of every vertex reachable from `start`, each exactly once.
///
/// Emission order is DFS pre-order, but callers should not rely on it.
/// Returns how many values were emitted; a `None` start emits nothing.
///
/// # Errors
/// Stops at, and returns, the first error raised by `sink`.
///
/// ```rust
/// use graphwalk::{traversal, VertexGraph};
///
/// let printed = VertexGraph::new(|mut graph| {
///     let a = graph.add_vertex(1);
///     let b = graph.add_vertex(2);
///     graph.add_edge(a, b);
///     graph.add_edge(b, a);
///
///     let mut out = Vec::new();
///     traversal::print_vertex_vals(&graph, Some(a), &mut out).unwrap();
///     out
/// });
/// assert_eq!(printed, vec![1, 2]);
/// ```
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(level = "debug", skip_all, fields(start = ?start))
)]
pub fn print_vertex_vals<'brand, T, S>(
    graph: &VertexGraph<'brand, T>,
    start: Option<VertexId<'brand>>,
    sink: &mut S,
) -> Result<usize, S::Error>
where
    S: VertexSink<T> + ?Sized,
{
    let mut emitted = 0usize;
    for id in Dfs::new(graph, start) {
        sink.emit(graph.value(id))?;
        emitted += 1;
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(emitted, "emitted reachable values");

    Ok(emitted)
}

/// Returns every vertex reachable from `start`, including `start` itself.
///
/// A `None` start yields an empty set.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(level = "debug", skip_all, fields(start = ?start))
)]
pub fn reachable<'brand, T>(
    graph: &VertexGraph<'brand, T>,
    start: Option<VertexId<'brand>>,
) -> VertexSet<'brand> {
    let set = Dfs::new(graph, start).into_visited();

    #[cfg(feature = "tracing")]
    tracing::debug!(reachable = set.len(), "collected reachable set");

    set
}

/// Returns the largest value reachable from `start`.
///
/// A `None` start yields `T::min_value()` (`i32::MIN` for `i32`), which is
/// also the floor every fold starts from: a vertex seen twice adds nothing,
/// and a single reachable vertex returns its own value.
///
/// ```rust
/// use graphwalk::{traversal, VertexGraph};
///
/// VertexGraph::new(|mut graph| {
///     let a = graph.add_vertex(5);
///     let b = graph.add_vertex(10);
///     graph.add_edge(a, b);
///     assert_eq!(traversal::max(&graph, Some(a)), 10);
///     assert_eq!(traversal::max(&graph, Some(b)), 10);
///     assert_eq!(traversal::max(&graph, None), i32::MIN);
/// });
/// ```
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(level = "debug", skip_all, fields(start = ?start))
)]
pub fn max<'brand, T>(graph: &VertexGraph<'brand, T>, start: Option<VertexId<'brand>>) -> T
where
    T: Ord + Clone + Bounded,
{
    Dfs::new(graph, start)
        .map(|id| graph.value(id))
        .max()
        .cloned()
        .unwrap_or_else(T::min_value)
}

/// Returns every reachable vertex without outgoing edges.
///
/// `start` is included when it is itself a leaf. A vertex whose edge list
/// was never initialised counts as a leaf exactly like one with an empty
/// list. A `None` start yields an empty set.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(level = "debug", skip_all, fields(start = ?start))
)]
pub fn leaves<'brand, T>(
    graph: &VertexGraph<'brand, T>,
    start: Option<VertexId<'brand>>,
) -> VertexSet<'brand> {
    let mut found = VertexSet::with_capacity(graph.vertex_count());
    found.extend(Dfs::new(graph, start).filter(|&id| graph.is_leaf(id)));

    #[cfg(feature = "tracing")]
    tracing::debug!(leaves = found.len(), "collected reachable leaves");

    found
}
