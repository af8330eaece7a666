//! Depth-first queries over a [`VertexGraph`](crate::graph::VertexGraph).
//!
//! Two traversal templates live here, and they are kept apart on purpose:
//! - [`Dfs`]: one visited set per call; each vertex is processed once. Backs
//!   `print_vertex_vals`, `reachable`, `max` and `leaves`.
//! - [`IncreasingPathSearch`]: visited state scoped to the current branch.
//!   Backs `has_strictly_increasing_path`.
//!
//! Both walk with an explicit stack, so deep graphs cannot overflow the call
//! stack. None of the queries mutate the graph, and concurrent queries over
//! a shared `&VertexGraph` are fine.

pub mod dfs;
pub mod increasing;
pub mod reach;
pub mod sink;

pub use dfs::Dfs;
pub use increasing::{has_strictly_increasing_path, increasing_path, IncreasingPathSearch};
pub use reach::{leaves, max, print_vertex_vals, reachable};
pub use sink::{LineSink, Tee, TeeError, VertexSink};
