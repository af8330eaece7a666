//! The vertex/edge model the traversals run over.
//!
//! - `vertex`: the branded vertex arena and its handles
//! - `vertex_set`: identity-keyed sets of handles
//! - `description`: serializable, index-based graph fixtures

pub mod description;
pub mod vertex;
pub mod vertex_set;
pub(crate) mod access;

pub use description::{GraphDescription, VertexSpec};
pub use vertex::{Vertex, VertexGraph, VertexId};
pub use vertex_set::VertexSet;
