//! Serializable graph descriptions.
//!
//! A `GraphDescription` is a plain, index-based picture of a graph that can
//! be written as JSON fixtures and loaded into a branded [`VertexGraph`].
//! Neighbour entries are positions in `vertices`.
//!
//! ```json
//! { "vertices": [
//!     { "value": 5, "neighbors": [1] },
//!     { "value": 10, "neighbors": [] },
//!     { "value": 7 }
//! ] }
//! ```
//!
//! A missing or `null` `neighbors` field leaves the edge list uninitialised,
//! which traversals treat exactly like an empty list.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::GraphError;
use crate::graph::{VertexGraph, VertexId};

/// One vertex of a [`GraphDescription`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VertexSpec<T> {
    /// The carried value.
    pub value: T,
    /// Outgoing edges as indices into the description's vertex list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub neighbors: Option<Vec<usize>>,
}

/// An index-based description of a whole graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphDescription<T> {
    /// Vertices in insertion order.
    pub vertices: Vec<VertexSpec<T>>,
}

impl<T> GraphDescription<T> {
    /// Pairs each value with the adjacency list at the same position.
    ///
    /// Values without a matching list get an uninitialised edge list; lists
    /// past the last value are ignored.
    pub fn from_adjacency<I>(values: I, adjacency: Vec<Vec<usize>>) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut lists = adjacency.into_iter();
        let vertices = values
            .into_iter()
            .map(|value| VertexSpec {
                value,
                neighbors: lists.next(),
            })
            .collect();
        Self { vertices }
    }

    /// Returns the number of described vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Checks that every edge points at a described vertex.
    ///
    /// # Errors
    /// Returns [`GraphError::DanglingEdge`] for the first out-of-range edge.
    pub fn validate(&self) -> Result<(), GraphError> {
        let vertex_count = self.vertices.len();
        for (from, spec) in self.vertices.iter().enumerate() {
            let targets = spec.neighbors.as_deref().unwrap_or(&[]);
            if let Some(&to) = targets.iter().find(|&&to| to >= vertex_count) {
                return Err(GraphError::DanglingEdge {
                    from,
                    to,
                    vertex_count,
                });
            }
        }
        Ok(())
    }

    /// Appends the described vertices and edges to `graph`.
    ///
    /// Returns the new handles, where position `i` belongs to `vertices[i]`.
    /// The description is validated first, so on error `graph` is untouched.
    ///
    /// # Errors
    /// Returns [`GraphError::DanglingEdge`] if an edge points past the end of
    /// `vertices`.
    pub fn load_into<'brand>(
        self,
        graph: &mut VertexGraph<'brand, T>,
    ) -> Result<Vec<VertexId<'brand>>, GraphError> {
        self.validate()?;

        let mut ids = Vec::with_capacity(self.vertices.len());
        let mut lists = Vec::with_capacity(self.vertices.len());
        for spec in self.vertices {
            ids.push(graph.add_vertex(spec.value));
            lists.push(spec.neighbors);
        }

        for (&id, list) in ids.iter().zip(lists) {
            if let Some(list) = list {
                graph.set_neighbors(id, list.into_iter().map(|to| ids[to]));
            }
        }

        Ok(ids)
    }
}

impl<T: Serialize> GraphDescription<T> {
    /// Renders the description as pretty-printed JSON.
    ///
    /// # Errors
    /// Returns the `serde_json` error if `T` fails to serialize.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl<T: DeserializeOwned> GraphDescription<T> {
    /// Parses a description from JSON.
    ///
    /// # Errors
    /// Returns the `serde_json` error for malformed input.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl<'brand, T: Clone> VertexGraph<'brand, T> {
    /// Exports the graph as a description; index `i` is the `i`-th added vertex.
    pub fn describe(&self) -> GraphDescription<T> {
        let vertices = self
            .iter()
            .map(|(_, vertex)| VertexSpec {
                value: vertex.value().clone(),
                neighbors: vertex
                    .has_edge_list()
                    .then(|| vertex.neighbors().iter().map(|id| id.index()).collect()),
            })
            .collect();
        GraphDescription { vertices }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_adjacency_pads_missing_lists() {
        let desc = GraphDescription::from_adjacency([1, 2, 3], vec![vec![1], vec![]]);
        assert_eq!(desc.vertex_count(), 3);
        assert_eq!(desc.vertices[0].neighbors, Some(vec![1]));
        assert_eq!(desc.vertices[1].neighbors, Some(vec![]));
        assert_eq!(desc.vertices[2].neighbors, None);
    }

    #[test]
    fn dangling_edge_leaves_graph_untouched() {
        let desc = GraphDescription::from_adjacency([1, 2], vec![vec![1], vec![0, 4]]);
        VertexGraph::new(|mut graph| {
            let err = desc.load_into(&mut graph).unwrap_err();
            assert_eq!(
                err,
                GraphError::DanglingEdge {
                    from: 1,
                    to: 4,
                    vertex_count: 2
                }
            );
            assert!(graph.is_empty());
        });
    }

    #[test]
    fn load_appends_after_existing_vertices() {
        VertexGraph::new(|mut graph| {
            let existing = graph.add_vertex(0);
            let desc = GraphDescription::from_adjacency([1, 2], vec![vec![1, 1], vec![0]]);
            let ids = desc.load_into(&mut graph).unwrap();

            assert_eq!(ids.len(), 2);
            assert_ne!(ids[0], existing);
            assert_eq!(graph.neighbors(ids[0]), &[ids[1], ids[1]]);
            assert_eq!(graph.neighbors(ids[1]), &[ids[0]]);
            assert!(graph.is_leaf(existing));
        });
    }

    #[test]
    fn describe_keeps_uninitialised_lists() {
        VertexGraph::new(|mut graph| {
            let a = graph.add_vertex('a');
            let b = graph.add_vertex('b');
            graph.add_vertex('c');
            graph.add_edge(a, b);
            graph.set_neighbors(b, []);

            let desc = graph.describe();
            assert_eq!(
                desc,
                GraphDescription::from_adjacency(['a', 'b', 'c'], vec![vec![1], vec![]])
            );
        });
    }
}
