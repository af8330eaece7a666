//! Error types for graph loading and path queries.

/// Which endpoint of a path query was missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// The vertex the path starts from.
    Start,
    /// The vertex the path must reach.
    End,
}

impl core::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Endpoint::Start => f.write_str("start"),
            Endpoint::End => f.write_str("end"),
        }
    }
}

/// The error type for graph operations that have hard preconditions.
///
/// Reachability-style queries never fail: an absent start vertex yields an
/// empty result. Only the strictly-increasing path query and graph loading
/// report errors, so that "malformed call" can never be read as "no path".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    /// A required endpoint was `None`.
    MissingEndpoint(Endpoint),
    /// A description edge points past the end of the vertex list.
    DanglingEdge {
        /// Index of the vertex owning the edge.
        from: usize,
        /// The out-of-range target index.
        to: usize,
        /// Number of vertices in the description.
        vertex_count: usize,
    },
}

impl core::fmt::Display for GraphError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GraphError::MissingEndpoint(endpoint) => {
                write!(f, "path query is missing its {endpoint} vertex")
            }
            GraphError::DanglingEdge {
                from,
                to,
                vertex_count,
            } => write!(
                f,
                "edge {from}->{to} out of bounds for a description of {vertex_count} vertices"
            ),
        }
    }
}

impl std::error::Error for GraphError {}
