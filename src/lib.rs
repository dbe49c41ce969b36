//! Dijkstra Path - validated single-pair shortest paths
//!
//! Computes the shortest weighted path between two vertices of a directed graph
//! with non-negative edge weights, reporting both the total distance and the
//! vertex sequence realizing it.
//!
//! Input is checked before any algorithmic work: empty graphs, unknown
//! endpoints, negative weights and malformed input shapes are reported as
//! typed [`Error`]s. An unreachable destination is not an error; it yields a
//! [`PathResult`] with no distance and an empty path.

pub mod algorithm;
pub mod config;
pub mod data_structures;
pub mod graph;
pub mod request;

use std::fmt;

use serde::Serialize;

pub use algorithm::{
    dijkstra::Dijkstra,
    path_finder::{PathFinder, PathResult},
    scan::ScanDijkstra,
    ShortestPathAlgorithm, ShortestPathTree,
};
pub use config::{PathFinderConfig, Strategy};
/// Re-export main types for convenient use
pub use graph::directed::DirectedGraph;
pub use request::PathRequest;

/// Which endpoint of a query a vertex error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VertexRole {
    Start,
    End,
}

impl fmt::Display for VertexRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VertexRole::Start => f.write_str("start"),
            VertexRole::End => f.write_str("end"),
        }
    }
}

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Graph has no vertices")]
    EmptyGraph,

    #[error("Unknown {role} vertex: {vertex}")]
    UnknownVertex { role: VertexRole, vertex: String },

    #[error("Invalid weight {weight} on edge from {from} to {to}")]
    InvalidWeight {
        from: String,
        to: String,
        weight: f64,
    },

    #[error("Distance from {from} to {to} exceeds the representable range")]
    DistanceOverflow { from: String, to: String },

    #[error("Malformed input at `{field}`: {reason}")]
    MalformedInput { field: String, reason: String },
}

impl Error {
    /// Stable machine-readable kind of the failure
    pub fn code(&self) -> &'static str {
        match self {
            Error::EmptyGraph => "empty_graph",
            Error::UnknownVertex { .. } => "unknown_vertex",
            Error::InvalidWeight { .. } => "invalid_weight",
            Error::DistanceOverflow { .. } => "distance_overflow",
            Error::MalformedInput { .. } => "malformed_input",
        }
    }

    pub(crate) fn malformed(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::MalformedInput {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Error body a transport layer can hand back to its client
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub details: Option<serde_json::Value>,
}

impl From<&Error> for ErrorResponse {
    fn from(err: &Error) -> Self {
        let details = match err {
            Error::EmptyGraph => None,
            Error::UnknownVertex { role, vertex } => Some(serde_json::json!({
                "role": role,
                "vertex": vertex,
            })),
            Error::InvalidWeight { from, to, weight } => Some(serde_json::json!({
                "from": from,
                "to": to,
                "weight": weight,
            })),
            Error::DistanceOverflow { from, to } => Some(serde_json::json!({
                "from": from,
                "to": to,
            })),
            Error::MalformedInput { field, .. } => Some(serde_json::json!({ "field": field })),
        };

        ErrorResponse {
            error: err.code().to_string(),
            message: err.to_string(),
            details,
        }
    }
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_codes_are_distinct() {
        let errors = [
            Error::EmptyGraph,
            Error::UnknownVertex {
                role: VertexRole::Start,
                vertex: "X".into(),
            },
            Error::InvalidWeight {
                from: "A".into(),
                to: "B".into(),
                weight: -1.0,
            },
            Error::DistanceOverflow {
                from: "A".into(),
                to: "B".into(),
            },
            Error::malformed("graph", "expected an object"),
        ];
        let mut codes: Vec<_> = errors.iter().map(Error::code).collect();
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
    }

    #[test]
    fn error_response_carries_context() {
        let err = Error::UnknownVertex {
            role: VertexRole::End,
            vertex: "Z".into(),
        };
        let body = ErrorResponse::from(&err);
        assert_eq!(body.error, "unknown_vertex");
        assert_eq!(body.message, "Unknown end vertex: Z");
        let details = body.details.unwrap();
        assert_eq!(details["role"], "end");
        assert_eq!(details["vertex"], "Z");
    }
}
