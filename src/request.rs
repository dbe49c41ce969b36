//! Typed view of a shortest path query handed over as a loosely-typed JSON value.
//!
//! Expected shape:
//!
//! ```json
//! { "graph": { "A": { "B": 1, "C": 4 }, "B": {} }, "start": "A", "end": "B" }
//! ```

use std::collections::BTreeMap;

use ordered_float::OrderedFloat;
use serde_json::Value;

use crate::algorithm::path_finder::{PathFinder, PathResult};
use crate::graph::DirectedGraph;
use crate::{Error, Result};

pub type JsonGraph = DirectedGraph<String, OrderedFloat<f64>>;

/// A validated-shape shortest path query
#[derive(Debug, Clone, PartialEq)]
pub struct PathRequest {
    pub graph: JsonGraph,
    pub start: String,
    pub end: String,
}

impl PathRequest {
    /// Reads `graph`, `start` and `end` out of a parsed request body.
    ///
    /// Only the shape is checked here; empty graphs, unknown vertices and
    /// negative weights are left to [`PathFinder`].
    pub fn from_value(value: &Value) -> Result<Self> {
        let body = value
            .as_object()
            .ok_or_else(|| Error::malformed("request", "expected an object"))?;

        let graph = match body.get("graph") {
            Some(graph) => graph_from_value(graph)?,
            None => return Err(Error::malformed("graph", "missing")),
        };

        Ok(PathRequest {
            graph,
            start: vertex_field(body, "start")?,
            end: vertex_field(body, "end")?,
        })
    }

    /// Runs the query with the given finder
    pub fn solve(&self, finder: &PathFinder) -> Result<PathResult<String, OrderedFloat<f64>>> {
        finder.shortest_path(&self.graph, &self.start, &self.end)
    }
}

impl TryFrom<&Value> for PathRequest {
    type Error = Error;

    fn try_from(value: &Value) -> Result<Self> {
        PathRequest::from_value(value)
    }
}

fn vertex_field(body: &serde_json::Map<String, Value>, field: &str) -> Result<String> {
    match body.get(field) {
        None => Err(Error::malformed(field, "missing")),
        Some(Value::Null) => Err(Error::malformed(field, "must not be null")),
        Some(Value::String(vertex)) => Ok(vertex.clone()),
        Some(_) => Err(Error::malformed(field, "expected a string vertex id")),
    }
}

/// Converts `{vertex: {neighbor: weight}}` into a graph, keeping dangling neighbors as-is
pub fn graph_from_value(value: &Value) -> Result<JsonGraph> {
    let vertices = value.as_object().ok_or_else(|| {
        Error::malformed("graph", "expected an object mapping vertices to neighbor maps")
    })?;

    let mut adjacency = BTreeMap::new();
    for (vertex, edges) in vertices {
        let edges = edges.as_object().ok_or_else(|| {
            Error::malformed(
                format!("graph.{}", vertex),
                "expected an object mapping neighbors to weights",
            )
        })?;

        let mut neighbors = BTreeMap::new();
        for (neighbor, weight) in edges {
            let weight = weight.as_f64().ok_or_else(|| {
                Error::malformed(format!("graph.{}.{}", vertex, neighbor), "expected a number")
            })?;
            neighbors.insert(neighbor.clone(), OrderedFloat(weight));
        }
        adjacency.insert(vertex.clone(), neighbors);
    }

    Ok(DirectedGraph::from(adjacency))
}
