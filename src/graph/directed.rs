use crate::graph::traits::{Graph, Vertex};
use crate::{Error, Result};
use num_traits::{Float, Zero};
use std::collections::BTreeMap;
use std::fmt::Debug;

/// A directed graph stored as nested ordered maps: vertex -> neighbor -> weight.
///
/// Ordered maps keep neighbor iteration deterministic, which fixes how ties
/// between equally short paths are resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectedGraph<V, W>
where
    V: Vertex,
    W: Float + Zero + Debug + Copy,
{
    /// Outgoing edges for each vertex: vertex -> {neighbor -> weight}
    adjacency: BTreeMap<V, BTreeMap<V, W>>,
}

impl<V, W> Default for DirectedGraph<V, W>
where
    V: Vertex,
    W: Float + Zero + Debug + Copy,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V, W> DirectedGraph<V, W>
where
    V: Vertex,
    W: Float + Zero + Debug + Copy,
{
    /// Creates a new empty directed graph
    pub fn new() -> Self {
        DirectedGraph {
            adjacency: BTreeMap::new(),
        }
    }

    /// Adds a vertex with no outgoing edges. Returns false if it already existed.
    pub fn add_vertex(&mut self, vertex: V) -> bool {
        if self.adjacency.contains_key(&vertex) {
            return false;
        }
        self.adjacency.insert(vertex, BTreeMap::new());
        true
    }

    /// Adds a directed edge, registering both endpoints as vertices.
    /// An existing edge between the same pair gets its weight replaced.
    ///
    /// Weights are stored as given; `validate_weights` rejects negative ones.
    pub fn add_edge(&mut self, from: V, to: V, weight: W) {
        self.add_vertex(to.clone());
        self.adjacency.entry(from).or_default().insert(to, weight);
    }

    /// Builds a graph from a square weight matrix where `0` means "no edge".
    ///
    /// Row `i` holds the outgoing weights of `labels[i]`.
    pub fn from_adjacency_matrix(labels: &[V], matrix: &[Vec<W>]) -> Result<Self> {
        if matrix.len() != labels.len() {
            return Err(Error::malformed(
                "matrix",
                format!("{} rows for {} labels", matrix.len(), labels.len()),
            ));
        }

        let mut graph = DirectedGraph::new();
        for label in labels {
            graph.add_vertex(label.clone());
        }

        for (i, row) in matrix.iter().enumerate() {
            if row.len() != labels.len() {
                return Err(Error::malformed(
                    format!("matrix[{}]", i),
                    format!("expected {} columns, found {}", labels.len(), row.len()),
                ));
            }
            for (j, weight) in row.iter().enumerate() {
                if !weight.is_zero() {
                    graph.add_edge(labels[i].clone(), labels[j].clone(), *weight);
                }
            }
        }

        Ok(graph)
    }
}

/// Takes a raw nested map as-is. Neighbors missing as top-level keys stay
/// dangling: reachable, but without outgoing edges.
impl<V, W> From<BTreeMap<V, BTreeMap<V, W>>> for DirectedGraph<V, W>
where
    V: Vertex,
    W: Float + Zero + Debug + Copy,
{
    fn from(adjacency: BTreeMap<V, BTreeMap<V, W>>) -> Self {
        DirectedGraph { adjacency }
    }
}

impl<V, W> Graph<V, W> for DirectedGraph<V, W>
where
    V: Vertex,
    W: Float + Zero + Debug + Copy,
{
    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    fn edge_count(&self) -> usize {
        self.adjacency.values().map(|edges| edges.len()).sum()
    }

    fn vertices(&self) -> Box<dyn Iterator<Item = &V> + '_> {
        Box::new(self.adjacency.keys())
    }

    fn outgoing_edges(&self, vertex: &V) -> Box<dyn Iterator<Item = (&V, W)> + '_> {
        if let Some(edges) = self.adjacency.get(vertex) {
            Box::new(edges.iter().map(|(target, weight)| (target, *weight)))
        } else {
            Box::new(std::iter::empty())
        }
    }

    fn has_vertex(&self, vertex: &V) -> bool {
        self.adjacency.contains_key(vertex)
    }

    fn has_edge(&self, from: &V, to: &V) -> bool {
        self.adjacency
            .get(from)
            .map_or(false, |edges| edges.contains_key(to))
    }

    fn get_edge_weight(&self, from: &V, to: &V) -> Option<W> {
        self.adjacency.get(from).and_then(|edges| edges.get(to).copied())
    }
}
