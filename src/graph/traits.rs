use std::fmt::{Debug, Display};
use num_traits::{Float, Zero};

use crate::{Error, Result};

/// Opaque vertex identifier: comparable, cloneable and printable for error reports
pub trait Vertex: Clone + Ord + Debug + Display {}

impl<T> Vertex for T where T: Clone + Ord + Debug + Display {}

/// Trait representing a read-only weighted directed graph keyed by vertex ids
pub trait Graph<V, W>: Debug
where
    V: Vertex,
    W: Float + Zero + Debug + Copy,
{
    /// Returns the number of top-level vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over the top-level vertices
    fn vertices(&self) -> Box<dyn Iterator<Item = &V> + '_>;

    /// Returns an iterator over the outgoing edges from a vertex.
    /// Vertices that only appear as neighbors have no outgoing edges.
    fn outgoing_edges(&self, vertex: &V) -> Box<dyn Iterator<Item = (&V, W)> + '_>;

    /// Returns true if the vertex is a top-level key of the graph
    fn has_vertex(&self, vertex: &V) -> bool;

    /// Returns true if there's an edge between the two vertices
    fn has_edge(&self, from: &V, to: &V) -> bool;

    /// Gets the weight of an edge if it exists
    fn get_edge_weight(&self, from: &V, to: &V) -> Option<W>;

    /// Returns true if the graph has no vertices
    fn is_empty(&self) -> bool {
        self.vertex_count() == 0
    }

    /// Checks that every weight is a finite, non-negative number.
    /// The first offending edge, in vertex order, is reported.
    fn validate_weights(&self) -> Result<()> {
        for from in self.vertices() {
            for (to, weight) in self.outgoing_edges(from) {
                if weight.is_nan() || weight.is_infinite() || weight < W::zero() {
                    return Err(Error::InvalidWeight {
                        from: from.to_string(),
                        to: to.to_string(),
                        weight: weight.to_f64().unwrap_or(f64::NAN),
                    });
                }
            }
        }
        Ok(())
    }
}
