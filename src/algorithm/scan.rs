use std::collections::BTreeSet;
use std::fmt::Debug;
use num_traits::{Float, Zero};

use crate::graph::{Graph, Vertex};
use crate::algorithm::{ShortestPathAlgorithm, ShortestPathTree};
use crate::{Error, Result, VertexRole};

/// Dijkstra's algorithm scanning every unfinalized vertex for the minimum, O(V^2).
///
/// No auxiliary structure; only worth it on tiny graphs. Produces the same
/// tables as [`Dijkstra`](crate::algorithm::dijkstra::Dijkstra): ties on
/// distance are broken by vertex order in both.
#[derive(Debug, Default)]
pub struct ScanDijkstra;

impl ScanDijkstra {
    /// Creates a new scan-based Dijkstra instance
    pub fn new() -> Self {
        ScanDijkstra
    }
}

impl<V, W, G> ShortestPathAlgorithm<V, W, G> for ScanDijkstra
where
    V: Vertex,
    W: Float + Zero + Debug + Copy,
    G: Graph<V, W>,
{
    fn name(&self) -> &'static str {
        "ScanDijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: &V) -> Result<ShortestPathTree<V, W>> {
        if !graph.has_vertex(source) {
            return Err(Error::UnknownVertex {
                role: VertexRole::Start,
                vertex: source.to_string(),
            });
        }
        graph.validate_weights()?;

        let mut tree = ShortestPathTree::new(graph, source);
        let mut finalized: BTreeSet<V> = BTreeSet::new();
        let mut relaxations = 0usize;

        loop {
            // Closest unfinalized vertex; stop once the rest are unreached
            let mut current: Option<(&V, W)> = None;
            for (v, dist) in &tree.distances {
                if finalized.contains(v) {
                    continue;
                }
                if let Some(d) = *dist {
                    if current.map_or(true, |(_, best)| d < best) {
                        current = Some((v, d));
                    }
                }
            }

            let Some((u, dist_u)) = current else { break };
            let u = u.clone();
            finalized.insert(u.clone());

            for (v, weight) in graph.outgoing_edges(&u) {
                if finalized.contains(v) {
                    continue;
                }
                if tree.relax(&u, v, dist_u + weight)? {
                    relaxations += 1;
                }
            }
        }

        log::debug!(
            "ScanDijkstra from {}: {} finalized, {} relaxations",
            source,
            finalized.len(),
            relaxations
        );

        Ok(tree)
    }
}
