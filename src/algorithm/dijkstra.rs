use std::fmt::Debug;
use num_traits::{Float, Zero};

use crate::graph::{Graph, Vertex};
use crate::algorithm::{ShortestPathAlgorithm, ShortestPathTree};
use crate::data_structures::BinaryHeapWrapper;
use crate::{Error, Result, VertexRole};

/// Dijkstra's algorithm over a binary heap with lazy deletion, O((V + E) log V)
#[derive(Debug, Default)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }
}

impl<V, W, G> ShortestPathAlgorithm<V, W, G> for Dijkstra
where
    V: Vertex,
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<V, W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
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
        let mut queue = BinaryHeapWrapper::with_capacity(graph.vertex_count());
        queue.push(source.clone(), W::zero());

        let mut finalized = 0usize;
        let mut relaxations = 0usize;
        let mut stale = 0usize;

        while let Some((u, dist_u)) = queue.pop() {
            // A shorter distance for u was recorded after this entry was pushed
            if let Some(best) = tree.distance_to(&u) {
                if dist_u > best {
                    log::trace!("Skipping stale entry {} at {:?}", u, dist_u);
                    stale += 1;
                    continue;
                }
            }
            finalized += 1;

            for (v, weight) in graph.outgoing_edges(&u) {
                if tree.relax(&u, v, dist_u + weight)? {
                    relaxations += 1;
                    queue.push(v.clone(), dist_u + weight);
                }
            }
        }

        log::debug!(
            "Dijkstra from {}: {} finalized, {} relaxations, {} stale entries",
            source, finalized, relaxations, stale
        );

        Ok(tree)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::DirectedGraph;
    use ordered_float::OrderedFloat;

    #[test]
    fn improves_vertices_pushed_more_than_once() {
        // C is first reached at 10 via A, then at 3 via B
        let mut g = DirectedGraph::new();
        g.add_edge("A", "C", OrderedFloat(10.0));
        g.add_edge("A", "B", OrderedFloat(1.0));
        g.add_edge("B", "C", OrderedFloat(2.0));
        g.add_edge("C", "D", OrderedFloat(1.0));

        let tree = Dijkstra::new().compute_shortest_paths(&g, &"A").unwrap();
        assert_eq!(tree.distance_to(&"C"), Some(OrderedFloat(3.0)));
        assert_eq!(tree.distance_to(&"D"), Some(OrderedFloat(4.0)));
        assert_eq!(tree.path_to(&"D"), Some(vec!["A", "B", "C", "D"]));
    }

    #[test]
    fn unknown_source_is_rejected() {
        let mut g: DirectedGraph<&str, OrderedFloat<f64>> = DirectedGraph::new();
        g.add_vertex("A");
        let err = Dijkstra::new().compute_shortest_paths(&g, &"Q").unwrap_err();
        assert_eq!(
            err,
            Error::UnknownVertex {
                role: VertexRole::Start,
                vertex: "Q".into(),
            }
        );
    }

    #[test]
    fn reaches_dangling_neighbors() {
        let mut raw = std::collections::BTreeMap::new();
        raw.insert("A", std::collections::BTreeMap::from([("Z", OrderedFloat(2.0))]));
        let g = DirectedGraph::from(raw);

        let tree = Dijkstra::new().compute_shortest_paths(&g, &"A").unwrap();
        assert_eq!(tree.distance_to(&"Z"), Some(OrderedFloat(2.0)));
        assert_eq!(tree.predecessor_of(&"Z"), Some(&"A"));
    }

    #[test]
    fn negative_cycle_is_rejected_before_search() {
        let mut g = DirectedGraph::new();
        g.add_edge("A", "B", OrderedFloat(-1.0));
        g.add_edge("B", "A", OrderedFloat(-1.0));

        let err = Dijkstra::new().compute_shortest_paths(&g, &"A").unwrap_err();
        assert_eq!(
            err,
            Error::InvalidWeight {
                from: "A".into(),
                to: "B".into(),
                weight: -1.0,
            }
        );
    }

    #[test]
    fn overflowing_distance_is_an_error() {
        let mut g = DirectedGraph::new();
        g.add_edge("A", "B", OrderedFloat(f64::MAX));
        g.add_edge("B", "C", OrderedFloat(f64::MAX));

        let err = Dijkstra::new().compute_shortest_paths(&g, &"A").unwrap_err();
        assert_eq!(err.code(), "distance_overflow");
    }
}
