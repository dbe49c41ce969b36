use std::collections::BTreeMap;
use std::fmt::Debug;
use num_traits::{Float, Zero};
use crate::graph::{Graph, Vertex};
use crate::{Error, Result};

/// Distance and predecessor tables produced by one shortest path run
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPathTree<V, W>
where
    V: Vertex,
    W: Float + Zero + Debug + Copy,
{
    /// Best known distance from the source; `None` means unreached
    pub distances: BTreeMap<V, Option<W>>,

    /// Vertex preceding each vertex on its best path; `None` for the source and unreached vertices
    pub predecessors: BTreeMap<V, Option<V>>,

    /// Source vertex
    pub source: V,
}

impl<V, W> ShortestPathTree<V, W>
where
    V: Vertex,
    W: Float + Zero + Debug + Copy,
{
    /// Fresh tables: every top-level vertex unreached except the source at zero
    pub fn new<G: Graph<V, W> + ?Sized>(graph: &G, source: &V) -> Self {
        let mut distances: BTreeMap<V, Option<W>> =
            graph.vertices().map(|v| (v.clone(), None)).collect();
        let mut predecessors: BTreeMap<V, Option<V>> =
            graph.vertices().map(|v| (v.clone(), None)).collect();

        distances.insert(source.clone(), Some(W::zero()));
        predecessors.insert(source.clone(), None);

        ShortestPathTree {
            distances,
            predecessors,
            source: source.clone(),
        }
    }

    /// Distance from the source, `None` if the vertex was never reached
    pub fn distance_to(&self, target: &V) -> Option<W> {
        self.distances.get(target).copied().flatten()
    }

    /// Predecessor of a vertex on its shortest path
    pub fn predecessor_of(&self, vertex: &V) -> Option<&V> {
        self.predecessors.get(vertex).and_then(|p| p.as_ref())
    }

    /// Number of vertices with a finite distance, the source included
    pub fn reachable_count(&self) -> usize {
        self.distances.values().filter(|d| d.is_some()).count()
    }

    /// Strict-improvement relaxation. Returns true if `to` got a shorter distance.
    ///
    /// A candidate that overflowed to infinity is an error, never a reached distance.
    pub(crate) fn relax(&mut self, from: &V, to: &V, candidate: W) -> Result<bool> {
        if !candidate.is_finite() {
            return Err(Error::DistanceOverflow {
                from: from.to_string(),
                to: to.to_string(),
            });
        }

        let improves = match self.distance_to(to) {
            None => true,
            Some(current) => candidate < current,
        };

        if improves {
            self.distances.insert(to.clone(), Some(candidate));
            self.predecessors.insert(to.clone(), Some(from.clone()));
        }
        Ok(improves)
    }

    /// Walks predecessor pointers back from `target` to the source.
    ///
    /// Returns `None` if the target is unreached, or if the chain does not end
    /// at the source within one step per known vertex.
    pub fn path_to(&self, target: &V) -> Option<Vec<V>> {
        self.distance_to(target)?;

        let mut path = vec![target.clone()];
        let mut current = target;

        while let Some(pred) = self.predecessor_of(current) {
            if path.len() > self.predecessors.len() {
                log::warn!("Predecessor chain from {} does not terminate", target);
                return None;
            }
            path.push(pred.clone());
            current = pred;
        }

        if *current != self.source {
            log::warn!("Predecessor chain from {} ends at {}, not at source {}", target, current, self.source);
            return None;
        }

        path.reverse();
        Some(path)
    }
}

/// Trait for single-source shortest path strategies
pub trait ShortestPathAlgorithm<V, W, G>
where
    V: Vertex,
    W: Float + Zero + Debug + Copy,
    G: Graph<V, W>,
{
    /// Compute shortest paths from a source vertex to all other vertices
    fn compute_shortest_paths(&self, graph: &G, source: &V) -> Result<ShortestPathTree<V, W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::DirectedGraph;
    use ordered_float::OrderedFloat;

    fn tree() -> ShortestPathTree<&'static str, OrderedFloat<f64>> {
        let mut g = DirectedGraph::new();
        g.add_edge("A", "B", OrderedFloat(1.0));
        g.add_edge("B", "C", OrderedFloat(1.0));
        g.add_vertex("D");
        ShortestPathTree::new(&g, &"A")
    }

    #[test]
    fn fresh_tree_only_reaches_source() {
        let t = tree();
        assert_eq!(t.distance_to(&"A"), Some(OrderedFloat(0.0)));
        assert_eq!(t.distance_to(&"B"), None);
        assert_eq!(t.reachable_count(), 1);
        assert_eq!(t.path_to(&"A"), Some(vec!["A"]));
        assert_eq!(t.path_to(&"B"), None);
    }

    #[test]
    fn relax_requires_strict_improvement() {
        let mut t = tree();
        assert!(t.relax(&"A", &"B", OrderedFloat(3.0)).unwrap());
        assert!(!t.relax(&"C", &"B", OrderedFloat(3.0)).unwrap());
        assert_eq!(t.predecessor_of(&"B"), Some(&"A"));
        assert!(t.relax(&"C", &"B", OrderedFloat(2.0)).unwrap());
        assert_eq!(t.predecessor_of(&"B"), Some(&"C"));
    }

    #[test]
    fn relax_rejects_overflowing_candidate() {
        let mut t = tree();
        let err = t.relax(&"B", &"C", OrderedFloat(f64::INFINITY)).unwrap_err();
        assert_eq!(
            err,
            Error::DistanceOverflow {
                from: "B".into(),
                to: "C".into(),
            }
        );
        assert_eq!(t.distance_to(&"C"), None);
    }

    #[test]
    fn path_to_rejects_cyclic_chain() {
        let mut t = tree();
        t.distances.insert("B", Some(OrderedFloat(1.0)));
        t.distances.insert("C", Some(OrderedFloat(2.0)));
        t.predecessors.insert("B", Some("C"));
        t.predecessors.insert("C", Some("B"));
        assert_eq!(t.path_to(&"C"), None);
    }

    #[test]
    fn path_to_rejects_chain_not_ending_at_source() {
        let mut t = tree();
        t.distances.insert("C", Some(OrderedFloat(2.0)));
        t.predecessors.insert("C", Some("D"));
        assert_eq!(t.path_to(&"C"), None);
    }
}
