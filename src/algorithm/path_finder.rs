use std::fmt::Debug;
use num_traits::{Float, Zero};
use serde::Serialize;

use crate::algorithm::dijkstra::Dijkstra;
use crate::algorithm::scan::ScanDijkstra;
use crate::algorithm::{ShortestPathAlgorithm, ShortestPathTree};
use crate::config::{PathFinderConfig, Strategy};
use crate::graph::{Graph, Vertex};
use crate::{Error, Result, VertexRole};

/// Outcome of a single-pair query.
///
/// `distance: None` with an empty path means the destination is unreachable.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathResult<V, W> {
    pub distance: Option<W>,
    pub path: Vec<V>,
}

impl<V, W> PathResult<V, W> {
    /// Creates the result for a destination with no path from the start
    pub fn unreachable() -> Self {
        PathResult {
            distance: None,
            path: Vec::new(),
        }
    }

    /// Returns true if a path was found
    pub fn is_reachable(&self) -> bool {
        self.distance.is_some()
    }
}

/// Validating entry point for shortest path queries.
///
/// Holds only configuration; every call allocates its own tables, so one
/// instance can serve concurrent queries.
#[derive(Debug, Clone, Default)]
pub struct PathFinder {
    config: PathFinderConfig,
}

impl PathFinder {
    /// Creates a new path finder with the default configuration
    pub fn new() -> Self {
        PathFinder::default()
    }

    /// Creates a new path finder with the given configuration
    pub fn with_config(config: PathFinderConfig) -> Self {
        PathFinder { config }
    }

    /// Checks a query before any algorithmic work, in order: empty graph,
    /// unknown start, unknown end, invalid weight.
    pub fn validate<V, W, G>(&self, graph: &G, start: &V, end: &V) -> Result<()>
    where
        V: Vertex,
        W: Float + Zero + Debug + Copy,
        G: Graph<V, W>,
    {
        if graph.is_empty() {
            return Err(Error::EmptyGraph);
        }
        check_vertex(graph, start, VertexRole::Start)?;
        check_vertex(graph, end, VertexRole::End)?;
        graph.validate_weights()
    }

    /// Shortest distance and path from `start` to `end`
    pub fn shortest_path<V, W, G>(&self, graph: &G, start: &V, end: &V) -> Result<PathResult<V, W>>
    where
        V: Vertex,
        W: Float + Zero + Debug + Copy + Ord,
        G: Graph<V, W>,
    {
        if let Err(err) = self.validate(graph, start, end) {
            log::debug!("Rejected query {} -> {}: {}", start, end, err);
            return Err(err);
        }

        let tree = self.run(graph, start)?;
        let result = match (tree.distance_to(end), tree.path_to(end)) {
            (Some(distance), Some(path)) => PathResult {
                distance: Some(distance),
                path,
            },
            _ => PathResult::unreachable(),
        };

        log::debug!(
            "Shortest path {} -> {}: {:?} over {} vertices",
            start,
            end,
            result.distance,
            result.path.len()
        );
        Ok(result)
    }

    /// Full distance and predecessor tables from `start`, for reuse across destinations
    pub fn shortest_path_tree<V, W, G>(&self, graph: &G, start: &V) -> Result<ShortestPathTree<V, W>>
    where
        V: Vertex,
        W: Float + Zero + Debug + Copy + Ord,
        G: Graph<V, W>,
    {
        if graph.is_empty() {
            return Err(Error::EmptyGraph);
        }
        check_vertex(graph, start, VertexRole::Start)?;

        // weights are checked by the algorithm itself
        self.run(graph, start)
    }

    fn run<V, W, G>(&self, graph: &G, start: &V) -> Result<ShortestPathTree<V, W>>
    where
        V: Vertex,
        W: Float + Zero + Debug + Copy + Ord,
        G: Graph<V, W>,
    {
        match self.config.resolve(graph.vertex_count()) {
            Strategy::Scan => execute(&ScanDijkstra::new(), graph, start),
            _ => execute(&Dijkstra::new(), graph, start),
        }
    }
}

fn execute<V, W, G, A>(algorithm: &A, graph: &G, start: &V) -> Result<ShortestPathTree<V, W>>
where
    V: Vertex,
    W: Float + Zero + Debug + Copy,
    G: Graph<V, W>,
    A: ShortestPathAlgorithm<V, W, G>,
{
    log::debug!(
        "Running {} on {} vertices, {} edges",
        algorithm.name(),
        graph.vertex_count(),
        graph.edge_count()
    );
    algorithm.compute_shortest_paths(graph, start)
}

fn check_vertex<V, W, G>(graph: &G, vertex: &V, role: VertexRole) -> Result<()>
where
    V: Vertex,
    W: Float + Zero + Debug + Copy,
    G: Graph<V, W>,
{
    if graph.has_vertex(vertex) {
        Ok(())
    } else {
        Err(Error::UnknownVertex {
            role,
            vertex: vertex.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::DirectedGraph;
    use ordered_float::OrderedFloat;

    type TestGraph = DirectedGraph<&'static str, OrderedFloat<f64>>;

    fn sample() -> TestGraph {
        let mut g = TestGraph::new();
        g.add_edge("A", "B", OrderedFloat(1.0));
        g.add_edge("A", "C", OrderedFloat(4.0));
        g.add_edge("B", "C", OrderedFloat(2.0));
        g.add_edge("B", "D", OrderedFloat(5.0));
        g.add_edge("C", "D", OrderedFloat(1.0));
        g
    }

    #[test]
    fn validation_order_empty_graph_first() {
        let g = TestGraph::new();
        assert_eq!(
            PathFinder::new().validate(&g, &"A", &"B"),
            Err(Error::EmptyGraph)
        );
    }

    #[test]
    fn validation_reports_start_before_end() {
        let err = PathFinder::new().validate(&sample(), &"X", &"Y").unwrap_err();
        assert_eq!(
            err,
            Error::UnknownVertex {
                role: VertexRole::Start,
                vertex: "X".into(),
            }
        );
    }

    #[test]
    fn unknown_endpoint_beats_negative_weight() {
        let mut g = sample();
        g.add_edge("D", "A", OrderedFloat(-1.0));
        let err = PathFinder::new().validate(&g, &"A", &"Q").unwrap_err();
        assert_eq!(err.code(), "unknown_vertex");
    }

    #[test]
    fn scan_and_heap_agree_on_sample() {
        let heap = PathFinder::new();
        let scan = PathFinder::with_config(PathFinderConfig::default().with_strategy(Strategy::Scan));

        let g = sample();
        assert_eq!(
            heap.shortest_path_tree(&g, &"A").unwrap(),
            scan.shortest_path_tree(&g, &"A").unwrap()
        );
    }

    #[test]
    fn unreachable_result_is_empty() {
        let result: PathResult<&str, OrderedFloat<f64>> = PathResult::unreachable();
        assert!(!result.is_reachable());
        assert!(result.path.is_empty());
    }
}
