use crate::graph::DirectedGraph;
use ordered_float::OrderedFloat;
use rand::prelude::*;
use rand::rngs::StdRng;

/// Label used for the vertex at index `i` in generated graphs
pub fn vertex_label(i: usize) -> String {
    format!("v{}", i)
}

/// Generates a random directed graph with n vertices and roughly
/// `edge_factor * n` edges with weights in `1.0..100.0`.
/// The same seed always yields the same graph.
pub fn generate_random(n: usize, edge_factor: f64, seed: u64) -> DirectedGraph<String, OrderedFloat<f64>> {
    let mut graph = DirectedGraph::new();
    let mut rng = StdRng::seed_from_u64(seed);

    for i in 0..n {
        graph.add_vertex(vertex_label(i));
    }
    if n < 2 {
        return graph;
    }

    let num_edges = (edge_factor * n as f64) as usize;
    for _ in 0..num_edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        // Avoid self-loops
        if u != v {
            let weight = OrderedFloat(rng.gen_range(1.0..100.0));
            graph.add_edge(vertex_label(u), vertex_label(v), weight);
        }
    }

    graph
}

/// Generates a width x height grid where each cell links to its 8 neighbors.
/// Cardinal moves cost 1.0, diagonal moves cost 1.4. Cells are labeled `x,y`.
pub fn generate_grid(width: usize, height: usize) -> DirectedGraph<String, OrderedFloat<f64>> {
    let mut graph = DirectedGraph::new();

    let directions = [
        // Cardinal directions (N, E, S, W)
        (0, -1, 1.0), (1, 0, 1.0), (0, 1, 1.0), (-1, 0, 1.0),
        // Diagonal directions (NE, SE, SW, NW)
        (1, -1, 1.4), (1, 1, 1.4), (-1, 1, 1.4), (-1, -1, 1.4),
    ];

    for y in 0..height {
        for x in 0..width {
            graph.add_vertex(grid_label(x, y));
            for (dx, dy, cost) in directions {
                let nx = x as i64 + dx;
                let ny = y as i64 + dy;

                if nx >= 0 && ny >= 0 && nx < width as i64 && ny < height as i64 {
                    graph.add_edge(
                        grid_label(x, y),
                        grid_label(nx as usize, ny as usize),
                        OrderedFloat(cost),
                    );
                }
            }
        }
    }

    graph
}

/// Label of grid cell (x, y) in graphs built by `generate_grid`
pub fn grid_label(x: usize, y: usize) -> String {
    format!("{},{}", x, y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;

    #[test]
    fn random_graph_is_reproducible() {
        let a = generate_random(50, 3.0, 7);
        let b = generate_random(50, 3.0, 7);
        assert_eq!(a, b);
        assert_eq!(a.vertex_count(), 50);
        assert!(a.validate_weights().is_ok());
    }

    #[test]
    fn grid_has_expected_shape() {
        let g = generate_grid(3, 3);
        assert_eq!(g.vertex_count(), 9);
        // center cell reaches all 8 neighbors
        assert_eq!(g.outgoing_edges(&grid_label(1, 1)).count(), 8);
        // corners reach 3
        assert_eq!(g.outgoing_edges(&grid_label(0, 0)).count(), 3);
    }
}
