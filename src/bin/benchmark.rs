use std::env;
use std::time::{Duration, Instant};
use dijkstra_path::graph::generators::{generate_random, vertex_label};
use dijkstra_path::graph::Graph;
use dijkstra_path::{DirectedGraph, PathFinder, PathFinderConfig, Strategy};
use ordered_float::OrderedFloat;

// Time one strategy on a graph and report how many vertices it reached
fn benchmark_strategy(
    strategy: Strategy,
    graph: &DirectedGraph<String, OrderedFloat<f64>>,
    source: &String,
) -> Result<(Duration, usize), dijkstra_path::Error> {
    let finder = PathFinder::with_config(PathFinderConfig::default().with_strategy(strategy));

    let start = Instant::now();
    let tree = finder.shortest_path_tree(graph, source)?;
    let duration = start.elapsed();

    Ok((duration, tree.reachable_count()))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Graph sizes from the command line, e.g. `benchmark 100 1000 5000`
    let args: Vec<String> = env::args().skip(1).collect();
    let graph_sizes: Vec<usize> = if args.is_empty() {
        vec![100, 1_000, 5_000]
    } else {
        args.iter()
            .map(|arg| arg.parse::<usize>())
            .collect::<Result<_, _>>()?
    };

    let edge_factor = 4.0;
    let source = vertex_label(0);

    println!("{:>10} {:>10} {:>14} {:>14} {:>10}", "vertices", "edges", "heap", "scan", "reached");
    for &n in &graph_sizes {
        let graph = generate_random(n, edge_factor, n as u64);
        log::info!("Generated graph with {} vertices and {} edges", graph.vertex_count(), graph.edge_count());

        let (heap_time, heap_reached) = benchmark_strategy(Strategy::PriorityQueue, &graph, &source)?;
        let (scan_time, scan_reached) = benchmark_strategy(Strategy::Scan, &graph, &source)?;

        if heap_reached != scan_reached {
            log::warn!("Strategies disagree on reachability: {} vs {}", heap_reached, scan_reached);
        }

        println!(
            "{:>10} {:>10} {:>14?} {:>14?} {:>10}",
            n,
            graph.edge_count(),
            heap_time,
            scan_time,
            heap_reached
        );
    }

    Ok(())
}
