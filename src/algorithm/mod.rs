pub mod traits;
pub mod dijkstra;
pub mod scan;
pub mod path_finder;

pub use traits::{ShortestPathAlgorithm, ShortestPathTree};
