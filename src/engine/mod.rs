//! High-level queries: shortest paths and statistics.

pub mod path;
pub mod stats;

pub use path::{shortest_path, shortest_path_between};
pub use stats::{degree_histogram, isolated_nodes, max_degree, GraphStats};
