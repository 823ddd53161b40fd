//! In-memory graph operations: the core data structure.

pub mod builder;
pub mod traversal;
pub mod word_graph;

pub use builder::{build_from_lines, BuildReporter, GraphBuilder, SilentReporter};
pub use traversal::{
    bfs, bfs_distances, component_count, connected_components, dfs, sweep_components, traverse,
    VisitOrder,
};
pub use word_graph::WordGraph;
