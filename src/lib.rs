//! wordgraph: graphs of words one edit apart.
//!
//! Builds an undirected graph from a word list, joining every pair of words
//! at Levenshtein distance 1, and answers structural queries on it: degrees,
//! connected components, breadth- and depth-first orders, shortest paths,
//! degree statistics and a GraphViz rendering.

pub mod cli;
pub mod engine;
pub mod format;
pub mod graph;
pub mod index;
pub mod types;

// Re-export commonly used types at the crate root
pub use engine::{
    degree_histogram, isolated_nodes, max_degree, shortest_path, shortest_path_between,
    GraphStats,
};
pub use format::{DotReader, DotWriter, MmapWordList, WordListReader};
pub use graph::{
    bfs, bfs_distances, build_from_lines, component_count, connected_components, dfs,
    sweep_components, traverse, BuildReporter, GraphBuilder, SilentReporter, VisitOrder,
    WordGraph,
};
pub use index::{is_one_edit, levenshtein, EditIndex, LabelIndex};
pub use types::{
    BuildStrategy, Edge, GraphError, GraphResult, NodeId, TraversalMode, DEFAULT_FIRST_ID,
    LINK_DISTANCE,
};
