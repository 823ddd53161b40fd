//! Degree statistics and the whole-graph summary.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::graph::{component_count, WordGraph};
use crate::types::NodeId;

/// Nodes with no neighbors, ascending.
pub fn isolated_nodes(graph: &WordGraph) -> Vec<NodeId> {
    graph
        .node_ids()
        .filter(|&id| graph.adjacent(id).next().is_none())
        .collect()
}

/// Number of nodes at each observed degree.
pub fn degree_histogram(graph: &WordGraph) -> BTreeMap<usize, usize> {
    let mut histogram = BTreeMap::new();
    for id in graph.node_ids() {
        *histogram.entry(graph.adjacent(id).count()).or_insert(0) += 1;
    }
    histogram
}

/// Largest degree in the graph, 0 when empty.
pub fn max_degree(graph: &WordGraph) -> usize {
    graph
        .node_ids()
        .map(|id| graph.adjacent(id).count())
        .max()
        .unwrap_or(0)
}

/// Summary of a graph's structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphStats {
    /// Number of nodes.
    pub nodes: usize,
    /// Number of edges.
    pub edges: usize,
    /// Number of connected components.
    pub components: usize,
    /// Number of nodes without neighbors.
    pub isolated: usize,
    /// Largest degree.
    pub max_degree: usize,
    /// Degree -> node count.
    pub degree_histogram: BTreeMap<usize, usize>,
}

impl GraphStats {
    /// Compute every statistic for `graph`.
    pub fn collect(graph: &WordGraph) -> Self {
        let degree_histogram = degree_histogram(graph);
        Self {
            nodes: graph.node_count(),
            edges: graph.edge_count(),
            components: component_count(graph),
            isolated: degree_histogram.get(&0).copied().unwrap_or(0),
            max_degree: degree_histogram.keys().next_back().copied().unwrap_or(0),
            degree_histogram,
        }
    }

    /// Mean degree, 0.0 when empty.
    pub fn average_degree(&self) -> f64 {
        if self.nodes == 0 {
            0.0
        } else {
            (2 * self.edges) as f64 / self.nodes as f64
        }
    }
}
