//! Unit-weight shortest paths (Dijkstra with every edge costing 1).

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};

use crate::graph::WordGraph;
use crate::types::{GraphError, GraphResult, NodeId};

/// Shortest path between the nodes labeled `from` and `to`.
///
/// A label carried by several nodes resolves to the lowest ID. The returned
/// path runs source to destination, both included.
pub fn shortest_path(graph: &WordGraph, from: &str, to: &str) -> GraphResult<Vec<NodeId>> {
    let source = graph
        .find_by_label(from)
        .ok_or_else(|| GraphError::UnknownLabel(from.to_string()))?;
    let target = graph
        .find_by_label(to)
        .ok_or_else(|| GraphError::UnknownLabel(to.to_string()))?;

    shortest_path_between(graph, source, target)
}

/// Shortest path between two node IDs.
///
/// Nodes are finalized in order of tentative distance (ties broken by lowest
/// ID); each improving relaxation records the parent. The source has no
/// parent, which is what ends path reconstruction.
pub fn shortest_path_between(
    graph: &WordGraph,
    from: NodeId,
    to: NodeId,
) -> GraphResult<Vec<NodeId>> {
    if !graph.contains_node(from) {
        return Err(GraphError::UnknownNode(from));
    }
    if !graph.contains_node(to) {
        return Err(GraphError::UnknownNode(to));
    }

    let mut distances: HashMap<NodeId, u32> = HashMap::new();
    let mut parents: HashMap<NodeId, Option<NodeId>> = HashMap::new();
    let mut finalized: HashSet<NodeId> = HashSet::new();
    let mut heap: BinaryHeap<Reverse<(u32, NodeId)>> = BinaryHeap::new();

    distances.insert(from, 0);
    parents.insert(from, None);
    heap.push(Reverse((0, from)));

    while let Some(Reverse((distance, current))) = heap.pop() {
        if !finalized.insert(current) {
            continue;
        }
        if current == to {
            return Ok(reconstruct(&parents, to));
        }

        for neighbor in graph.adjacent(current) {
            if finalized.contains(&neighbor) {
                continue;
            }
            let candidate = distance + 1;
            let improves = distances
                .get(&neighbor)
                .map_or(true, |&known| candidate < known);
            if improves {
                distances.insert(neighbor, candidate);
                parents.insert(neighbor, Some(current));
                heap.push(Reverse((candidate, neighbor)));
            }
        }
    }

    Err(GraphError::NoPath { from, to })
}

/// Follow parent links from `to` back to the source.
fn reconstruct(parents: &HashMap<NodeId, Option<NodeId>>, to: NodeId) -> Vec<NodeId> {
    let mut path = vec![to];
    let mut current = parents.get(&to).copied().flatten();

    while let Some(node) = current {
        path.push(node);
        current = parents.get(&node).copied().flatten();
    }

    path.reverse();
    path
}
