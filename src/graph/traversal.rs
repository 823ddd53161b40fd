//! Graph traversal algorithms (BFS, DFS, component sweeps).

use std::collections::{BTreeSet, HashMap, HashSet, VecDeque};

use crate::types::{GraphError, GraphResult, NodeId, TraversalMode};

use super::WordGraph;

/// Visitation order produced by a traversal.
///
/// Ranks start at 1 for the start node; unreached nodes have rank 0.
#[derive(Debug, Clone, Default)]
pub struct VisitOrder {
    sequence: Vec<NodeId>,
    ranks: HashMap<NodeId, usize>,
}

impl VisitOrder {
    fn record(&mut self, id: NodeId) {
        self.sequence.push(id);
        self.ranks.insert(id, self.sequence.len());
    }

    /// Rank of `id`, or 0 if it was not reached.
    pub fn rank(&self, id: NodeId) -> usize {
        self.ranks.get(&id).copied().unwrap_or(0)
    }

    /// Visited nodes in visitation order.
    pub fn sequence(&self) -> &[NodeId] {
        &self.sequence
    }

    /// Number of visited nodes.
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    /// Whether nothing was visited.
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Rank of every live node in `graph`, 0 for unreached ones.
    pub fn to_map(&self, graph: &WordGraph) -> HashMap<NodeId, usize> {
        graph.node_ids().map(|id| (id, self.rank(id))).collect()
    }
}

/// Traverse from `start` with the given discipline.
pub fn traverse(graph: &WordGraph, start: NodeId, mode: TraversalMode) -> GraphResult<VisitOrder> {
    match mode {
        TraversalMode::BreadthFirst => bfs(graph, start),
        TraversalMode::DepthFirst => dfs(graph, start),
    }
}

/// Breadth-first search from `start`.
///
/// Neighbors are marked when enqueued and ranked when dequeued, in ascending
/// ID order.
pub fn bfs(graph: &WordGraph, start: NodeId) -> GraphResult<VisitOrder> {
    if !graph.contains_node(start) {
        return Err(GraphError::UnknownNode(start));
    }

    let mut order = VisitOrder::default();
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut queue: VecDeque<NodeId> = VecDeque::new();

    visited.insert(start);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        for neighbor in graph.adjacent(current) {
            if visited.insert(neighbor) {
                queue.push_back(neighbor);
            }
        }
        order.record(current);
    }

    Ok(order)
}

/// Depth-first search from `start` with an explicit stack.
///
/// Neighbors are marked when pushed, not when popped, so a node discovered
/// from several places keeps its first discovery. Neighbors are pushed in
/// ascending ID order and therefore popped highest first.
pub fn dfs(graph: &WordGraph, start: NodeId) -> GraphResult<VisitOrder> {
    if !graph.contains_node(start) {
        return Err(GraphError::UnknownNode(start));
    }

    let mut order = VisitOrder::default();
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut stack: Vec<NodeId> = Vec::new();

    visited.insert(start);
    stack.push(start);

    while let Some(current) = stack.pop() {
        for neighbor in graph.adjacent(current) {
            if visited.insert(neighbor) {
                stack.push(neighbor);
            }
        }
        order.record(current);
    }

    Ok(order)
}

/// Hop count from `start` to every node reachable from it.
pub fn bfs_distances(graph: &WordGraph, start: NodeId) -> GraphResult<HashMap<NodeId, u32>> {
    if !graph.contains_node(start) {
        return Err(GraphError::UnknownNode(start));
    }

    let mut depths: HashMap<NodeId, u32> = HashMap::new();
    let mut queue: VecDeque<(NodeId, u32)> = VecDeque::new();

    depths.insert(start, 0);
    queue.push_back((start, 0));

    while let Some((current, depth)) = queue.pop_front() {
        for neighbor in graph.adjacent(current) {
            if !depths.contains_key(&neighbor) {
                depths.insert(neighbor, depth + 1);
                queue.push_back((neighbor, depth + 1));
            }
        }
    }

    Ok(depths)
}

/// Count connected components by sweeping `remaining` empty.
///
/// The first sweep starts at `start` and counts as component 1 whether or not
/// `start` is in `remaining`. Each sweep only enqueues nodes still in
/// `remaining` and removes them; the next sweep restarts at the lowest
/// remaining ID. Every node in `remaining` must be live.
pub fn sweep_components(
    graph: &WordGraph,
    start: NodeId,
    mut remaining: BTreeSet<NodeId>,
) -> GraphResult<usize> {
    let mut components = 0;
    let mut next = Some(start);

    while let Some(root) = next {
        sweep(graph, root, &mut remaining)?;
        components += 1;
        next = remaining.first().copied();
    }

    Ok(components)
}

/// Number of connected components in the graph.
pub fn component_count(graph: &WordGraph) -> usize {
    connected_components(graph).len()
}

/// Connected components, each sorted, ordered by their smallest member.
pub fn connected_components(graph: &WordGraph) -> Vec<Vec<NodeId>> {
    let mut remaining: BTreeSet<NodeId> = graph.node_ids().collect();
    let mut components = Vec::new();

    while let Some(root) = remaining.pop_first() {
        // Roots come from the live set, so the sweep cannot fail
        if let Ok(mut members) = sweep(graph, root, &mut remaining) {
            members.sort_unstable();
            components.push(members);
        }
    }

    components
}

/// One BFS sweep from `root` over nodes still in `remaining`.
fn sweep(
    graph: &WordGraph,
    root: NodeId,
    remaining: &mut BTreeSet<NodeId>,
) -> GraphResult<Vec<NodeId>> {
    if !graph.contains_node(root) {
        return Err(GraphError::UnknownNode(root));
    }

    let mut members = vec![root];
    let mut queue: VecDeque<NodeId> = VecDeque::new();

    remaining.remove(&root);
    queue.push_back(root);

    while let Some(current) = queue.pop_front() {
        for neighbor in graph.adjacent(current) {
            if remaining.remove(&neighbor) {
                members.push(neighbor);
                queue.push_back(neighbor);
            }
        }
    }

    Ok(members)
}
