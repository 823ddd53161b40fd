//! Core graph structure: labeled nodes + symmetric adjacency sets.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::ops::Bound::{Excluded, Unbounded};

use crate::index::LabelIndex;
use crate::types::{Edge, GraphError, GraphResult, NodeId};

/// An undirected, unweighted graph of optionally labeled nodes.
///
/// Iteration over nodes and neighbors is always in ascending ID order, so
/// traversals and rendered output are reproducible.
#[derive(Debug, Clone, Default)]
pub struct WordGraph {
    /// Display name.
    name: Option<String>,
    /// Live nodes and their labels.
    nodes: BTreeMap<NodeId, Option<String>>,
    /// Adjacency sets; `b ∈ adjacency[a]` iff `a ∈ adjacency[b]`.
    adjacency: HashMap<NodeId, BTreeSet<NodeId>>,
    /// Number of distinct undirected edges.
    edge_count: usize,
    /// Label index.
    label_index: LabelIndex,
}

impl WordGraph {
    /// Create a new empty graph without a name.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new empty graph with a display name.
    pub fn with_name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Display name, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Set or clear the display name.
    pub fn set_name(&mut self, name: Option<String>) {
        self.name = name;
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Whether the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Live node IDs, ascending.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.keys().copied()
    }

    /// Live nodes with their labels, ascending by ID.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, Option<&str>)> + '_ {
        self.nodes.iter().map(|(&id, label)| (id, label.as_deref()))
    }

    /// Every edge once, ordered by `(low, high)`.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.nodes.keys().flat_map(move |&id| {
            self.adjacency
                .get(&id)
                .into_iter()
                .flat_map(move |set| {
                    set.range((Excluded(id), Unbounded))
                        .map(move |&n| Edge::new(id, n))
                })
        })
    }

    /// Whether `id` is live.
    pub fn contains_node(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Add a node. Fails if the ID is already live.
    pub fn add_node(&mut self, id: NodeId, label: Option<String>) -> GraphResult<()> {
        if self.nodes.contains_key(&id) {
            return Err(GraphError::DuplicateNode(id));
        }

        if let Some(ref l) = label {
            self.label_index.add(l, id);
        }
        self.nodes.insert(id, label);
        self.adjacency.insert(id, BTreeSet::new());

        Ok(())
    }

    /// Remove a node and all its edges, returning its label.
    pub fn remove_node(&mut self, id: NodeId) -> GraphResult<Option<String>> {
        let label = self.nodes.remove(&id).ok_or(GraphError::UnknownNode(id))?;

        let neighbors = self.adjacency.remove(&id).unwrap_or_default();
        for n in &neighbors {
            if let Some(set) = self.adjacency.get_mut(n) {
                set.remove(&id);
            }
        }
        self.edge_count -= neighbors.len();

        if let Some(ref l) = label {
            self.label_index.remove(l, id);
        }

        Ok(label)
    }

    /// Label of a node.
    pub fn label(&self, id: NodeId) -> GraphResult<Option<&str>> {
        self.nodes
            .get(&id)
            .map(|l| l.as_deref())
            .ok_or(GraphError::UnknownNode(id))
    }

    /// Replace the label of a node.
    pub fn set_label(&mut self, id: NodeId, label: Option<String>) -> GraphResult<()> {
        let slot = self.nodes.get_mut(&id).ok_or(GraphError::UnknownNode(id))?;

        if let Some(ref old) = slot {
            self.label_index.remove(old, id);
        }
        if let Some(ref new) = label {
            self.label_index.add(new, id);
        }
        *slot = label;

        Ok(())
    }

    /// Lowest ID whose label equals `label`.
    pub fn find_by_label(&self, label: &str) -> Option<NodeId> {
        self.label_index.first(label)
    }

    /// All IDs whose label equals `label`, ascending.
    pub fn nodes_with_label(&self, label: &str) -> Vec<NodeId> {
        self.label_index.get(label)
    }

    /// Add an undirected edge between two live, distinct nodes.
    pub fn add_edge(&mut self, a: NodeId, b: NodeId) -> GraphResult<()> {
        self.require_node(a)?;
        self.require_node(b)?;

        if a == b {
            return Err(GraphError::SelfLoop(a));
        }

        let inserted = self.adjacency.entry(a).or_default().insert(b);
        if !inserted {
            return Err(GraphError::DuplicateEdge(a, b));
        }
        self.adjacency.entry(b).or_default().insert(a);
        self.edge_count += 1;

        Ok(())
    }

    /// Remove an undirected edge.
    pub fn remove_edge(&mut self, a: NodeId, b: NodeId) -> GraphResult<()> {
        self.require_node(a)?;
        self.require_node(b)?;

        let removed = self
            .adjacency
            .get_mut(&a)
            .map(|set| set.remove(&b))
            .unwrap_or(false);
        if !removed {
            return Err(GraphError::MissingEdge(a, b));
        }
        if let Some(set) = self.adjacency.get_mut(&b) {
            set.remove(&a);
        }
        self.edge_count -= 1;

        Ok(())
    }

    /// Whether an edge joins `a` and `b`. Fails if either is not live.
    pub fn contains_edge(&self, a: NodeId, b: NodeId) -> GraphResult<bool> {
        self.require_node(a)?;
        self.require_node(b)?;
        Ok(self.adjacency.get(&a).is_some_and(|set| set.contains(&b)))
    }

    /// Number of edges incident to `id`.
    pub fn degree(&self, id: NodeId) -> GraphResult<usize> {
        self.neighbors(id).map(|set| set.len())
    }

    /// Neighbors of `id`, ascending.
    pub fn neighbors(&self, id: NodeId) -> GraphResult<&BTreeSet<NodeId>> {
        self.adjacency.get(&id).ok_or(GraphError::UnknownNode(id))
    }

    /// Neighbor set of a node known to be live; empty for unknown IDs.
    pub(crate) fn adjacent(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.adjacency
            .get(&id)
            .into_iter()
            .flat_map(|set| set.iter().copied())
    }

    fn require_node(&self, id: NodeId) -> GraphResult<()> {
        if self.nodes.contains_key(&id) {
            Ok(())
        } else {
            Err(GraphError::UnknownNode(id))
        }
    }
}
