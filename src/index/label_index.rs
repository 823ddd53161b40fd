//! Index by label: maps each label to the sorted IDs carrying it.

use std::collections::{BTreeSet, HashMap};

use crate::types::NodeId;

/// Maps each label to the set of node IDs that carry it.
///
/// Labels are not unique; lookups that need a single node take the lowest ID.
#[derive(Debug, Clone, Default)]
pub struct LabelIndex {
    index: HashMap<String, BTreeSet<NodeId>>,
}

impl LabelIndex {
    /// Create a new, empty label index.
    pub fn new() -> Self {
        Self {
            index: HashMap::new(),
        }
    }

    /// Lowest ID carrying `label`.
    pub fn first(&self, label: &str) -> Option<NodeId> {
        self.index
            .get(label)
            .and_then(|ids| ids.iter().next().copied())
    }

    /// All IDs carrying `label`, ascending.
    pub fn get(&self, label: &str) -> Vec<NodeId> {
        self.index
            .get(label)
            .map(|ids| ids.iter().copied().collect())
            .unwrap_or_default()
    }

    /// Incrementally add a node's label.
    pub fn add(&mut self, label: &str, id: NodeId) {
        self.index.entry(label.to_string()).or_default().insert(id);
    }

    /// Remove a node's label, dropping the entry once no node carries it.
    pub fn remove(&mut self, label: &str, id: NodeId) {
        if let Some(ids) = self.index.get_mut(label) {
            ids.remove(&id);
            if ids.is_empty() {
                self.index.remove(label);
            }
        }
    }

    /// Number of distinct labels.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Whether the index is empty.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}
