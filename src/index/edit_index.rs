//! Single-edit candidate index used by the fast construction strategy.
//!
//! Two labels are one edit apart iff one of these holds:
//! - same length, and deleting the same position from both gives equal strings
//!   while the labels themselves differ (substitution);
//! - lengths differ by one, and deleting some position from the longer gives
//!   the shorter (insertion/deletion).
//!
//! The index stores every single-deletion variant of every inserted label, so
//! both cases become hash lookups.

use std::collections::{BTreeSet, HashMap};

use crate::types::NodeId;

/// A deletion variant of an indexed label.
#[derive(Debug, Clone, Copy)]
struct Variant {
    id: NodeId,
    /// Character position that was deleted.
    position: usize,
    /// Length in characters of the original label.
    len: usize,
}

/// Index of labels and their single-deletion variants.
#[derive(Debug, Default)]
pub struct EditIndex {
    exact: HashMap<String, Vec<NodeId>>,
    deletions: HashMap<String, Vec<Variant>>,
}

impl EditIndex {
    /// Create a new, empty edit index.
    pub fn new() -> Self {
        Self::default()
    }

    /// IDs of indexed labels exactly one edit away from `label`, ascending.
    pub fn neighbors(&self, label: &str) -> BTreeSet<NodeId> {
        let chars: Vec<char> = label.chars().collect();
        let len = chars.len();
        let mut found = BTreeSet::new();

        for (position, variant) in deletion_variants(&chars) {
            // Shorter label equal to this deletion
            if let Some(ids) = self.exact.get(&variant) {
                found.extend(ids.iter().copied());
            }
            // Same-length label differing at this position
            if let Some(variants) = self.deletions.get(&variant) {
                for v in variants {
                    if v.len == len && v.position == position {
                        found.insert(v.id);
                    }
                }
            }
        }

        // Longer label with one deletion equal to this label
        if let Some(variants) = self.deletions.get(label) {
            for v in variants {
                if v.len == len + 1 {
                    found.insert(v.id);
                }
            }
        }

        // Identical labels collide in the substitution case
        if let Some(ids) = self.exact.get(label) {
            for id in ids {
                found.remove(id);
            }
        }

        found
    }

    /// Add a label under `id`.
    pub fn insert(&mut self, label: &str, id: NodeId) {
        let chars: Vec<char> = label.chars().collect();
        let len = chars.len();
        for (position, variant) in deletion_variants(&chars) {
            self.deletions
                .entry(variant)
                .or_default()
                .push(Variant { id, position, len });
        }
        self.exact.entry(label.to_string()).or_default().push(id);
    }

    /// Number of indexed labels.
    pub fn len(&self) -> usize {
        self.exact.values().map(|v| v.len()).sum()
    }

    /// Whether the index is empty.
    pub fn is_empty(&self) -> bool {
        self.exact.is_empty()
    }
}

fn deletion_variants(chars: &[char]) -> impl Iterator<Item = (usize, String)> + '_ {
    (0..chars.len()).map(move |skip| {
        let variant: String = chars
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != skip)
            .map(|(_, c)| c)
            .collect();
        (skip, variant)
    })
}
