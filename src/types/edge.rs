//! The undirected edge struct.

use serde::Serialize;

use super::NodeId;

/// An unordered pair of distinct nodes, stored with the smaller ID first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Edge {
    /// The endpoint with the smaller ID.
    pub low: NodeId,
    /// The endpoint with the larger ID.
    pub high: NodeId,
}

impl Edge {
    /// Create an edge, normalizing endpoint order.
    pub fn new(a: NodeId, b: NodeId) -> Self {
        if a <= b {
            Self { low: a, high: b }
        } else {
            Self { low: b, high: a }
        }
    }
}
