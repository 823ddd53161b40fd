//! Named options shared by the library and the CLI.

use serde::Serialize;

/// How the builder finds labels at edit distance 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum BuildStrategy {
    /// Compare each new label against every earlier label.
    #[default]
    Pairwise,
    /// Look candidates up in an index of single-deletion variants.
    EditIndex,
}

impl BuildStrategy {
    /// Return a human-readable name for this strategy.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Pairwise => "pairwise",
            Self::EditIndex => "index",
        }
    }

    /// Parse a strategy from a string name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "pairwise" | "scan" => Some(Self::Pairwise),
            "index" | "edit_index" | "editindex" => Some(Self::EditIndex),
            _ => None,
        }
    }
}

/// Traversal discipline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TraversalMode {
    /// Breadth-first (FIFO frontier).
    BreadthFirst,
    /// Depth-first (LIFO stack).
    DepthFirst,
}

impl TraversalMode {
    /// Return a human-readable name for this mode.
    pub fn name(&self) -> &'static str {
        match self {
            Self::BreadthFirst => "bfs",
            Self::DepthFirst => "dfs",
        }
    }

    /// Parse a mode from a string name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "bfs" | "breadth" | "breadth_first" => Some(Self::BreadthFirst),
            "dfs" | "depth" | "depth_first" => Some(Self::DepthFirst),
            _ => None,
        }
    }
}
