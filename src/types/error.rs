//! Error types for the wordgraph library.

use thiserror::Error;

use super::NodeId;

/// All errors that can occur in the wordgraph library.
#[derive(Error, Debug)]
pub enum GraphError {
    /// A node with this ID is already live.
    #[error("Node #{0} already exists")]
    DuplicateNode(NodeId),

    /// No live node with this ID.
    #[error("Node #{0} doesn't exist")]
    UnknownNode(NodeId),

    /// The edge is already present.
    #[error("Edge already exists between nodes #{0} and #{1}")]
    DuplicateEdge(NodeId, NodeId),

    /// Self-loops are not allowed.
    #[error("Self-loop not allowed on node #{0}")]
    SelfLoop(NodeId),

    /// The edge is not present.
    #[error("Edge doesn't exist between nodes #{0} and #{1}")]
    MissingEdge(NodeId, NodeId),

    /// No node carries this label.
    #[error("No node called {0:?}")]
    UnknownLabel(String),

    /// The destination is unreachable from the source.
    #[error("No path from node #{from} to node #{to}")]
    NoPath { from: NodeId, to: NodeId },

    /// Sequential IDs ran past `NodeId::MAX`.
    #[error("No node ID left after #{0}")]
    IdsExhausted(NodeId),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed graph text.
    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    /// Word list is not valid UTF-8.
    #[error("Invalid UTF-8 at byte offset {0}")]
    InvalidUtf8(usize),
}

/// Convenience result type for wordgraph operations.
pub type GraphResult<T> = Result<T, GraphError>;
