//! All data types for the wordgraph library.

pub mod edge;
pub mod error;
pub mod mode;

pub use edge::Edge;
pub use error::{GraphError, GraphResult};
pub use mode::{BuildStrategy, TraversalMode};

/// Node identifier. Every value, including 0, is a legal identifier.
pub type NodeId = u64;

/// Identifier assigned to the first line of a word list.
pub const DEFAULT_FIRST_ID: NodeId = 1;

/// Edit distance at which two labels are joined by an edge.
pub const LINK_DISTANCE: usize = 1;
