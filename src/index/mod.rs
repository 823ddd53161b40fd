//! Index structures for fast lookup. Each index is independent and incrementally updateable.

pub mod distance;
pub mod edit_index;
pub mod label_index;

pub use distance::{is_one_edit, levenshtein};
pub use edit_index::EditIndex;
pub use label_index::LabelIndex;
