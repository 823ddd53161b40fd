//! Text I/O: word lists in, GraphViz out.

pub mod dot;
pub mod word_list;

pub use dot::{DotReader, DotWriter};
pub use word_list::{MmapWordList, WordListReader};
