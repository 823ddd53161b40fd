//! Command-line front end: loading word lists and printing reports.

pub mod commands;

pub use commands::{load_graph, LoadOptions, LogReporter};
