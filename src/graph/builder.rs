//! Builds word graphs from ordered lines of text.

use crate::index::{levenshtein, EditIndex};
use crate::types::{
    BuildStrategy, GraphError, GraphResult, NodeId, DEFAULT_FIRST_ID, LINK_DISTANCE,
};

use super::WordGraph;

/// Receives progress from a running build.
///
/// The engine never logs; callers that want progress output plug in a
/// reporter. Every method defaults to a no-op.
pub trait BuildReporter {
    /// A node was inserted together with `new_edges` edges to earlier nodes.
    fn node_added(&mut self, _id: NodeId, _label: &str, _new_edges: usize) {}

    /// The build completed.
    fn finished(&mut self, _node_count: usize, _edge_count: usize) {}
}

/// Reporter that discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentReporter;

impl BuildReporter for SilentReporter {}

/// Fluent builder for constructing a WordGraph from lines.
pub struct GraphBuilder {
    name: Option<String>,
    strategy: BuildStrategy,
    first_id: NodeId,
    reporter: Box<dyn BuildReporter>,
}

impl GraphBuilder {
    /// Create a new builder with the default options.
    pub fn new() -> Self {
        Self {
            name: None,
            strategy: BuildStrategy::default(),
            first_id: DEFAULT_FIRST_ID,
            reporter: Box::new(SilentReporter),
        }
    }

    /// Set the display name of the built graph.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Choose how distance-1 neighbors are found.
    pub fn strategy(mut self, strategy: BuildStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Set the ID given to the first line.
    pub fn first_id(mut self, id: NodeId) -> Self {
        self.first_id = id;
        self
    }

    /// Install a progress reporter.
    pub fn reporter(mut self, reporter: impl BuildReporter + 'static) -> Self {
        self.reporter = Box::new(reporter);
        self
    }

    /// Build a graph with one node per line, IDs assigned in input order.
    ///
    /// Each new node is linked to every earlier node whose label is at edit
    /// distance exactly 1.
    pub fn build_from_lines<I, S>(mut self, lines: I) -> GraphResult<WordGraph>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut graph = WordGraph::new();
        graph.set_name(self.name.take());

        match self.strategy {
            BuildStrategy::Pairwise => self.build_pairwise(&mut graph, lines)?,
            BuildStrategy::EditIndex => self.build_indexed(&mut graph, lines)?,
        }

        self.reporter
            .finished(graph.node_count(), graph.edge_count());
        Ok(graph)
    }

    fn build_pairwise<I, S>(&mut self, graph: &mut WordGraph, lines: I) -> GraphResult<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        // Insertion order, kept alongside the graph to avoid re-reading labels
        let mut seen: Vec<(NodeId, String)> = Vec::new();
        let mut next = Some(self.first_id);
        let mut last = self.first_id;

        for line in lines {
            let id = next.ok_or(GraphError::IdsExhausted(last))?;
            let label = line.as_ref();
            graph.add_node(id, Some(label.to_string()))?;

            let mut new_edges = 0;
            for (earlier, earlier_label) in &seen {
                if levenshtein(label, earlier_label) == LINK_DISTANCE {
                    graph.add_edge(id, *earlier)?;
                    new_edges += 1;
                }
            }

            self.reporter.node_added(id, label, new_edges);
            seen.push((id, label.to_string()));
            last = id;
            next = id.checked_add(1);
        }

        Ok(())
    }

    fn build_indexed<I, S>(&mut self, graph: &mut WordGraph, lines: I) -> GraphResult<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut index = EditIndex::new();
        let mut next = Some(self.first_id);
        let mut last = self.first_id;

        for line in lines {
            let id = next.ok_or(GraphError::IdsExhausted(last))?;
            let label = line.as_ref();
            graph.add_node(id, Some(label.to_string()))?;

            let candidates = index.neighbors(label);
            for &earlier in &candidates {
                graph.add_edge(id, earlier)?;
            }

            self.reporter.node_added(id, label, candidates.len());
            index.insert(label, id);
            last = id;
            next = id.checked_add(1);
        }

        Ok(())
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Build a graph from lines with the default options.
pub fn build_from_lines<I, S>(lines: I) -> GraphResult<WordGraph>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    GraphBuilder::new().build_from_lines(lines)
}
