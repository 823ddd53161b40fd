//! CLI command implementations.

use std::path::Path;
use std::time::Instant;

use crate::engine::{isolated_nodes, shortest_path, GraphStats};
use crate::format::{DotWriter, MmapWordList, WordListReader};
use crate::graph::{connected_components, traverse, BuildReporter, GraphBuilder, WordGraph};
use crate::types::{BuildStrategy, GraphError, GraphResult, NodeId, TraversalMode};

/// How a word list is turned into a graph.
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    /// Neighbor search strategy.
    pub strategy: BuildStrategy,
    /// Read the word list through a memory map.
    pub mmap: bool,
    /// Display name for the graph.
    pub name: Option<String>,
}

/// Forwards build progress to the `log` facade.
pub struct LogReporter {
    every: u64,
}

impl LogReporter {
    /// Log a progress line every `every` nodes.
    pub fn new(every: u64) -> Self {
        Self { every: every.max(1) }
    }
}

impl BuildReporter for LogReporter {
    fn node_added(&mut self, id: NodeId, label: &str, new_edges: usize) {
        if id % self.every == 0 {
            log::debug!("node #{} {:?}: {} new edge(s)", id, label, new_edges);
        }
    }

    fn finished(&mut self, node_count: usize, edge_count: usize) {
        log::info!("built graph: {} nodes, {} edges", node_count, edge_count);
    }
}

/// Read a word list and build its graph.
pub fn load_graph(path: &Path, options: &LoadOptions) -> GraphResult<WordGraph> {
    let started = Instant::now();

    let mut builder = GraphBuilder::new()
        .strategy(options.strategy)
        .reporter(LogReporter::new(1000));
    if let Some(name) = &options.name {
        builder = builder.name(name.clone());
    }

    let graph = if options.mmap {
        let words = MmapWordList::open(path)?;
        log::debug!("mapped {} ({} bytes)", path.display(), words.byte_len());
        builder.build_from_lines(words.lines())?
    } else {
        let words = WordListReader::read_from_file(path)?;
        log::debug!("read {} lines from {}", words.len(), path.display());
        builder.build_from_lines(&words)?
    };

    log::info!(
        "{} strategy took {:.2?}",
        options.strategy.name(),
        started.elapsed()
    );
    Ok(graph)
}

/// Print the full structural report for a word list.
pub fn cmd_stats(path: &Path, options: &LoadOptions, json: bool) -> GraphResult<()> {
    let graph = load_graph(path, options)?;
    let stats = GraphStats::collect(&graph);

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&stats).unwrap_or_default()
        );
    } else {
        println!("Graph Statistics:");
        println!("  Nodes: {}", stats.nodes);
        println!("  Edges: {}", stats.edges);
        println!("  Connected components: {}", stats.components);
        println!("  Isolated nodes: {}", stats.isolated);
        println!("  Avg degree: {:.2}", stats.average_degree());
        println!("  Max degree: {}", stats.max_degree);
        println!();
        println!("  Degree distribution:");
        for (degree, count) in &stats.degree_histogram {
            println!(
                "    {} neighbor{}: {} nodes",
                degree,
                if *degree == 1 { "" } else { "s" },
                count
            );
        }
    }
    Ok(())
}

/// Render the graph as GraphViz text to stdout or a file.
pub fn cmd_dot(path: &Path, options: &LoadOptions, output: Option<&Path>) -> GraphResult<()> {
    let graph = load_graph(path, options)?;
    match output {
        Some(out) => {
            DotWriter::write_to_file(&graph, out)?;
            log::info!("wrote {}", out.display());
        }
        None => print!("{}", DotWriter::render(&graph)),
    }
    Ok(())
}

/// Print the shortest path between two words.
pub fn cmd_path(
    path: &Path,
    options: &LoadOptions,
    from: &str,
    to: &str,
    json: bool,
) -> GraphResult<()> {
    let graph = load_graph(path, options)?;
    let ids = shortest_path(&graph, from, to)?;
    let words: Vec<&str> = ids
        .iter()
        .map(|&id| graph.label(id).ok().flatten().unwrap_or(""))
        .collect();

    if json {
        let info = serde_json::json!({
            "from": from,
            "to": to,
            "hops": ids.len() - 1,
            "ids": ids,
            "words": words,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        println!("{} hop(s): {}", ids.len() - 1, words.join(" -> "));
    }
    Ok(())
}

/// Print the visitation order of a traversal.
pub fn cmd_traverse(
    path: &Path,
    options: &LoadOptions,
    start: NodeId,
    mode: TraversalMode,
    json: bool,
) -> GraphResult<()> {
    let graph = load_graph(path, options)?;
    let order = traverse(&graph, start, mode)?;

    if json {
        let visits: Vec<serde_json::Value> = order
            .sequence()
            .iter()
            .map(|&id| {
                serde_json::json!({
                    "id": id,
                    "rank": order.rank(id),
                    "word": graph.label(id).ok().flatten(),
                })
            })
            .collect();
        let info = serde_json::json!({
            "start": start,
            "mode": mode.name(),
            "visited": order.len(),
            "unreached": graph.node_count() - order.len(),
            "order": visits,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        println!(
            "{} from node {}: {} of {} nodes reached",
            mode.name().to_uppercase(),
            start,
            order.len(),
            graph.node_count()
        );
        for &id in order.sequence() {
            println!(
                "  {:>6}. #{} {}",
                order.rank(id),
                id,
                graph.label(id).ok().flatten().unwrap_or("")
            );
        }
    }
    Ok(())
}

/// List connected components, largest first.
pub fn cmd_components(
    path: &Path,
    options: &LoadOptions,
    limit: usize,
    json: bool,
) -> GraphResult<()> {
    let graph = load_graph(path, options)?;
    let mut components = connected_components(&graph);
    let total = components.len();
    // Stable sort keeps smallest-member order among equal sizes
    components.sort_by(|a, b| b.len().cmp(&a.len()));
    components.truncate(limit);

    if json {
        let list: Vec<serde_json::Value> = components
            .iter()
            .map(|members| {
                serde_json::json!({
                    "size": members.len(),
                    "members": members,
                })
            })
            .collect();
        let info = serde_json::json!({
            "components": total,
            "largest": list,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        println!("Connected components: {}", total);
        for members in &components {
            let words: Vec<&str> = members
                .iter()
                .take(8)
                .map(|&id| graph.label(id).ok().flatten().unwrap_or(""))
                .collect();
            let more = if members.len() > 8 { ", ..." } else { "" };
            println!("  {} nodes: {}{}", members.len(), words.join(", "), more);
        }
    }
    Ok(())
}

/// List nodes without neighbors.
pub fn cmd_isolated(path: &Path, options: &LoadOptions, json: bool) -> GraphResult<()> {
    let graph = load_graph(path, options)?;
    let isolated = isolated_nodes(&graph);

    if json {
        let list: Vec<serde_json::Value> = isolated
            .iter()
            .map(|&id| serde_json::json!({"id": id, "word": graph.label(id).ok().flatten()}))
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&list).unwrap_or_default()
        );
    } else {
        println!("Isolated nodes: {}", isolated.len());
        for id in isolated {
            println!("  #{} {}", id, graph.label(id).ok().flatten().unwrap_or(""));
        }
    }
    Ok(())
}

/// Show a single word: its ID, degree and neighbors.
pub fn cmd_word(path: &Path, options: &LoadOptions, word: &str, json: bool) -> GraphResult<()> {
    let graph = load_graph(path, options)?;
    let id = graph
        .find_by_label(word)
        .ok_or_else(|| GraphError::UnknownLabel(word.to_string()))?;
    let neighbors: Vec<(NodeId, &str)> = graph
        .neighbors(id)?
        .iter()
        .map(|&n| (n, graph.label(n).ok().flatten().unwrap_or("")))
        .collect();
    let duplicates = graph.nodes_with_label(word);

    if json {
        let info = serde_json::json!({
            "id": id,
            "word": word,
            "degree": neighbors.len(),
            "also_at": duplicates[1..].to_vec(),
            "neighbors": neighbors
                .iter()
                .map(|(n, w)| serde_json::json!({"id": n, "word": w}))
                .collect::<Vec<_>>(),
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        println!("Node {}", id);
        println!("  Word: {}", word);
        println!("  Degree: {}", neighbors.len());
        if duplicates.len() > 1 {
            println!("  Also at: {:?}", &duplicates[1..]);
        }
        for (n, w) in neighbors {
            println!("    #{} {}", n, w);
        }
    }
    Ok(())
}
