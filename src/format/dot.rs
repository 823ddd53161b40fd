//! GraphViz text form of a word graph.
//!
//! ```text
//! graph {
//! 	label="words";
//!
//! 	1 [label="cat"];
//! 	2 [label="cot"];
//! 	3;
//!
//! 	1 -- {2};
//! }
//! ```
//!
//! Each node gets one edge group listing its neighbors with a larger ID, so
//! every undirected edge appears exactly once.

use std::collections::HashSet;
use std::fmt::Write as _;
use std::io::Write;
use std::path::Path;

use crate::graph::WordGraph;
use crate::types::{GraphError, GraphResult, NodeId};

/// Renders graphs as GraphViz text.
pub struct DotWriter;

impl DotWriter {
    /// Render `graph` to a string.
    pub fn render(graph: &WordGraph) -> String {
        let mut out = String::from("graph {\n");

        if let Some(name) = graph.name() {
            let _ = writeln!(out, "\tlabel=\"{}\";\n", escape(name));
        }

        for (id, label) in graph.nodes() {
            match label {
                Some(label) => {
                    let _ = writeln!(out, "\t{} [label=\"{}\"];", id, escape(label));
                }
                None => {
                    let _ = writeln!(out, "\t{};", id);
                }
            }
        }

        out.push('\n');

        for id in graph.node_ids() {
            let higher: Vec<String> = graph
                .adjacent(id)
                .filter(|&n| n > id)
                .map(|n| n.to_string())
                .collect();
            if !higher.is_empty() {
                let _ = writeln!(out, "\t{} -- {{{}}};", id, higher.join("; "));
            }
        }

        out.push_str("}\n");
        out
    }

    /// Write `graph` to any writer.
    pub fn write_to(graph: &WordGraph, writer: &mut impl Write) -> GraphResult<()> {
        writer.write_all(Self::render(graph).as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    /// Write `graph` to a file.
    pub fn write_to_file(graph: &WordGraph, path: &Path) -> GraphResult<()> {
        let file = std::fs::File::create(path)?;
        let mut writer = std::io::BufWriter::new(file);
        Self::write_to(graph, &mut writer)
    }
}

/// Parses the text produced by [`DotWriter`] back into a graph.
pub struct DotReader;

impl DotReader {
    /// Parse GraphViz text into a graph.
    ///
    /// Edge groups may name nodes that were never declared; those are created
    /// without a label, and a later declaration fills the label in.
    pub fn parse(text: &str) -> GraphResult<WordGraph> {
        let mut graph = WordGraph::new();
        let mut declared: HashSet<NodeId> = HashSet::new();
        let mut opened = false;
        let mut closed = false;

        for (index, raw) in text.lines().enumerate() {
            let line_no = index + 1;
            let line = raw.trim();

            if line.is_empty() {
                continue;
            }
            if closed {
                return Err(parse_error(line_no, "content after closing brace"));
            }
            if !opened {
                if line == "graph {" || line == "graph{" {
                    opened = true;
                    continue;
                }
                return Err(parse_error(line_no, "expected `graph {`"));
            }
            if line == "}" {
                closed = true;
                continue;
            }

            let body = line
                .strip_suffix(';')
                .ok_or_else(|| parse_error(line_no, "missing `;`"))?
                .trim_end();

            if let Some(rest) = body.strip_prefix("label=") {
                let (name, tail) =
                    parse_quoted(rest).ok_or_else(|| parse_error(line_no, "bad graph label"))?;
                if !tail.trim().is_empty() {
                    return Err(parse_error(line_no, "trailing text after graph label"));
                }
                graph.set_name(Some(name));
            } else if let Some((left, right)) = split_edge_group(body) {
                let id = parse_id(left.trim(), line_no)?;
                let group = right
                    .trim()
                    .strip_prefix('{')
                    .and_then(|g| g.strip_suffix('}'))
                    .ok_or_else(|| parse_error(line_no, "edge group must be `{...}`"))?;
                ensure_node(&mut graph, id)?;
                for item in group.split(';').map(str::trim).filter(|s| !s.is_empty()) {
                    let neighbor = parse_id(item, line_no)?;
                    ensure_node(&mut graph, neighbor)?;
                    graph.add_edge(id, neighbor)?;
                }
            } else {
                let (id, label) = parse_node(body, line_no)?;
                if !declared.insert(id) {
                    return Err(GraphError::DuplicateNode(id));
                }
                if graph.contains_node(id) {
                    graph.set_label(id, label)?;
                } else {
                    graph.add_node(id, label)?;
                }
            }
        }

        if !opened {
            return Err(parse_error(1, "empty input"));
        }
        if !closed {
            return Err(parse_error(text.lines().count(), "missing closing brace"));
        }

        Ok(graph)
    }

    /// Parse a GraphViz file into a graph.
    pub fn read_from_file(path: &Path) -> GraphResult<WordGraph> {
        let text = std::fs::read_to_string(path)?;
        Self::parse(&text)
    }
}

/// Split `<id> -- {...}` into its two sides; `None` for node declarations.
fn split_edge_group(body: &str) -> Option<(&str, &str)> {
    let (left, right) = body.split_once("--")?;
    let is_id = !left.trim().is_empty() && left.trim().bytes().all(|b| b.is_ascii_digit());
    if is_id && right.trim_start().starts_with('{') {
        Some((left, right))
    } else {
        None
    }
}

fn ensure_node(graph: &mut WordGraph, id: NodeId) -> GraphResult<()> {
    if !graph.contains_node(id) {
        graph.add_node(id, None)?;
    }
    Ok(())
}

/// `<id>` or `<id> [label="..."]`.
fn parse_node(body: &str, line_no: usize) -> GraphResult<(NodeId, Option<String>)> {
    match body.split_once('[') {
        None => Ok((parse_id(body.trim(), line_no)?, None)),
        Some((id, attrs)) => {
            let id = parse_id(id.trim(), line_no)?;
            let attrs = attrs
                .trim()
                .strip_prefix("label=")
                .ok_or_else(|| parse_error(line_no, "expected `label=` attribute"))?;
            let (label, tail) =
                parse_quoted(attrs).ok_or_else(|| parse_error(line_no, "bad node label"))?;
            if tail.trim() != "]" {
                return Err(parse_error(line_no, "expected `]` after label"));
            }
            Ok((id, Some(label)))
        }
    }
}

fn parse_id(text: &str, line_no: usize) -> GraphResult<NodeId> {
    text.parse()
        .map_err(|_| parse_error(line_no, &format!("invalid node id {:?}", text)))
}

/// Parse a leading double-quoted string, returning it unescaped with the rest.
fn parse_quoted(text: &str) -> Option<(String, &str)> {
    let inner = text.strip_prefix('"')?;
    let mut value = String::new();
    let mut chars = inner.char_indices();

    while let Some((i, c)) = chars.next() {
        match c {
            '"' => return Some((value, &inner[i + 1..])),
            '\\' => match chars.next()?.1 {
                'n' => value.push('\n'),
                other => value.push(other),
            },
            other => value.push(other),
        }
    }

    None
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            other => out.push(other),
        }
    }
    out
}

fn parse_error(line: usize, message: &str) -> GraphError {
    GraphError::Parse {
        line,
        message: message.to_string(),
    }
}
