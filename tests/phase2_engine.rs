//! Phase 2 tests: Construction, traversal, shortest paths, statistics.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;

use rand::Rng;

use wordgraph::engine::{
    degree_histogram, isolated_nodes, max_degree, shortest_path, shortest_path_between,
    GraphStats,
};
use wordgraph::graph::{
    bfs, bfs_distances, build_from_lines, component_count, connected_components, dfs,
    sweep_components, traverse, BuildReporter, GraphBuilder, WordGraph,
};
use wordgraph::types::{BuildStrategy, Edge, GraphError, NodeId, TraversalMode};

// ==================== Helpers ====================

fn graph_with(nodes: &[NodeId], edges: &[(NodeId, NodeId)]) -> WordGraph {
    let mut graph = WordGraph::new();
    for &id in nodes {
        graph.add_node(id, Some(format!("w{}", id))).unwrap();
    }
    for &(a, b) in edges {
        graph.add_edge(a, b).unwrap();
    }
    graph
}

fn edge_set(graph: &WordGraph) -> BTreeSet<Edge> {
    graph.edges().collect()
}

fn random_words(count: usize, max_len: usize) -> Vec<String> {
    let mut rng = rand::thread_rng();
    (0..count)
        .map(|_| {
            let len = rng.gen_range(1..=max_len);
            (0..len)
                .map(|_| rng.gen_range(b'a'..=b'd') as char)
                .collect()
        })
        .collect()
}

#[derive(Default)]
struct Recorded {
    added: Vec<(NodeId, String, usize)>,
    finished: Option<(usize, usize)>,
}

struct RecordingReporter(Rc<RefCell<Recorded>>);

impl BuildReporter for RecordingReporter {
    fn node_added(&mut self, id: NodeId, label: &str, new_edges: usize) {
        self.0
            .borrow_mut()
            .added
            .push((id, label.to_string(), new_edges));
    }

    fn finished(&mut self, node_count: usize, edge_count: usize) {
        self.0.borrow_mut().finished = Some((node_count, edge_count));
    }
}

// ==================== Construction Tests ====================

#[test]
fn test_build_edge_rule() {
    let graph = build_from_lines(["cat", "cot", "dog"]).unwrap();

    assert_eq!(graph.node_count(), 3);
    assert_eq!(graph.label(1).unwrap(), Some("cat"));
    assert_eq!(graph.label(2).unwrap(), Some("cot"));
    assert_eq!(graph.label(3).unwrap(), Some("dog"));
    assert!(graph.contains_edge(1, 2).unwrap());
    assert!(!graph.contains_edge(1, 3).unwrap());
    assert!(!graph.contains_edge(2, 3).unwrap());
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn test_build_links_to_all_earlier_nodes() {
    let graph = build_from_lines(["cot", "dot", "cat", "coat", "co", "cog"]).unwrap();

    // cog: cot (sub), co (del); not dot (2 edits), not cat (2), not coat (2)
    let cog: Vec<NodeId> = graph.neighbors(6).unwrap().iter().copied().collect();
    assert_eq!(cog, vec![1, 5]);
    // cot touches dot, cat, coat, co, cog
    assert_eq!(graph.degree(1).unwrap(), 5);
}

#[test]
fn test_build_duplicate_words_not_linked() {
    let graph = build_from_lines(["cat", "cat", "bat"]).unwrap();

    assert!(!graph.contains_edge(1, 2).unwrap());
    assert!(graph.contains_edge(1, 3).unwrap());
    assert!(graph.contains_edge(2, 3).unwrap());
    assert_eq!(graph.find_by_label("cat"), Some(1));
}

#[test]
fn test_build_empty_input() {
    let graph = build_from_lines(Vec::<String>::new()).unwrap();
    assert!(graph.is_empty());
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn test_builder_options() {
    let graph = GraphBuilder::new()
        .name("words")
        .first_id(0)
        .build_from_lines(["ab", "abc"])
        .unwrap();

    assert_eq!(graph.name(), Some("words"));
    assert_eq!(graph.label(0).unwrap(), Some("ab"));
    assert!(graph.contains_edge(0, 1).unwrap());
}

#[test]
fn test_first_id_at_max() {
    for strategy in [BuildStrategy::Pairwise, BuildStrategy::EditIndex] {
        let graph = GraphBuilder::new()
            .strategy(strategy)
            .first_id(NodeId::MAX)
            .build_from_lines(["a"])
            .unwrap();
        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.label(NodeId::MAX).unwrap(), Some("a"));

        let result = GraphBuilder::new()
            .strategy(strategy)
            .first_id(NodeId::MAX)
            .build_from_lines(["a", "b"]);
        match result {
            Err(GraphError::IdsExhausted(id)) => assert_eq!(id, NodeId::MAX),
            Err(e) => panic!("Expected IdsExhausted, got {:?}", e),
            Ok(_) => panic!("Expected IdsExhausted, got a graph"),
        }
    }
}

#[test]
fn test_strategies_agree() {
    let words = random_words(400, 4);

    let pairwise = GraphBuilder::new()
        .strategy(BuildStrategy::Pairwise)
        .build_from_lines(&words)
        .unwrap();
    let indexed = GraphBuilder::new()
        .strategy(BuildStrategy::EditIndex)
        .build_from_lines(&words)
        .unwrap();

    assert_eq!(pairwise.node_count(), indexed.node_count());
    assert_eq!(pairwise.edge_count(), indexed.edge_count());
    assert_eq!(edge_set(&pairwise), edge_set(&indexed));
}

#[test]
fn test_reporter_receives_progress() {
    let recorded = Rc::new(RefCell::new(Recorded::default()));
    GraphBuilder::new()
        .reporter(RecordingReporter(Rc::clone(&recorded)))
        .build_from_lines(["cat", "cot", "cog"])
        .unwrap();

    let recorded = recorded.borrow();
    assert_eq!(
        recorded.added,
        vec![
            (1, "cat".to_string(), 0),
            (2, "cot".to_string(), 1),
            (3, "cog".to_string(), 1),
        ]
    );
    assert_eq!(recorded.finished, Some((3, 2)));
}

// ==================== Traversal Tests ====================

#[test]
fn test_bfs_chain() {
    let graph = graph_with(&[1, 2, 3], &[(1, 2), (2, 3)]);
    let order = bfs(&graph, 1).unwrap();

    assert_eq!(order.rank(1), 1);
    assert_eq!(order.rank(2), 2);
    assert_eq!(order.rank(3), 3);
}

#[test]
fn test_dfs_chain() {
    let graph = graph_with(&[1, 2, 3], &[(1, 2), (2, 3)]);
    let order = dfs(&graph, 1).unwrap();

    assert_eq!(order.sequence(), &[1, 2, 3]);
}

#[test]
fn test_bfs_unreached_rank_zero() {
    let graph = graph_with(&[1, 2, 3, 4], &[(1, 2)]);
    let order = bfs(&graph, 1).unwrap();

    let map = order.to_map(&graph);
    assert_eq!(map.len(), 4);
    assert_eq!(map[&1], 1);
    assert_eq!(map[&2], 2);
    assert_eq!(map[&3], 0);
    assert_eq!(map[&4], 0);
    assert_eq!(order.rank(3), 0);
    assert_eq!(order.len(), 2);
}

#[test]
fn test_bfs_level_order() {
    // 1 -- 2, 1 -- 3, 2 -- 4, 3 -- 4, 4 -- 5
    let graph = graph_with(&[1, 2, 3, 4, 5], &[(1, 3), (1, 2), (2, 4), (3, 4), (4, 5)]);
    let order = bfs(&graph, 1).unwrap();

    assert_eq!(order.sequence(), &[1, 2, 3, 4, 5]);
}

#[test]
fn test_dfs_mark_on_push() {
    // Star-ish graph where mark-on-push and mark-on-pop disagree:
    // 1 -- 2, 1 -- 3, 2 -- 3
    let graph = graph_with(&[1, 2, 3], &[(1, 2), (1, 3), (2, 3)]);
    let order = dfs(&graph, 1).unwrap();

    // 1 pushes 2 then 3 (both marked); 3 is popped first and finds 2 already
    // marked, so 2 comes last
    assert_eq!(order.sequence(), &[1, 3, 2]);
}

#[test]
fn test_dfs_highest_neighbor_first() {
    // 1 -- 2 -- 4, 1 -- 3
    let graph = graph_with(&[1, 2, 3, 4], &[(1, 2), (1, 3), (2, 4)]);
    let order = dfs(&graph, 1).unwrap();

    assert_eq!(order.sequence(), &[1, 3, 2, 4]);
}

#[test]
fn test_traversal_unknown_start() {
    let graph = graph_with(&[1], &[]);
    assert!(matches!(bfs(&graph, 9), Err(GraphError::UnknownNode(9))));
    assert!(matches!(dfs(&graph, 9), Err(GraphError::UnknownNode(9))));
    assert!(matches!(
        bfs_distances(&graph, 9),
        Err(GraphError::UnknownNode(9))
    ));
}

#[test]
fn test_traverse_dispatch() {
    let graph = graph_with(&[1, 2, 3], &[(1, 2), (1, 3), (2, 3)]);
    let b = traverse(&graph, 1, TraversalMode::BreadthFirst).unwrap();
    let d = traverse(&graph, 1, TraversalMode::DepthFirst).unwrap();

    assert_eq!(b.sequence(), &[1, 2, 3]);
    assert_eq!(d.sequence(), &[1, 3, 2]);
}

#[test]
fn test_bfs_distances() {
    let graph = graph_with(&[1, 2, 3, 4, 5], &[(1, 2), (2, 3), (1, 4)]);
    let depths = bfs_distances(&graph, 1).unwrap();

    assert_eq!(depths[&1], 0);
    assert_eq!(depths[&2], 1);
    assert_eq!(depths[&3], 2);
    assert_eq!(depths[&4], 1);
    assert!(!depths.contains_key(&5));
}

// ==================== Component Tests ====================

#[test]
fn test_sweep_two_components() {
    let graph = graph_with(&[1, 2, 3, 4], &[(1, 2)]);
    let remaining: BTreeSet<NodeId> = graph.node_ids().collect();

    assert_eq!(sweep_components(&graph, 1, remaining).unwrap(), 2);
}

#[test]
fn test_sweep_counts_start_component() {
    let graph = graph_with(&[1, 2, 3], &[(2, 3)]);

    // Start outside the working set still counts as the first component
    let remaining: BTreeSet<NodeId> = [2, 3].into_iter().collect();
    assert_eq!(sweep_components(&graph, 1, remaining).unwrap(), 2);

    // Empty working set: just the start
    assert_eq!(sweep_components(&graph, 1, BTreeSet::new()).unwrap(), 1);
}

#[test]
fn test_sweep_unknown_nodes() {
    let graph = graph_with(&[1, 2], &[]);

    assert!(matches!(
        sweep_components(&graph, 7, BTreeSet::new()),
        Err(GraphError::UnknownNode(7))
    ));

    let remaining: BTreeSet<NodeId> = [1, 2, 9].into_iter().collect();
    assert!(matches!(
        sweep_components(&graph, 1, remaining),
        Err(GraphError::UnknownNode(9))
    ));
}

#[test]
fn test_many_components_iterative() {
    // 20k isolated nodes: one sweep per node without growing the stack
    let mut graph = WordGraph::new();
    for id in 0..20_000 {
        graph.add_node(id, None).unwrap();
    }
    let remaining: BTreeSet<NodeId> = graph.node_ids().collect();

    assert_eq!(sweep_components(&graph, 0, remaining).unwrap(), 20_000);
    assert_eq!(component_count(&graph), 20_000);
}

#[test]
fn test_connected_components_listing() {
    let graph = graph_with(&[1, 2, 3, 4, 5, 6], &[(5, 1), (3, 4), (4, 6)]);
    let components = connected_components(&graph);

    assert_eq!(components, vec![vec![1, 5], vec![2], vec![3, 4, 6]]);
    assert_eq!(component_count(&graph), 3);
    assert_eq!(component_count(&WordGraph::new()), 0);
}

// ==================== Shortest Path Tests ====================

#[test]
fn test_shortest_path_by_label() {
    let graph = build_from_lines(["cold", "cord", "card", "ward", "warm", "word", "worm", "corm"])
        .unwrap();
    let path = shortest_path(&graph, "cold", "warm").unwrap();

    let words: Vec<&str> = path
        .iter()
        .map(|&id| graph.label(id).unwrap().unwrap())
        .collect();
    assert_eq!(words.first(), Some(&"cold"));
    assert_eq!(words.last(), Some(&"warm"));
    assert_eq!(path.len() - 1, 4);
    for pair in path.windows(2) {
        assert!(graph.contains_edge(pair[0], pair[1]).unwrap());
    }
}

#[test]
fn test_shortest_path_same_node() {
    let graph = build_from_lines(["cat", "cot"]).unwrap();
    assert_eq!(shortest_path(&graph, "cat", "cat").unwrap(), vec![1]);
}

#[test]
fn test_shortest_path_unknown_label() {
    let graph = build_from_lines(["cat", "cot"]).unwrap();
    match shortest_path(&graph, "cat", "dog").unwrap_err() {
        GraphError::UnknownLabel(label) => assert_eq!(label, "dog"),
        e => panic!("Expected UnknownLabel, got {:?}", e),
    }
    assert!(matches!(
        shortest_path(&graph, "emu", "cat"),
        Err(GraphError::UnknownLabel(_))
    ));
}

#[test]
fn test_shortest_path_unreachable() {
    let graph = build_from_lines(["cat", "cot", "dog", "dig"]).unwrap();
    match shortest_path(&graph, "cat", "dig").unwrap_err() {
        GraphError::NoPath { from: 1, to: 4 } => {}
        e => panic!("Expected NoPath, got {:?}", e),
    }
}

#[test]
fn test_shortest_path_through_node_zero() {
    // Node 0 in the middle of the path must not end reconstruction early
    let graph = graph_with(&[5, 0, 7], &[(5, 0), (0, 7)]);
    assert_eq!(shortest_path_between(&graph, 5, 7).unwrap(), vec![5, 0, 7]);
    assert_eq!(shortest_path_between(&graph, 0, 7).unwrap(), vec![0, 7]);
}

#[test]
fn test_shortest_path_unknown_ids() {
    let graph = graph_with(&[1], &[]);
    assert!(matches!(
        shortest_path_between(&graph, 1, 2),
        Err(GraphError::UnknownNode(2))
    ));
    assert!(matches!(
        shortest_path_between(&graph, 3, 1),
        Err(GraphError::UnknownNode(3))
    ));
}

#[test]
fn test_shortest_path_matches_bfs_distance() {
    let words = random_words(300, 3);
    let graph = build_from_lines(&words).unwrap();
    let mut rng = rand::thread_rng();

    for _ in 0..50 {
        let from = rng.gen_range(1..=words.len() as NodeId);
        let to = rng.gen_range(1..=words.len() as NodeId);
        let depths = bfs_distances(&graph, from).unwrap();

        match shortest_path_between(&graph, from, to) {
            Ok(path) => {
                assert_eq!(path[0], from);
                assert_eq!(*path.last().unwrap(), to);
                assert_eq!((path.len() - 1) as u32, depths[&to]);
                for pair in path.windows(2) {
                    assert!(graph.contains_edge(pair[0], pair[1]).unwrap());
                }
            }
            Err(GraphError::NoPath { .. }) => assert!(!depths.contains_key(&to)),
            Err(e) => panic!("unexpected error {:?}", e),
        }
    }
}

// ==================== Statistics Tests ====================

#[test]
fn test_isolated_nodes() {
    let graph = graph_with(&[1, 2, 3, 4], &[(2, 3)]);
    assert_eq!(isolated_nodes(&graph), vec![1, 4]);
}

#[test]
fn test_degree_histogram() {
    let graph = graph_with(&[1, 2, 3, 4, 5], &[(1, 2), (1, 3), (1, 4)]);
    let histogram = degree_histogram(&graph);

    let expected: BTreeMap<usize, usize> = [(0, 1), (1, 3), (3, 1)].into_iter().collect();
    assert_eq!(histogram, expected);
    assert_eq!(max_degree(&graph), 3);
    assert_eq!(max_degree(&WordGraph::new()), 0);
}

#[test]
fn test_graph_stats() {
    let graph = build_from_lines(["cat", "cot", "cog", "dog", "emu", "elk"]).unwrap();
    let stats = GraphStats::collect(&graph);

    // cat-cot, cot-cog, cog-dog
    assert_eq!(stats.nodes, 6);
    assert_eq!(stats.edges, 3);
    assert_eq!(stats.components, 3);
    assert_eq!(stats.isolated, 2);
    assert_eq!(stats.max_degree, 2);
    assert_eq!(stats.degree_histogram.values().sum::<usize>(), 6);
    assert!((stats.average_degree() - 1.0).abs() < f64::EPSILON);

    let json = serde_json::to_value(&stats).unwrap();
    assert_eq!(json["components"], 3);
}
