use std::collections::BTreeSet;

use graphwalk::traversal;
use graphwalk::{GraphDescription, VertexGraph};
use petgraph::algo::has_path_connecting;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::Dfs;
use proptest::prelude::*;

/// Random graphs with cycles, self-loops and duplicate edges.
fn arb_graph() -> impl Strategy<Value = (Vec<i32>, Vec<(usize, usize)>)> {
    (1usize..24).prop_flat_map(|n| {
        (
            proptest::collection::vec(-50i32..50, n),
            proptest::collection::vec((0..n, 0..n), 0..n * 3),
        )
    })
}

fn description(values: &[i32], edges: &[(usize, usize)]) -> GraphDescription<i32> {
    let mut adjacency = vec![Vec::new(); values.len()];
    for &(u, v) in edges {
        adjacency[u].push(v);
    }
    GraphDescription::from_adjacency(values.iter().copied(), adjacency)
}

fn oracle(values: &[i32], edges: &[(usize, usize)], increasing_only: bool) -> DiGraph<i32, ()> {
    let mut g = DiGraph::new();
    for &v in values {
        g.add_node(v);
    }
    for &(u, v) in edges {
        if !increasing_only || values[v] > values[u] {
            g.add_edge(NodeIndex::new(u), NodeIndex::new(v), ());
        }
    }
    g
}

fn oracle_reachable(g: &DiGraph<i32, ()>, start: usize) -> BTreeSet<usize> {
    let mut dfs = Dfs::new(g, NodeIndex::new(start));
    let mut seen = BTreeSet::new();
    while let Some(n) = dfs.next(g) {
        seen.insert(n.index());
    }
    seen
}

proptest! {
    #[test]
    fn reachability_queries_match_petgraph((values, edges) in arb_graph(), start_seed in any::<usize>()) {
        let start = start_seed % values.len();
        let expected = oracle_reachable(&oracle(&values, &edges, false), start);
        let desc = description(&values, &edges);

        VertexGraph::new(|mut graph| {
            let ids = desc.load_into(&mut graph).unwrap();
            let s = Some(ids[start]);

            let reach = traversal::reachable(&graph, s);
            let got: BTreeSet<usize> = reach.iter().map(|id| id.index()).collect();
            assert_eq!(got, expected);

            // Each reachable vertex printed exactly once.
            let mut printed = Vec::new();
            let emitted = traversal::print_vertex_vals(&graph, s, &mut printed).unwrap();
            assert_eq!(emitted, reach.len());
            let mut want: Vec<i32> = reach.iter().map(|id| *graph.value(id)).collect();
            printed.sort_unstable();
            want.sort_unstable();
            assert_eq!(printed, want);

            // Max is the true maximum of the reachable values.
            let true_max = expected.iter().map(|&i| values[i]).max().unwrap();
            assert_eq!(traversal::max(&graph, s), true_max);

            // Leaves are exactly the reachable vertices without edges.
            let leaves = traversal::leaves(&graph, s);
            assert!(leaves.is_subset(&reach));
            for id in &reach {
                assert_eq!(leaves.contains(id), graph.neighbors(id).is_empty());
            }
        });
    }

    #[test]
    fn increasing_path_matches_filtered_reachability(
        (values, edges) in arb_graph(),
        start_seed in any::<usize>(),
        end_seed in any::<usize>(),
    ) {
        let start = start_seed % values.len();
        let end = end_seed % values.len();
        let filtered = oracle(&values, &edges, true);
        let expected = has_path_connecting(&filtered, NodeIndex::new(start), NodeIndex::new(end), None);
        let desc = description(&values, &edges);

        VertexGraph::new(|mut graph| {
            let ids = desc.load_into(&mut graph).unwrap();
            let (s, e) = (Some(ids[start]), Some(ids[end]));

            assert_eq!(traversal::has_strictly_increasing_path(&graph, s, e), Ok(expected));
            assert_eq!(traversal::has_strictly_increasing_path(&graph, s, s), Ok(true));

            let path = traversal::increasing_path(&graph, s, e).unwrap();
            assert_eq!(path.is_some(), expected);
            if let Some(path) = path {
                assert_eq!(path.first(), Some(&ids[start]));
                assert_eq!(path.last(), Some(&ids[end]));
                for pair in path.windows(2) {
                    assert!(graph.neighbors(pair[0]).contains(&pair[1]));
                    assert!(graph.value(pair[0]) < graph.value(pair[1]));
                }
            }

            // No path at all implies no increasing path.
            if !traversal::reachable(&graph, s).contains(ids[end]) {
                assert_eq!(traversal::has_strictly_increasing_path(&graph, s, e), Ok(false));
            }
        });
    }
}
