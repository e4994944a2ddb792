//! Property-based tests for the traversal functions
//!
//! Random directed graphs (cycles, self-loops, dangling references and
//! duplicate edges included) are generated and every traversal is checked
//! against the reachable set computed independently.

use algokit::graph::{bfs, bfs_with_depths, dfs_iterative, dfs_recursive, Adjacency, Graph};
use proptest::prelude::*;
use std::collections::{BTreeSet, HashMap, HashSet};

/// Graphs over nodes 0..n; neighbor ids may exceed n to model undeclared nodes
fn arb_graph() -> impl Strategy<Value = Graph<u8>> {
    (1u8..24).prop_flat_map(|n| {
        prop::collection::vec(
            (0..n, prop::collection::vec(0..n.saturating_add(4), 0..6)),
            0..(n as usize * 2),
        )
        .prop_map(|entries| {
            let mut g = Graph::new();
            for (node, nbrs) in entries {
                g.add_node(node);
                for nbr in nbrs {
                    g.add_edge(node, nbr);
                }
            }
            g
        })
    })
}

/// Reachable set by naive fixpoint, independent of the traversal code
fn reachable(g: &Graph<u8>, start: u8) -> BTreeSet<u8> {
    let mut seen = BTreeSet::from([start]);
    loop {
        let next: BTreeSet<u8> = seen
            .iter()
            .flat_map(|n| g.neighbors(n).iter().copied())
            .chain(seen.iter().copied())
            .collect();
        if next == seen {
            return seen;
        }
        seen = next;
    }
}

fn no_duplicates(order: &[u8]) -> bool {
    order.iter().collect::<HashSet<_>>().len() == order.len()
}

proptest! {
    #[test]
    fn prop_bfs_visits_exactly_the_reachable_set(g in arb_graph(), start in 0u8..28) {
        let order = bfs(&g, &start);
        prop_assert!(no_duplicates(&order));
        let visited: BTreeSet<u8> = order.iter().copied().collect();
        prop_assert_eq!(visited, reachable(&g, start));
    }

    #[test]
    fn prop_dfs_variants_agree(g in arb_graph(), start in 0u8..28) {
        prop_assert_eq!(dfs_iterative(&g, &start), dfs_recursive(&g, &start));
    }

    #[test]
    fn prop_dfs_visits_exactly_the_reachable_set(g in arb_graph(), start in 0u8..28) {
        let order = dfs_recursive(&g, &start);
        prop_assert!(no_duplicates(&order));
        let visited: BTreeSet<u8> = order.iter().copied().collect();
        prop_assert_eq!(visited, reachable(&g, start));
    }

    #[test]
    fn prop_start_comes_first(g in arb_graph(), start in 0u8..28) {
        prop_assert_eq!(bfs(&g, &start)[0], start);
        prop_assert_eq!(dfs_recursive(&g, &start)[0], start);
        prop_assert_eq!(dfs_iterative(&g, &start)[0], start);
    }

    #[test]
    fn prop_bfs_depths_are_shortest_and_non_decreasing(g in arb_graph(), start in 0u8..28) {
        let layered = bfs_with_depths(&g, &start);
        let depths: Vec<usize> = layered.iter().map(|(_, d)| *d).collect();
        prop_assert!(depths.windows(2).all(|w| w[0] <= w[1]));

        // Every edge out of a visited node reaches a node at most one hop further
        let depth_of: HashMap<u8, usize> = layered.iter().copied().collect();
        for (node, depth) in &layered {
            for nbr in g.neighbors(node) {
                prop_assert!(depth_of[nbr] <= depth + 1);
            }
        }
    }

    #[test]
    fn prop_traversal_does_not_mutate_graph(g in arb_graph(), start in 0u8..28) {
        let before = g.clone();
        let _ = bfs(&g, &start);
        let _ = dfs_recursive(&g, &start);
        let _ = dfs_iterative(&g, &start);
        prop_assert_eq!(before, g);
    }
}
