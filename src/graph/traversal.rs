//! Breadth-first and depth-first traversal
//!
//! Every traversal returns the nodes reachable from `start` in visitation
//! order, each exactly once, with `start` first. Neighbors are always
//! explored in the order their adjacency list gives them.

use super::{Adjacency, GraphError};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::hash::Hash;
use std::str::FromStr;

/// Breadth-first visitation order from `start`.
///
/// Nodes come out in non-decreasing hop distance; nodes at the same distance
/// keep the order in which they were discovered.
pub fn bfs<N, G>(graph: &G, start: &N) -> Vec<N>
where
    N: Eq + Hash + Clone,
    G: Adjacency<N> + ?Sized,
{
    bfs_with_depths(graph, start)
        .into_iter()
        .map(|(node, _)| node)
        .collect()
}

/// Breadth-first visitation order, paired with each node's hop distance
/// from `start`.
pub fn bfs_with_depths<N, G>(graph: &G, start: &N) -> Vec<(N, usize)>
where
    N: Eq + Hash + Clone,
    G: Adjacency<N> + ?Sized,
{
    let mut order = Vec::new();
    let mut visited: FxHashSet<N> = FxHashSet::default();
    let mut queue: VecDeque<(N, usize)> = VecDeque::new();

    visited.insert(start.clone());
    queue.push_back((start.clone(), 0));

    while let Some((node, depth)) = queue.pop_front() {
        for neighbor in graph.neighbors(&node) {
            // Mark on enqueue so a node is never queued twice
            if visited.insert(neighbor.clone()) {
                queue.push_back((neighbor.clone(), depth + 1));
            }
        }
        order.push((node, depth));
    }

    order
}

/// Depth-first pre-order from `node`, by recursion.
///
/// Recursion depth grows with the longest path explored, so very deep graphs
/// can overflow the stack. Use [`dfs_iterative`] for those; it yields the
/// same order.
pub fn dfs_recursive<N, G>(graph: &G, node: &N) -> Vec<N>
where
    N: Eq + Hash + Clone,
    G: Adjacency<N> + ?Sized,
{
    fn visit<N, G>(graph: &G, node: &N, visited: &mut FxHashSet<N>, order: &mut Vec<N>)
    where
        N: Eq + Hash + Clone,
        G: Adjacency<N> + ?Sized,
    {
        visited.insert(node.clone());
        order.push(node.clone());
        for neighbor in graph.neighbors(node) {
            if !visited.contains(neighbor) {
                visit(graph, neighbor, visited, order);
            }
        }
    }

    let mut visited = FxHashSet::default();
    let mut order = Vec::new();
    visit(graph, node, &mut visited, &mut order);
    order
}

/// Depth-first pre-order from `start` with an explicit stack.
///
/// Produces exactly the order of [`dfs_recursive`].
pub fn dfs_iterative<N, G>(graph: &G, start: &N) -> Vec<N>
where
    N: Eq + Hash + Clone,
    G: Adjacency<N> + ?Sized,
{
    let mut order = Vec::new();
    let mut visited: FxHashSet<N> = FxHashSet::default();
    let mut stack: Vec<N> = vec![start.clone()];

    while let Some(node) = stack.pop() {
        if visited.contains(&node) {
            continue;
        }
        visited.insert(node.clone());

        // Push in reverse so the first listed neighbor is popped first
        for neighbor in graph.neighbors(&node).iter().rev() {
            if !visited.contains(neighbor) {
                stack.push(neighbor.clone());
            }
        }
        order.push(node);
    }

    order
}

/// Traversal strategy selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    Bfs,
    Dfs,
    DfsIterative,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Algorithm::Bfs, Algorithm::Dfs, Algorithm::DfsIterative];

    /// Run this traversal over `graph` from `start`
    pub fn run<N, G>(self, graph: &G, start: &N) -> Vec<N>
    where
        N: Eq + Hash + Clone,
        G: Adjacency<N> + ?Sized,
    {
        match self {
            Algorithm::Bfs => bfs(graph, start),
            Algorithm::Dfs => dfs_recursive(graph, start),
            Algorithm::DfsIterative => dfs_iterative(graph, start),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Algorithm::Bfs => "bfs",
            Algorithm::Dfs => "dfs",
            Algorithm::DfsIterative => "dfs-iterative",
        }
    }
}

impl FromStr for Algorithm {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bfs" | "breadth-first" => Ok(Algorithm::Bfs),
            "dfs" | "dfs-recursive" | "depth-first" => Ok(Algorithm::Dfs),
            "dfs-iterative" | "dfs_iterative" => Ok(Algorithm::DfsIterative),
            _ => Err(GraphError::UnknownAlgorithm(s.to_string())),
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
