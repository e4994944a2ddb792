//! Adjacency-list graphs and traversal
//!
//! A graph is a mapping from node to an ordered list of neighbors. Nodes that
//! never appear as a key simply have no outgoing edges, so a neighbor can be
//! referenced before (or without) being declared.
//!
//! Traversals work over anything implementing [`Adjacency`]: the
//! insertion-ordered [`Graph`] defined here, or a plain `HashMap`,
//! `BTreeMap` or `IndexMap` of `node -> Vec<node>`.

mod loader;
pub mod samples;
mod traversal;

pub use loader::{load_graph, parse_graph, GraphFormat};
pub use traversal::{bfs, bfs_with_depths, dfs_iterative, dfs_recursive, Algorithm};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};
use thiserror::Error;

/// Errors from the graph module: file loading and algorithm names
#[derive(Error, Debug)]
pub enum GraphError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse {format} graph: {message}")]
    Parse { format: GraphFormat, message: String },

    #[error("Unsupported graph file '{0}'. Use a .json or .toml adjacency table")]
    UnsupportedFormat(String),

    #[error("Unknown algorithm '{0}'. Valid algorithms: bfs, dfs, dfs-iterative")]
    UnknownAlgorithm(String),
}

pub type GraphResult<T> = Result<T, GraphError>;

/// Read-only view of outgoing edges.
///
/// `neighbors` must return an empty slice for nodes it has never heard of.
pub trait Adjacency<N> {
    fn neighbors(&self, node: &N) -> &[N];
}

impl<N: Eq + Hash, S: BuildHasher> Adjacency<N> for HashMap<N, Vec<N>, S> {
    fn neighbors(&self, node: &N) -> &[N] {
        self.get(node).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl<N: Eq + Hash, S: BuildHasher> Adjacency<N> for IndexMap<N, Vec<N>, S> {
    fn neighbors(&self, node: &N) -> &[N] {
        self.get(node).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl<N: Ord> Adjacency<N> for BTreeMap<N, Vec<N>> {
    fn neighbors(&self, node: &N) -> &[N] {
        self.get(node).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Directed graph keeping nodes in insertion order
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
#[serde(bound(
    serialize = "N: Serialize + Eq + Hash",
    deserialize = "N: Deserialize<'de> + Eq + Hash"
))]
pub struct Graph<N = String> {
    adjacency: IndexMap<N, Vec<N>>,
}

// Map equality: same keys with the same neighbor lists, key order ignored
impl<N: Eq + Hash> PartialEq for Graph<N> {
    fn eq(&self, other: &Self) -> bool {
        self.adjacency == other.adjacency
    }
}

impl<N: Eq + Hash> Eq for Graph<N> {}

impl<N> Default for Graph<N> {
    fn default() -> Self {
        Self {
            adjacency: IndexMap::new(),
        }
    }
}

impl<N: Eq + Hash + Clone> Graph<N> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a node with no edges. No-op if it already exists.
    pub fn add_node(&mut self, node: N) {
        self.adjacency.entry(node).or_default();
    }

    /// Append `to` to the neighbor list of `from`.
    ///
    /// Only `from` is declared as a key; `to` stays implicit until it gets
    /// its own edges or an explicit [`add_node`](Self::add_node).
    pub fn add_edge(&mut self, from: N, to: N) {
        self.adjacency.entry(from).or_default().push(to);
    }

    pub fn contains(&self, node: &N) -> bool {
        self.adjacency.contains_key(node)
    }

    /// Number of declared nodes (keys)
    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    /// Declared nodes in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.adjacency.keys()
    }
}

impl<N: Eq + Hash> Adjacency<N> for Graph<N> {
    fn neighbors(&self, node: &N) -> &[N] {
        self.adjacency.neighbors(node)
    }
}

impl<N: Eq + Hash> FromIterator<(N, Vec<N>)> for Graph<N> {
    fn from_iter<I: IntoIterator<Item = (N, Vec<N>)>>(iter: I) -> Self {
        Self {
            adjacency: iter.into_iter().collect(),
        }
    }
}

impl<N: Eq + Hash> From<IndexMap<N, Vec<N>>> for Graph<N> {
    fn from(adjacency: IndexMap<N, Vec<N>>) -> Self {
        Self { adjacency }
    }
}

/// Build a `Graph<String>` from string literals, e.g. `[("A", &["B", "C"][..])]`
pub fn graph_from_str_pairs<'a, I>(pairs: I) -> Graph<String>
where
    I: IntoIterator<Item = (&'a str, &'a [&'a str])>,
{
    pairs
        .into_iter()
        .map(|(node, nbrs)| {
            (
                node.to_string(),
                nbrs.iter().map(|n| n.to_string()).collect(),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_node_has_no_neighbors() {
        let g = graph_from_str_pairs([("A", &["B"][..])]);
        assert_eq!(g.neighbors(&"A".to_string()), ["B".to_string()]);
        assert!(g.neighbors(&"B".to_string()).is_empty());
        assert!(g.neighbors(&"Z".to_string()).is_empty());
    }

    #[test]
    fn test_add_edge_preserves_order() {
        let mut g = Graph::new();
        g.add_edge(1, 3);
        g.add_edge(1, 2);
        g.add_edge(0, 1);
        assert_eq!(g.neighbors(&1), [3, 2]);
        assert_eq!(g.nodes().copied().collect::<Vec<_>>(), vec![1, 0]);
        assert_eq!(g.len(), 2);
        assert_eq!(g.edge_count(), 3);
    }

    #[test]
    fn test_add_node_is_idempotent() {
        let mut g = Graph::new();
        g.add_edge("a", "b");
        g.add_node("a");
        g.add_node("b");
        assert_eq!(g.neighbors(&"a"), ["b"]);
        assert!(g.contains(&"b"));
        assert_eq!(g.len(), 2);
    }

    #[test]
    fn test_std_maps_implement_adjacency() {
        let mut hm: HashMap<u32, Vec<u32>> = HashMap::new();
        hm.insert(1, vec![2]);
        assert_eq!(hm.neighbors(&1), [2]);
        assert!(hm.neighbors(&2).is_empty());

        let mut bt: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
        bt.insert("x", vec!["y", "z"]);
        assert_eq!(bt.neighbors(&"x"), ["y", "z"]);
    }

    #[test]
    fn test_from_indexmap_keeps_adjacency() {
        let mut map = IndexMap::new();
        map.insert('b', vec!['c']);
        map.insert('a', vec!['b']);
        let g = Graph::from(map);
        assert_eq!(g.nodes().copied().collect::<Vec<_>>(), vec!['b', 'a']);
        assert_eq!(g.neighbors(&'a'), ['b']);
        assert_eq!(g, [('a', vec!['b']), ('b', vec!['c'])].into_iter().collect::<Graph<char>>());
    }

    #[test]
    fn test_graph_json_roundtrip_keeps_key_order() {
        let g = graph_from_str_pairs([("Z", &["A"][..]), ("A", &[][..])]);
        let json = serde_json::to_string(&g).expect("serialize graph");
        assert_eq!(json, r#"{"Z":["A"],"A":[]}"#);
    }
}
