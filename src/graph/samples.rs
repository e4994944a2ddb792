//! Small fixed graphs for demos and tests

use super::{graph_from_str_pairs, Graph};

/// Tree with two levels, used to show breadth-first layering
pub fn bfs_sample() -> Graph<String> {
    graph_from_str_pairs([
        ("A", &["B", "C"][..]),
        ("B", &["D", "E"][..]),
        ("C", &["F"][..]),
        ("D", &[][..]),
        ("E", &[][..]),
        ("F", &[][..]),
    ])
}

/// Two branches, used to show both depth-first variants agree
pub fn dfs_sample() -> Graph<String> {
    graph_from_str_pairs([
        ("A", &["B", "C"][..]),
        ("B", &["D"][..]),
        ("C", &["E"][..]),
        ("D", &[][..]),
        ("E", &[][..]),
    ])
}
