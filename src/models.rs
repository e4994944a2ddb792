//! Report models shared by the CLI and the reporters

use crate::graph::{Adjacency, Algorithm};
use serde::{Deserialize, Serialize};

/// Visitation order produced by one traversal run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraversalReport {
    pub algorithm: Algorithm,
    pub start: String,
    pub order: Vec<String>,
}

impl TraversalReport {
    /// Run `algorithm` over `graph` from `start` and capture the order
    pub fn run<G>(algorithm: Algorithm, graph: &G, start: &str) -> Self
    where
        G: Adjacency<String> + ?Sized,
    {
        let start = start.to_string();
        let order = algorithm.run(graph, &start);
        Self {
            algorithm,
            start,
            order,
        }
    }
}
