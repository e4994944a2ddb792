//! Traverse command - print visitation orders for a graph file

use super::OutputSettings;
use algokit::graph::{load_graph, Algorithm};
use algokit::models::TraversalReport;
use algokit::reporters::render_traversals;
use anyhow::{Context, Result};
use std::path::Path;
use tracing::{info, warn};

/// Expand an algorithm selector; "all" runs every traversal
pub(crate) fn select_algorithms(selector: &str) -> Result<Vec<Algorithm>> {
    if selector.eq_ignore_ascii_case("all") {
        return Ok(Algorithm::ALL.to_vec());
    }
    Ok(vec![selector.parse::<Algorithm>()?])
}

pub fn run(graph_path: &Path, start: &str, selector: &str, output: OutputSettings) -> Result<()> {
    let algorithms = select_algorithms(selector)?;
    let graph = load_graph(graph_path)
        .with_context(|| format!("Failed to load graph from {}", graph_path.display()))?;

    if !graph.contains(&start.to_string()) {
        warn!(
            "Start node '{}' is not declared in {}; it has no outgoing edges",
            start,
            graph_path.display()
        );
    }

    let reports: Vec<TraversalReport> = algorithms
        .into_iter()
        .map(|algorithm| TraversalReport::run(algorithm, &graph, start))
        .collect();
    info!(
        "Traversed {} from '{}' with {} algorithm(s)",
        graph_path.display(),
        start,
        reports.len()
    );

    print!("{}", render_traversals(&reports, output.format)?);
    Ok(())
}
