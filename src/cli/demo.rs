//! Demo command - traversal orders for the two sample graphs

use super::OutputSettings;
use algokit::graph::samples::{bfs_sample, dfs_sample};
use algokit::graph::Algorithm;
use algokit::models::TraversalReport;
use algokit::reporters::{render_traversals, OutputFormat};
use anyhow::Result;
use console::style;

pub(crate) fn demo_reports() -> Vec<TraversalReport> {
    let bfs_graph = bfs_sample();
    let dfs_graph = dfs_sample();
    vec![
        TraversalReport::run(Algorithm::Bfs, &bfs_graph, "A"),
        TraversalReport::run(Algorithm::Dfs, &dfs_graph, "A"),
        TraversalReport::run(Algorithm::DfsIterative, &dfs_graph, "A"),
    ]
}

pub fn run(output: OutputSettings) -> Result<()> {
    let reports = demo_reports();
    if output.format == OutputFormat::Text {
        println!("{}", style("Sample graphs").bold());
        println!("  bfs: {}", serde_json::to_string(&bfs_sample())?);
        println!("  dfs: {}\n", serde_json::to_string(&dfs_sample())?);
    }
    print!("{}", render_traversals(&reports, output.format)?);
    Ok(())
}
