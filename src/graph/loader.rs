//! Graph file loading
//!
//! Graph files are plain adjacency tables, either JSON:
//!
//! ```json
//! { "A": ["B", "C"], "B": ["D"] }
//! ```
//!
//! or TOML:
//!
//! ```toml
//! A = ["B", "C"]
//! B = ["D"]
//! ```

use super::{Graph, GraphError, GraphResult};
use std::path::Path;
use tracing::debug;

/// On-disk graph encodings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphFormat {
    Json,
    Toml,
}

impl GraphFormat {
    /// Pick a format from the file extension
    pub fn from_path(path: &Path) -> GraphResult<Self> {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("json") => Ok(GraphFormat::Json),
            Some("toml") => Ok(GraphFormat::Toml),
            _ => Err(GraphError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

impl std::fmt::Display for GraphFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GraphFormat::Json => write!(f, "JSON"),
            GraphFormat::Toml => write!(f, "TOML"),
        }
    }
}

/// Parse an adjacency table in the given format
pub fn parse_graph(content: &str, format: GraphFormat) -> GraphResult<Graph<String>> {
    match format {
        GraphFormat::Json => serde_json::from_str::<Graph<String>>(content).map_err(|e| {
            GraphError::Parse {
                format,
                message: e.to_string(),
            }
        }),
        GraphFormat::Toml => toml::from_str::<Graph<String>>(content).map_err(|e| {
            GraphError::Parse {
                format,
                message: e.to_string(),
            }
        }),
    }
}

/// Load a graph file, choosing the format from its extension
pub fn load_graph(path: &Path) -> GraphResult<Graph<String>> {
    let format = GraphFormat::from_path(path)?;
    let content = std::fs::read_to_string(path)?;
    let graph = parse_graph(&content, format)?;
    debug!(
        "Loaded {} graph from {}: {} nodes, {} edges",
        format,
        path.display(),
        graph.len(),
        graph.edge_count()
    );
    Ok(graph)
}
