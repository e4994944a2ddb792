//! CLI command definitions and handlers

mod demo;
mod init;
mod recommend;
mod traverse;

use algokit::config::UserConfig;
use algokit::reporters::{OutputFormat, TextStyle};
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;

pub use recommend::RecommendArgs;

/// algokit - graph traversal and loan decision tools
#[derive(Parser, Debug)]
#[command(name = "algokit")]
#[command(
    version,
    about = "Graph traversal (BFS/DFS) and a rule-based loan recommendation engine",
    after_help = "\
Examples:
  algokit traverse graph.json --start A             BFS order from A
  algokit traverse graph.toml --start A --algorithm all
  algokit recommend --income 80000 --credit-score 760 --amount 500000
  algokit recommend --age 19 --format json          JSON decision for scripting
  algokit demo                                      Run the sample graphs"
)]
pub struct Cli {
    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,

    /// Output format: text, json (default: from config, else text)
    #[arg(long, short = 'f', global = true, value_parser = ["text", "json"])]
    pub format: Option<String>,

    /// Disable emoji in output (cleaner for CI logs)
    #[arg(long, global = true)]
    pub no_emoji: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Traverse a graph file (.json or .toml adjacency table) from a start node
    #[command(after_help = "\
Graph files map each node to its ordered neighbor list:
  {\"A\": [\"B\", \"C\"], \"B\": [\"D\"]}      (JSON)
  A = [\"B\", \"C\"]                        (TOML)")]
    Traverse {
        /// Path to the graph file
        graph: PathBuf,

        /// Start node
        #[arg(long, short = 's')]
        start: String,

        /// Traversal algorithm (default: from config, else bfs)
        #[arg(long, short = 'a', value_parser = ["bfs", "dfs", "dfs-iterative", "all"])]
        algorithm: Option<String>,
    },

    /// Score a loan application and print the decision
    Recommend(RecommendArgs),

    /// Print traversal orders for the built-in sample graphs
    Demo,

    /// Create ~/.config/algokit/config.toml with example settings
    Init,
}

/// Output settings after layering CLI flags over user config
#[derive(Debug, Clone, Copy)]
pub(crate) struct OutputSettings {
    pub format: OutputFormat,
    pub style: TextStyle,
}

impl OutputSettings {
    fn resolve(cli: &Cli, config: &UserConfig) -> Result<Self> {
        let format = cli.format.as_deref().unwrap_or_else(|| config.format());
        Ok(Self {
            format: format.parse()?,
            style: TextStyle {
                no_emoji: cli.no_emoji || config.no_emoji(),
            },
        })
    }
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    let config = UserConfig::load()?;
    let output = OutputSettings::resolve(&cli, &config)?;
    debug!("Output settings: {:?}", output);

    match cli.command {
        Commands::Traverse {
            graph,
            start,
            algorithm,
        } => {
            let algorithm = algorithm.as_deref().unwrap_or_else(|| config.algorithm());
            traverse::run(&graph, &start, algorithm, output)
        }
        Commands::Recommend(args) => recommend::run(&args, output),
        Commands::Demo => demo::run(output),
        Commands::Init => init::run(),
    }
}
