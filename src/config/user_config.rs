//! User-level configuration for algokit
//!
//! Supports loading config from:
//! - Environment variables
//! - ~/.config/algokit/config.toml
//!
//! Only presentation defaults live here. Loan rules are fixed in code.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub const FORMAT_ENV: &str = "ALGOKIT_FORMAT";
pub const NO_EMOJI_ENV: &str = "ALGOKIT_NO_EMOJI";

#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
pub struct UserConfig {
    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub traversal: TraversalConfig,
}

#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Default output format: "text" or "json"
    pub format: Option<String>,

    /// Replace emoji with plain markers
    pub no_emoji: Option<bool>,
}

#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
pub struct TraversalConfig {
    /// Default algorithm for `traverse`: bfs, dfs, dfs-iterative or all
    pub algorithm: Option<String>,
}

impl UserConfig {
    /// Load config from all sources, with priority:
    /// 1. Environment variables (highest)
    /// 2. User config (~/.config/algokit/config.toml)
    pub fn load() -> Result<Self> {
        let mut config = UserConfig::default();

        if let Some(path) = Self::user_config_path().filter(|p| p.exists()) {
            if let Some(file_config) = Self::load_from(&path) {
                config.merge(file_config);
            }
        }

        config.apply_env(
            std::env::var(FORMAT_ENV).ok(),
            std::env::var(NO_EMOJI_ENV).ok(),
        );

        Ok(config)
    }

    /// Read one config file; unreadable or invalid files are skipped
    pub fn load_from(path: &Path) -> Option<Self> {
        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) => {
                warn!("Failed to read {}: {}", path.display(), e);
                return None;
            }
        };
        match toml::from_str::<UserConfig>(&content) {
            Ok(config) => {
                debug!("Loaded user config from {}", path.display());
                Some(config)
            }
            Err(e) => {
                warn!("Ignoring invalid config {}: {}", path.display(), e);
                None
            }
        }
    }

    /// Get the user config directory path
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("algokit").join("config.toml"))
    }

    /// Merge another config into this one (other takes priority)
    fn merge(&mut self, other: UserConfig) {
        if other.output.format.is_some() {
            self.output.format = other.output.format;
        }
        if other.output.no_emoji.is_some() {
            self.output.no_emoji = other.output.no_emoji;
        }
        if other.traversal.algorithm.is_some() {
            self.traversal.algorithm = other.traversal.algorithm;
        }
    }

    fn apply_env(&mut self, format: Option<String>, no_emoji: Option<String>) {
        if let Some(format) = format.filter(|f| !f.is_empty()) {
            self.output.format = Some(format);
        }
        if let Some(flag) = no_emoji {
            self.output.no_emoji = Some(matches!(
                flag.to_lowercase().as_str(),
                "1" | "true" | "yes" | "on"
            ));
        }
    }

    /// Output format, defaulting to "text"
    pub fn format(&self) -> &str {
        self.output.format.as_deref().unwrap_or("text")
    }

    pub fn no_emoji(&self) -> bool {
        self.output.no_emoji.unwrap_or(false)
    }

    /// Traversal algorithm, defaulting to "bfs"
    pub fn algorithm(&self) -> &str {
        self.traversal.algorithm.as_deref().unwrap_or("bfs")
    }

    /// Initialize user config directory and create example config
    pub fn init_user_config() -> Result<PathBuf> {
        let config_path = Self::user_config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        Self::write_example(&config_path)?;
        Ok(config_path)
    }

    /// Write the example config to `path` unless a file is already there.
    /// Returns whether a file was written.
    pub fn write_example(path: &Path) -> Result<bool> {
        if path.exists() {
            return Ok(false);
        }
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let example = r#"# algokit User Configuration

[output]
# Default output format: "text" or "json"
# format = "text"

# Plain markers instead of emoji (useful for CI logs)
# no_emoji = false

[traversal]
# Default algorithm for `algokit traverse`: bfs, dfs, dfs-iterative, all
# algorithm = "bfs"
"#;
        std::fs::write(path, example)?;
        Ok(true)
    }
}
