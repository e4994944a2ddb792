//! Configuration module for algokit
//!
//! This module handles:
//! - User-level configuration (~/.config/algokit/config.toml)
//! - Environment overrides for output defaults

mod user_config;

pub use user_config::{
    OutputConfig, TraversalConfig, UserConfig, FORMAT_ENV, NO_EMOJI_ENV,
};
