//! CLI argument definitions using Clap

use clap::{Parser, Subcommand};

/// ClipRecall - clipboard history watcher with hover-to-paste recall
#[derive(Parser, Debug)]
#[command(name = "clip-recall")]
#[command(version)]
#[command(about = "Watch the clipboard and keep a deduplicated history")]
#[command(long_about = None)]
pub struct Cli {
    /// Poll interval in milliseconds
    #[arg(short = 'i', long, value_name = "MS")]
    pub interval: Option<u64>,

    /// Number of history entries to retain
    #[arg(short = 'n', long, value_name = "COUNT")]
    pub capacity: Option<usize>,

    /// Hover dwell threshold in milliseconds
    #[arg(long, value_name = "MS")]
    pub dwell: Option<u64>,

    /// Do not send the paste keystroke when a recall fires
    #[arg(long)]
    pub no_paste: bool,

    /// Config subcommand
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &[
    "capacity",
    "poll_interval_ms",
    "copy_settle_ms",
    "dwell_ms",
    "feedback_reset_ms",
    "paste",
];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}
