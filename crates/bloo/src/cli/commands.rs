//! CLI command definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Bloo - Discord moderation bot
#[derive(Parser, Debug)]
#[command(name = "bloo")]
#[command(about = "Discord moderation bot with slash-command admission control", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Configuration file, applied over ./bloo.toml and ~/.config/bloo/bloo.toml
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Connect to Discord and start moderating
    #[cfg(feature = "discord")]
    Run,

    /// Load and validate configuration, then print a summary
    CheckConfig,

    /// Evaluate a raw interaction payload through the gate offline
    Simulate {
        /// Path to a Discord interaction JSON payload
        payload: PathBuf,

        /// Ban the invoking user from a command for this run (repeatable)
        #[arg(long = "ban", value_name = "COMMAND")]
        bans: Vec<String>,
    },
}
