//! CLI command definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Storysmith - turn free-text requirements into user stories with an LLM
#[derive(Parser, Debug)]
#[command(name = "storysmith")]
#[command(about = "Turn free-text requirements into user stories with an LLM", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file (replaces ./storysmith.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub json_logs: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP API
    Serve {
        /// Address to bind (overrides server.bind)
        #[arg(long)]
        bind: Option<String>,
    },

    /// Print the prompt that would be sent for a requirement
    Prompt {
        /// Requirement text
        requirement: String,
    },
}
