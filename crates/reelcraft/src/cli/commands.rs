//! CLI command definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Reelcraft - turn competitor marketing copy into short-video scripts
#[derive(Parser, Debug)]
#[command(name = "reelcraft")]
#[command(about = "Turn competitor marketing copy into short-video scripts", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file (replaces ./reelcraft.toml)
    #[arg(long, global = true)]
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
    /// Start the HTTP API
    Serve {
        /// Interface to bind (defaults to server.host)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind (defaults to server.port)
        #[arg(long)]
        port: Option<u16>,
    },

    /// Run the pipeline once and print the result as JSON
    Generate {
        /// Target market or industry
        #[arg(long)]
        niche: String,

        /// Platform to write for; repeat for several
        #[arg(long = "platform", required = true)]
        platforms: Vec<String>,

        /// File holding the competitor text, or "-" for stdin (the default)
        #[arg(long)]
        input: Option<PathBuf>,

        /// Pretty-print the output
        #[arg(long)]
        pretty: bool,
    },

    /// List the platforms scripts can be written for
    Platforms,
}
