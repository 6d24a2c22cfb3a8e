//! CLI argument definitions using clap
//!
//! Commands:
//! - stockroom serve [--config <path>] [--port <port>]
//! - stockroom setup [--config <path>]

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Stockroom - a small inventory-tracking HTTP service
#[derive(Parser, Debug)]
#[command(name = "stockroom")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Options shared by every command
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigArgs {
    /// Path to JSON configuration file
    #[arg(long, env = "STOCKROOM_CONFIG")]
    pub config: Option<PathBuf>,

    /// SQLite database file
    #[arg(long, env = "INVENTORY_DB")]
    pub database: Option<PathBuf>,

    /// Log filter directive, e.g. "info" or "stockroom=debug"
    #[arg(long, env = "LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Append logs to this file instead of stdout
    #[arg(long, env = "LOG_FILE")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the inventory HTTP server
    Serve {
        #[command(flatten)]
        args: ConfigArgs,

        /// Port to listen on
        #[arg(long, env = "PORT")]
        port: Option<u16>,
    },

    /// Create the inventory table if it does not exist
    Setup {
        #[command(flatten)]
        args: ConfigArgs,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
