//! CLI module for the inventory service
//!
//! Provides command-line interface for:
//! - serve: Run the HTTP API
//! - setup: Provision the inventory table

mod args;
mod commands;
mod config;
mod errors;

pub use args::{Cli, Command, ConfigArgs};
pub use commands::{run, run_command, serve, setup};
pub use config::Config;
pub use errors::{CliError, CliErrorCode, CliResult};
