//! CLI command implementations

use crate::http_server::HttpServer;
use crate::observability::init_logging;
use crate::storage::{provision_schema, SqliteConnector, Storage};

use super::args::{Cli, Command, ConfigArgs};
use super::config::Config;
use super::errors::{CliError, CliResult};

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { args, port } => serve(&args, port),
        Command::Setup { args } => setup(&args),
    }
}

fn load_and_init(args: &ConfigArgs, port: Option<u16>) -> CliResult<Config> {
    let config = Config::resolve(args, port)?;
    init_logging(&config.logging).map_err(|e| CliError::logging_error(e.to_string()))?;
    Ok(config)
}

/// Run the HTTP API until Ctrl-C
pub fn serve(args: &ConfigArgs, port: Option<u16>) -> CliResult<()> {
    let config = load_and_init(args, port)?;

    if !config.storage.database.exists() {
        tracing::warn!(
            database = %config.storage.database.display(),
            "Database file not found; run 'stockroom setup' first"
        );
    }

    let storage = Storage::new(SqliteConnector::new(&config.storage));
    let server = HttpServer::new(config.server, storage);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
    })
}

/// Provision the inventory table
pub fn setup(args: &ConfigArgs) -> CliResult<()> {
    let config = load_and_init(args, None)?;

    provision_schema(&config.storage)
        .map_err(|e| CliError::setup_failed(format!("Failed to provision schema: {}", e)))?;

    println!(
        "Inventory table ready in {}",
        config.storage.database.display()
    );
    Ok(())
}
