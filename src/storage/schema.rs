//! One-time schema provisioning
//!
//! Creates the database file and the `inventory` table. Request handling
//! never calls this; it backs the `setup` command.

use rusqlite::Connection;
use tracing::info;

use super::config::StorageConfig;
use super::errors::{StorageError, StorageResult};

const INVENTORY_TABLE_SQL: &str = "CREATE TABLE IF NOT EXISTS inventory (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    quantity INTEGER NOT NULL,
    description TEXT NOT NULL DEFAULT ''
);";

/// Creates the `inventory` table if it does not exist yet.
///
/// Running it against an already provisioned database is a no-op.
pub fn provision_schema(config: &StorageConfig) -> StorageResult<()> {
    let conn = Connection::open(&config.database).map_err(StorageError::connect)?;
    conn.execute_batch(INVENTORY_TABLE_SQL)?;

    info!(database = %config.database.display(), "Inventory schema provisioned");
    Ok(())
}
