//! SQLite storage backend
//!
//! Each `connect` opens the configured database file read-write. The file is
//! never created here: a database that was not provisioned is reported as a
//! connection failure.

use std::path::PathBuf;
use std::time::Duration;

use rusqlite::{params, Connection, OpenFlags, OptionalExtension, Row};
use tracing::debug;

use super::config::StorageConfig;
use super::connector::{Connector, InventoryConnection};
use super::errors::{StorageError, StorageResult};
use crate::model::{Item, ItemId, NewItem};

const ITEM_SELECT_SQL: &str = "SELECT id, name, quantity, description FROM inventory";

/// Connector opening one SQLite connection per call
#[derive(Debug, Clone)]
pub struct SqliteConnector {
    path: PathBuf,
    busy_timeout: Duration,
}

impl SqliteConnector {
    pub fn new(config: &StorageConfig) -> Self {
        Self {
            path: config.database.clone(),
            busy_timeout: config.busy_timeout(),
        }
    }
}

impl Connector for SqliteConnector {
    fn connect(&self) -> StorageResult<Box<dyn InventoryConnection>> {
        let flags = OpenFlags::SQLITE_OPEN_READ_WRITE
            | OpenFlags::SQLITE_OPEN_URI
            | OpenFlags::SQLITE_OPEN_NO_MUTEX;

        let conn = Connection::open_with_flags(&self.path, flags).map_err(StorageError::connect)?;
        conn.busy_timeout(self.busy_timeout).map_err(StorageError::connect)?;

        debug!(database = %self.path.display(), "Storage connection opened");
        Ok(Box::new(SqliteConnection { conn }))
    }
}

struct SqliteConnection {
    conn: Connection,
}

impl InventoryConnection for SqliteConnection {
    fn fetch_all(&self) -> StorageResult<Vec<Item>> {
        let mut stmt = self.conn.prepare(ITEM_SELECT_SQL)?;
        let items = stmt
            .query_map([], map_item)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(items)
    }

    fn fetch_by_id(&self, id: ItemId) -> StorageResult<Option<Item>> {
        let sql = format!("{ITEM_SELECT_SQL} WHERE id = ?1");
        let item = self
            .conn
            .query_row(&sql, params![id], map_item)
            .optional()?;
        Ok(item)
    }

    fn insert(&self, item: &NewItem) -> StorageResult<ItemId> {
        self.conn.execute(
            "INSERT INTO inventory (name, quantity, description) VALUES (?1, ?2, ?3)",
            params![item.name, item.quantity, item.description],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    fn update_quantity(&self, id: ItemId, quantity: i64) -> StorageResult<()> {
        self.conn.execute(
            "UPDATE inventory SET quantity = ?1 WHERE id = ?2",
            params![quantity, id],
        )?;
        Ok(())
    }

    fn delete(&self, id: ItemId) -> StorageResult<()> {
        self.conn.execute("DELETE FROM inventory WHERE id = ?1", params![id])?;
        Ok(())
    }

    fn search_by_name(&self, term: &str) -> StorageResult<Vec<Item>> {
        let sql = format!("{ITEM_SELECT_SQL} WHERE name LIKE ?1 ESCAPE '\\'");
        let pattern = format!("%{}%", escape_like(term));

        let mut stmt = self.conn.prepare(&sql)?;
        let items = stmt
            .query_map(params![pattern], map_item)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(items)
    }
}

fn map_item(row: &Row<'_>) -> rusqlite::Result<Item> {
    Ok(Item {
        id: row.get(0)?,
        name: row.get(1)?,
        quantity: row.get(2)?,
        description: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
    })
}

/// Escapes LIKE wildcards so `term` matches literally.
fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
