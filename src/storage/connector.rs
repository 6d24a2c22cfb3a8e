//! Connection seam between request handlers and the database engine

use std::sync::Arc;

use super::errors::{StorageError, StorageResult};
use crate::model::{Item, ItemId, NewItem};

/// One open storage connection.
///
/// Every method is a single parameterized statement. Dropping the value
/// closes the connection.
pub trait InventoryConnection {
    /// All rows, in engine order
    fn fetch_all(&self) -> StorageResult<Vec<Item>>;

    fn fetch_by_id(&self, id: ItemId) -> StorageResult<Option<Item>>;

    /// Inserts a row and returns the id the engine assigned
    fn insert(&self, item: &NewItem) -> StorageResult<ItemId>;

    /// Sets the quantity of a row. Matching no row is not an error.
    fn update_quantity(&self, id: ItemId, quantity: i64) -> StorageResult<()>;

    /// Removes a row. Matching no row is not an error.
    fn delete(&self, id: ItemId) -> StorageResult<()>;

    /// Rows whose name contains `term`
    fn search_by_name(&self, term: &str) -> StorageResult<Vec<Item>>;
}

/// Factory for storage connections, shared by all requests.
pub trait Connector: Send + Sync + 'static {
    fn connect(&self) -> StorageResult<Box<dyn InventoryConnection>>;
}

/// Handle used by request handlers to reach storage.
#[derive(Clone)]
pub struct Storage {
    connector: Arc<dyn Connector>,
}

impl Storage {
    pub fn new(connector: impl Connector) -> Self {
        Self {
            connector: Arc::new(connector),
        }
    }

    /// Runs `op` against a freshly opened connection.
    ///
    /// The connection is opened and used on the blocking pool and is dropped
    /// before this returns, whether `op` succeeds, fails or panics. Failures
    /// are returned as-is; nothing is retried.
    pub async fn with_connection<T, F>(&self, op: F) -> StorageResult<T>
    where
        F: FnOnce(&dyn InventoryConnection) -> StorageResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let connector = Arc::clone(&self.connector);

        tokio::task::spawn_blocking(move || {
            let conn = connector.connect()?;
            let result = op(conn.as_ref());
            drop(conn);
            result
        })
        .await
        .map_err(|e| StorageError::TaskFailed(e.to_string()))?
    }
}

impl std::fmt::Debug for Storage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Storage").finish_non_exhaustive()
    }
}
