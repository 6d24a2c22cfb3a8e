//! In-memory storage backend
//!
//! Rows live in a shared `Vec` behind a mutex. Every connection handed out is
//! counted on open and on drop, and connects or statements can be made to
//! fail on demand. Ids come from a sequence that is never reused.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use super::connector::{Connector, InventoryConnection};
use super::errors::{StorageError, StorageResult};
use crate::model::{Item, ItemId, NewItem};

#[derive(Debug)]
struct Rows {
    items: Vec<Item>,
    next_id: ItemId,
}

impl Default for Rows {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
        }
    }
}

#[derive(Debug, Default)]
struct Shared {
    rows: Mutex<Rows>,
    opened: AtomicUsize,
    closed: AtomicUsize,
    fail_connections: AtomicBool,
    fail_queries: AtomicBool,
}

/// Connector over process memory. Clones share the same rows and counters.
#[derive(Debug, Clone, Default)]
pub struct MemoryConnector {
    shared: Arc<Shared>,
}

impl MemoryConnector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make subsequent `connect` calls fail
    pub fn fail_connections(&self, fail: bool) {
        self.shared.fail_connections.store(fail, Ordering::SeqCst);
    }

    /// Make subsequent statements fail on open connections
    pub fn fail_queries(&self, fail: bool) {
        self.shared.fail_queries.store(fail, Ordering::SeqCst);
    }

    /// Connections opened so far
    pub fn opened(&self) -> usize {
        self.shared.opened.load(Ordering::SeqCst)
    }

    /// Connections dropped so far
    pub fn closed(&self) -> usize {
        self.shared.closed.load(Ordering::SeqCst)
    }

    /// Copy of the stored rows, bypassing the connection counters
    pub fn snapshot(&self) -> Vec<Item> {
        match self.shared.rows.lock() {
            Ok(rows) => rows.items.clone(),
            Err(poisoned) => poisoned.into_inner().items.clone(),
        }
    }
}

impl Connector for MemoryConnector {
    fn connect(&self) -> StorageResult<Box<dyn InventoryConnection>> {
        if self.shared.fail_connections.load(Ordering::SeqCst) {
            return Err(StorageError::connect("memory store refused connection"));
        }

        self.shared.opened.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(MemoryConnection {
            shared: Arc::clone(&self.shared),
        }))
    }
}

struct MemoryConnection {
    shared: Arc<Shared>,
}

impl MemoryConnection {
    fn rows(&self) -> StorageResult<MutexGuard<'_, Rows>> {
        if self.shared.fail_queries.load(Ordering::SeqCst) {
            return Err(StorageError::query("memory store rejected statement"));
        }
        self.shared
            .rows
            .lock()
            .map_err(|_| StorageError::query("memory store lock poisoned"))
    }
}

impl Drop for MemoryConnection {
    fn drop(&mut self) {
        self.shared.closed.fetch_add(1, Ordering::SeqCst);
    }
}

impl InventoryConnection for MemoryConnection {
    fn fetch_all(&self) -> StorageResult<Vec<Item>> {
        Ok(self.rows()?.items.clone())
    }

    fn fetch_by_id(&self, id: ItemId) -> StorageResult<Option<Item>> {
        Ok(self.rows()?.items.iter().find(|item| item.id == id).cloned())
    }

    fn insert(&self, item: &NewItem) -> StorageResult<ItemId> {
        let mut rows = self.rows()?;
        let id = rows.next_id;
        rows.next_id += 1;
        rows.items.push(item.clone().into_item(id));
        Ok(id)
    }

    fn update_quantity(&self, id: ItemId, quantity: i64) -> StorageResult<()> {
        let mut rows = self.rows()?;
        if let Some(item) = rows.items.iter_mut().find(|item| item.id == id) {
            item.quantity = quantity;
        }
        Ok(())
    }

    fn delete(&self, id: ItemId) -> StorageResult<()> {
        self.rows()?.items.retain(|item| item.id != id);
        Ok(())
    }

    fn search_by_name(&self, term: &str) -> StorageResult<Vec<Item>> {
        Ok(self
            .rows()?
            .items
            .iter()
            .filter(|item| item.name.contains(term))
            .cloned()
            .collect())
    }
}
