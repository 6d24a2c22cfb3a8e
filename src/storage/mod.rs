//! Inventory storage
//!
//! Storage is reached through a `Connector` that hands out one connection
//! per request. `Storage::with_connection` scopes that connection to a single
//! closure so it is released on every exit path.
//!
//! # Backends
//!
//! - `SqliteConnector`: the `inventory` table in a SQLite database file
//! - `MemoryConnector`: in-process rows with failure injection and
//!   open/close counters
//!
//! The table is created once by `provision_schema`, outside the request path.

mod config;
mod connector;
mod errors;
mod memory;
mod schema;
mod sqlite;

pub use config::StorageConfig;
pub use connector::{Connector, InventoryConnection, Storage};
pub use errors::{StorageError, StorageResult};
pub use memory::MemoryConnector;
pub use schema::provision_schema;
pub use sqlite::SqliteConnector;
