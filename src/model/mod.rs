//! Inventory data model
//!
//! - `Item`: one persisted row of the `inventory` table
//! - `NewItem`: validated client input, ready for insertion

mod item;

pub use item::{Item, ItemId, NewItem};
