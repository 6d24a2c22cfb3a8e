//! Inventory item types

use serde::{Deserialize, Serialize};

/// Storage-assigned row identifier. Always positive once assigned.
pub type ItemId = i64;

/// A persisted inventory record.
///
/// Every stored item has a non-empty name and a quantity greater than zero;
/// the validator enforces both before anything reaches storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub quantity: i64,
    pub description: String,
}

/// Item data that passed validation but has no id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewItem {
    /// Name exactly as supplied by the client
    pub name: String,
    /// Quantity after integer conversion
    pub quantity: i64,
    /// Empty when the client omitted it
    pub description: String,
}

impl NewItem {
    pub fn new(name: impl Into<String>, quantity: i64) -> Self {
        Self {
            name: name.into(),
            quantity,
            description: String::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Attach a storage-assigned id.
    pub fn into_item(self, id: ItemId) -> Item {
        Item {
            id,
            name: self.name,
            quantity: self.quantity,
            description: self.description,
        }
    }
}
