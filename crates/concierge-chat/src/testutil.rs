//! Shared test doubles for the chat crate.

use async_trait::async_trait;

use concierge_inventory::{InventoryError, InventorySource, InventoryTable};

/// Inventory source returning a fixed table.
pub struct StaticInventory {
    table: InventoryTable,
}

impl StaticInventory {
    pub fn from_json(body: serde_json::Value) -> Self {
        Self {
            table: InventoryTable::from_response(body),
        }
    }
}

#[async_trait]
impl InventorySource for StaticInventory {
    async fn fetch_inventory(&self) -> Result<InventoryTable, InventoryError> {
        Ok(self.table.clone())
    }
}

/// Inventory source that always fails, as a downed endpoint would.
pub struct FailingInventory;

#[async_trait]
impl InventorySource for FailingInventory {
    async fn fetch_inventory(&self) -> Result<InventoryTable, InventoryError> {
        Err(InventoryError::Status(500))
    }
}
