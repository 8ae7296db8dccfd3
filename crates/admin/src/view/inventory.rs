use crate::errors::ViewError;
use apiclient::abstract_trait::DynInventoryApi;
use shared::model::InventoryRecord;
use tracing::info;

pub struct InventoryView {
    inventory: DynInventoryApi,
    pub items: Vec<InventoryRecord>,
}

impl InventoryView {
    pub fn new(inventory: DynInventoryApi) -> Self {
        Self {
            inventory,
            items: Vec::new(),
        }
    }

    pub async fn refresh(&mut self) -> Result<(), ViewError> {
        self.items = self.inventory.list().await?;
        info!("Inventory fetched: {}", self.items.len());
        Ok(())
    }

    /// Writes the new stock level, then re-fetches the whole list.
    pub async fn update_quantity(&mut self, product_id: i64, quantity: i64) -> Result<(), ViewError> {
        self.inventory.set_quantity(product_id, quantity).await?;
        self.refresh().await
    }
}
