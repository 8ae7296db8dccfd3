use async_trait::async_trait;
use shared::{errors::ClientError, model::InventoryRecord};
use std::sync::Arc;

pub type DynInventoryApi = Arc<dyn InventoryApiTrait + Send + Sync>;

/// Operations the inventory service exposes under `/api/inventory`.
#[async_trait]
pub trait InventoryApiTrait {
    async fn list(&self) -> Result<Vec<InventoryRecord>, ClientError>;
    async fn set_quantity(
        &self,
        product_id: i64,
        quantity: i64,
    ) -> Result<InventoryRecord, ClientError>;
}
