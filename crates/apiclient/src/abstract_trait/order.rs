use async_trait::async_trait;
use shared::{domain::requests::CreateOrderRequest, errors::ClientError, model::Order};
use std::sync::Arc;

pub type DynOrderApi = Arc<dyn OrderApiTrait + Send + Sync>;

/// Operations the order service exposes under `/api/orders`.
#[async_trait]
pub trait OrderApiTrait {
    async fn list(&self) -> Result<Vec<Order>, ClientError>;
    async fn create(&self, request: &CreateOrderRequest) -> Result<Order, ClientError>;
}
