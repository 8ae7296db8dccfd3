use async_trait::async_trait;
use shared::{domain::requests::CreateProductRequest, errors::ClientError, model::Product};
use std::sync::Arc;

pub type DynProductApi = Arc<dyn ProductApiTrait + Send + Sync>;

/// Operations the product service exposes under `/api/products`.
#[async_trait]
pub trait ProductApiTrait {
    async fn list(&self) -> Result<Vec<Product>, ClientError>;
    async fn create(&self, request: &CreateProductRequest) -> Result<Product, ClientError>;
    async fn delete(&self, id: i64) -> Result<(), ClientError>;
}
