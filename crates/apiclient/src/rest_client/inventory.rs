use crate::{abstract_trait::InventoryApiTrait, rest_client::response::parse_json};
use async_trait::async_trait;
use shared::{
    domain::requests::UpdateInventoryRequest, errors::ClientError, model::InventoryRecord,
};
use tracing::debug;

pub struct RestInventoryClient {
    http: reqwest::Client,
    base_url: String,
}

impl RestInventoryClient {
    pub fn new(http: reqwest::Client, base_url: String) -> Self {
        Self { http, base_url }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

#[async_trait]
impl InventoryApiTrait for RestInventoryClient {
    async fn list(&self) -> Result<Vec<InventoryRecord>, ClientError> {
        debug!("GET {}", self.url("/api/inventory"));

        let response = self.http.get(self.url("/api/inventory")).send().await?;
        parse_json(response).await
    }

    async fn set_quantity(
        &self,
        product_id: i64,
        quantity: i64,
    ) -> Result<InventoryRecord, ClientError> {
        let url = self.url(&format!("/api/inventory/{product_id}"));
        debug!("PUT {url}");

        let response = self
            .http
            .put(url)
            .json(&UpdateInventoryRequest { quantity })
            .send()
            .await?;

        parse_json(response).await
    }
}
