use crate::{abstract_trait::OrderApiTrait, rest_client::response::parse_json};
use async_trait::async_trait;
use shared::{domain::requests::CreateOrderRequest, errors::ClientError, model::Order};
use tracing::debug;

pub struct RestOrderClient {
    http: reqwest::Client,
    base_url: String,
}

impl RestOrderClient {
    pub fn new(http: reqwest::Client, base_url: String) -> Self {
        Self { http, base_url }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

#[async_trait]
impl OrderApiTrait for RestOrderClient {
    async fn list(&self) -> Result<Vec<Order>, ClientError> {
        debug!("GET {}", self.url("/api/orders"));

        let response = self.http.get(self.url("/api/orders")).send().await?;
        parse_json(response).await
    }

    async fn create(&self, request: &CreateOrderRequest) -> Result<Order, ClientError> {
        debug!("POST {}", self.url("/api/orders"));

        let response = self
            .http
            .post(self.url("/api/orders"))
            .json(request)
            .send()
            .await?;

        parse_json(response).await
    }
}
