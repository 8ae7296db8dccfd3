use crate::{
    abstract_trait::ProductApiTrait,
    rest_client::response::{expect_success, parse_json},
};
use async_trait::async_trait;
use shared::{domain::requests::CreateProductRequest, errors::ClientError, model::Product};
use tracing::debug;

pub struct RestProductClient {
    http: reqwest::Client,
    base_url: String,
}

impl RestProductClient {
    pub fn new(http: reqwest::Client, base_url: String) -> Self {
        Self { http, base_url }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

#[async_trait]
impl ProductApiTrait for RestProductClient {
    async fn list(&self) -> Result<Vec<Product>, ClientError> {
        debug!("GET {}", self.url("/api/products"));

        let response = self.http.get(self.url("/api/products")).send().await?;
        parse_json(response).await
    }

    async fn create(&self, request: &CreateProductRequest) -> Result<Product, ClientError> {
        debug!("POST {}", self.url("/api/products"));

        let response = self
            .http
            .post(self.url("/api/products"))
            .json(request)
            .send()
            .await?;

        parse_json(response).await
    }

    async fn delete(&self, id: i64) -> Result<(), ClientError> {
        let url = self.url(&format!("/api/products/{id}"));
        debug!("DELETE {url}");

        let response = self.http.delete(url).send().await?;
        expect_success(response).await
    }
}
