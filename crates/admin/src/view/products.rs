use crate::errors::ViewError;
use apiclient::abstract_trait::DynProductApi;
use shared::{domain::requests::CreateProductRequest, model::Product};
use tracing::info;

pub struct ProductListView {
    products: DynProductApi,
    pub items: Vec<Product>,
}

impl ProductListView {
    pub fn new(products: DynProductApi) -> Self {
        Self {
            products,
            items: Vec::new(),
        }
    }

    pub async fn refresh(&mut self) -> Result<(), ViewError> {
        self.items = self.products.list().await?;
        info!("Products fetched: {}", self.items.len());
        Ok(())
    }

    /// Submits a new product, then re-fetches the list so the screen shows
    /// the backend-assigned id.
    pub async fn create(
        &mut self,
        name: String,
        description: String,
        price: f64,
    ) -> Result<(), ViewError> {
        let request = CreateProductRequest {
            name,
            description,
            price,
        };

        let created = self.products.create(&request).await?;
        info!("Product created with ID: {}", created.id);

        self.refresh().await
    }

    /// One DELETE, then one re-fetch.
    pub async fn delete(&mut self, id: i64) -> Result<(), ViewError> {
        self.products.delete(id).await?;
        self.refresh().await
    }
}
