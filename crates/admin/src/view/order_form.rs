use crate::errors::ViewError;
use apiclient::abstract_trait::{DynOrderApi, DynProductApi};
use shared::{
    domain::requests::CreateOrderRequest,
    model::{Order, Product},
};
use tracing::info;

/// The "place an order" form: a product picker backed by the catalog plus a
/// quantity field. The total is computed here from the unit price the form
/// last loaded, exactly like the browser version did.
pub struct OrderFormView {
    products: DynProductApi,
    orders: DynOrderApi,
    pub catalog: Vec<Product>,
}

impl OrderFormView {
    pub fn new(products: DynProductApi, orders: DynOrderApi) -> Self {
        Self {
            products,
            orders,
            catalog: Vec::new(),
        }
    }

    pub async fn load_products(&mut self) -> Result<(), ViewError> {
        self.catalog = self.products.list().await?;
        Ok(())
    }

    pub async fn place_order(&self, product_id: i64, quantity: i64) -> Result<Order, ViewError> {
        let product = self
            .catalog
            .iter()
            .find(|p| p.id == product_id)
            .ok_or(ViewError::UnknownProduct(product_id))?;

        let request = CreateOrderRequest {
            product_id,
            quantity,
            total_price: product.price * quantity as f64,
        };

        let order = self.orders.create(&request).await?;
        info!("Order created: {}", order.id);

        Ok(order)
    }
}
