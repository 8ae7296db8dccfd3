use crate::errors::ViewError;
use apiclient::abstract_trait::DynOrderApi;
use shared::model::Order;
use tracing::info;

pub struct OrderListView {
    orders: DynOrderApi,
    pub items: Vec<Order>,
}

impl OrderListView {
    pub fn new(orders: DynOrderApi) -> Self {
        Self {
            orders,
            items: Vec::new(),
        }
    }

    pub async fn refresh(&mut self) -> Result<(), ViewError> {
        self.items = self.orders.list().await?;
        info!("Orders fetched: {}", self.items.len());
        Ok(())
    }
}
