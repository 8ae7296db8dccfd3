use crate::{
    clock::DynClock,
    config::GeneratorConfig,
    pricing::{draw_product, round2},
};
use anyhow::{Context, Result};
use apiclient::abstract_trait::{DynInventoryApi, DynOrderApi, DynProductApi};
use shared::domain::requests::CreateOrderRequest;
use tracing::info;

/// Runs one end-to-end business transaction: create a product, stock it,
/// order two units, then read back the order and product lists.
///
/// Every step strictly awaits the previous one; the first failure aborts the
/// cycle and is returned with step context. Partial effects (a stocked
/// product with no order, say) are left behind on purpose — the point is
/// representative load, not consistency.
pub struct CycleRunner {
    products: DynProductApi,
    orders: DynOrderApi,
    inventory: DynInventoryApi,
    clock: DynClock,
    config: GeneratorConfig,
}

impl CycleRunner {
    pub fn new(
        products: DynProductApi,
        orders: DynOrderApi,
        inventory: DynInventoryApi,
        clock: DynClock,
        config: GeneratorConfig,
    ) -> Self {
        Self {
            products,
            orders,
            inventory,
            clock,
            config,
        }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub async fn run_cycle(&self) -> Result<()> {
        let request = draw_product(&self.config);

        info!("Creating product: {}", request.name);
        let product = self
            .products
            .create(&request)
            .await
            .context("Create product failed")?;
        info!("Product created with ID: {}", product.id);

        self.clock.sleep(self.config.step_delay).await;

        info!(
            "Updating inventory for product {} to {}",
            product.id, self.config.stock_quantity
        );
        self.inventory
            .set_quantity(product.id, self.config.stock_quantity)
            .await
            .context("Update inventory failed")?;

        self.clock.sleep(self.config.step_delay).await;

        let quantity = self.config.order_quantity;
        let total_price = round2(product.price * quantity as f64);

        info!("Placing order for product {}, quantity {quantity}", product.id);
        let order = self
            .orders
            .create(&CreateOrderRequest {
                product_id: product.id,
                quantity,
                total_price,
            })
            .await
            .context("Create order failed")?;
        info!("Order created: {}", order.id);

        self.clock.sleep(self.config.readback_delay).await;

        // Read-back: the results are discarded, these GETs exist purely to
        // generate read traffic.
        self.orders.list().await.context("Fetch orders failed")?;
        self.products.list().await.context("Fetch products failed")?;

        info!("Cycle completed successfully");
        Ok(())
    }
}
