use anyhow::{Context, Result};
use apiclient::{
    abstract_trait::{DynInventoryApi, DynOrderApi, DynProductApi},
    rest_client::{RestInventoryClient, RestOrderClient, RestProductClient},
};
use shared::{config::Endpoints, utils::init_logger};
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::{error, info, warn};
use trafficgen::{
    clock::{DynClock, TokioClock},
    config::GeneratorConfig,
    cycle::CycleRunner,
    driver::TrafficDriver,
};

#[tokio::main]
async fn main() -> Result<()> {
    let driver = setup().context("Failed to setup traffic generator")?;

    let (shutdown_tx, shutdown_rx) = broadcast::channel::<()>(1);
    shutdown_listener(shutdown_tx);

    driver.run(shutdown_rx).await;

    info!("Traffic generator shutdown complete.");
    Ok(())
}

fn setup() -> Result<TrafficDriver> {
    dotenv::dotenv().ok();
    init_logger("trafficgen");

    let endpoints = Endpoints::from_env();
    let config = GeneratorConfig::default();

    info!(
        "Targeting products={} orders={} inventory={}",
        endpoints.product_base, endpoints.order_base, endpoints.inventory_base
    );

    let http = reqwest::Client::new();

    let products: DynProductApi = Arc::new(RestProductClient::new(
        http.clone(),
        endpoints.product_base.clone(),
    ));
    let orders: DynOrderApi = Arc::new(RestOrderClient::new(
        http.clone(),
        endpoints.order_base.clone(),
    ));
    let inventory: DynInventoryApi = Arc::new(RestInventoryClient::new(
        http,
        endpoints.inventory_base.clone(),
    ));

    let clock: DynClock = Arc::new(TokioClock);
    let cycle_interval = config.cycle_interval;

    let runner = CycleRunner::new(products, orders, inventory, clock.clone(), config);

    Ok(TrafficDriver::new(runner, clock, cycle_interval))
}

fn shutdown_listener(shutdown_tx: broadcast::Sender<()>) {
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Ctrl+C detected, broadcasting shutdown...");
                if let Err(e) = shutdown_tx.send(()) {
                    warn!("Failed to send shutdown signal: {}", e);
                }
            }
            Err(e) => {
                error!("Failed to listen for shutdown signal: {}", e);
            }
        }
    });
}
