use std::time::Duration;

/// All tunables of the synthetic workload in one place, passed to the runner
/// at construction. Defaults reproduce the demo deployment's fixed constants.
///
/// The vocabulary pools must be non-empty.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub product_names: Vec<String>,
    pub descriptions: Vec<String>,
    /// Prices are drawn uniformly from `[price_min, price_min + price_span)`
    /// and rounded to 2 decimals.
    pub price_min: f64,
    pub price_span: f64,
    /// Stock level written for every freshly created product.
    pub stock_quantity: i64,
    /// Units ordered each cycle.
    pub order_quantity: i64,
    /// Think time between the create/stock/order steps.
    pub step_delay: Duration,
    /// Pause before the terminal read-back GETs.
    pub readback_delay: Duration,
    /// Pause between consecutive cycles.
    pub cycle_interval: Duration,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        let product_names = [
            "Laptop", "Mouse", "Keyboard", "Monitor", "USB Cable", "Webcam", "Headset", "SSD",
            "RAM", "GPU",
        ];
        let descriptions = [
            "High performance",
            "Ergonomic",
            "Mechanical",
            "4K Ultra HD",
            "Fast charging",
            "Noise cancelling",
            "1TB storage",
            "16GB",
            "RTX 4080",
        ];

        Self {
            product_names: product_names.iter().map(|s| s.to_string()).collect(),
            descriptions: descriptions.iter().map(|s| s.to_string()).collect(),
            price_min: 20.0,
            price_span: 500.0,
            stock_quantity: 100,
            order_quantity: 2,
            step_delay: Duration::from_millis(1000),
            readback_delay: Duration::from_millis(2000),
            cycle_interval: Duration::from_millis(25000),
        }
    }
}
