use serde::{Deserialize, Serialize};

/// Body for `POST /api/orders`. The total is computed by the caller from the
/// unit price it last saw; whether the order service recomputes it server-side
/// is its own business.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CreateOrderRequest {
    #[serde(rename = "product_id")]
    pub product_id: i64,
    pub quantity: i64,
    #[serde(rename = "total_price")]
    pub total_price: f64,
}
