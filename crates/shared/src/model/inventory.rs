use serde::{Deserialize, Serialize};

/// Stock level for one product, keyed by `product_id`. The inventory service
/// also returns its own row id, which nothing here depends on.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct InventoryRecord {
    #[serde(default)]
    pub id: Option<i64>,
    pub product_id: i64,
    pub quantity: i64,
}
