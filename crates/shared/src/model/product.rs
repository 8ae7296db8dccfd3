use serde::{Deserialize, Serialize};

/// Catalog entry owned by the product service. The `id` is assigned by the
/// backend on creation and is never generated locally.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Product {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
}
