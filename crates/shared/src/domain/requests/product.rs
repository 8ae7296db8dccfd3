use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CreateProductRequest {
    pub name: String,
    pub description: String,
    pub price: f64,
}
