use serde::{Deserialize, Serialize};

/// Error body the backend services return on rejection, e.g.
/// `{"error": "Insufficient stock"}`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
