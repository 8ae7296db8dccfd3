use shared::errors::ClientError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ViewError {
    #[error(transparent)]
    Client(#[from] ClientError),

    /// The order form references a product id that is not in its loaded list.
    #[error("unknown product id: {0}")]
    UnknownProduct(i64),
}
