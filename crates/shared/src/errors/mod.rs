mod client;
mod response;

pub use self::client::ClientError;
pub use self::response::ErrorResponse;
