mod inventory;
mod order;
mod product;
mod response;

pub use self::inventory::RestInventoryClient;
pub use self::order::RestOrderClient;
pub use self::product::RestProductClient;
