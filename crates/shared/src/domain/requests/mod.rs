mod inventory;
mod order;
mod product;

pub use self::inventory::UpdateInventoryRequest;
pub use self::order::CreateOrderRequest;
pub use self::product::CreateProductRequest;
