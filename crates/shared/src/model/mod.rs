mod inventory;
mod order;
mod product;

pub use self::inventory::InventoryRecord;
pub use self::order::Order;
pub use self::product::Product;
