mod inventory;
mod order;
mod product;

pub use self::inventory::{DynInventoryApi, InventoryApiTrait};
pub use self::order::{DynOrderApi, OrderApiTrait};
pub use self::product::{DynProductApi, ProductApiTrait};
