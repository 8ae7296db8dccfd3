//! Admin screens as plain structs over the service clients.
//!
//! Each view does exactly what the browser version did: fetch on demand,
//! mutate then re-fetch. No caching, no optimistic updates, no pagination.

mod inventory;
mod order_form;
mod orders;
mod products;

pub use self::inventory::InventoryView;
pub use self::order_form::OrderFormView;
pub use self::orders::OrderListView;
pub use self::products::ProductListView;
