mod basket;
mod catalog;
mod order;

pub use self::basket::{Basket, BasketItem, BasketWithItems};
pub use self::catalog::CatalogItem;
pub use self::order::{OrderItemRecord, OrderRecord};
