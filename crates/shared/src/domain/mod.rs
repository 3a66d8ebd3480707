mod event;
mod order;
mod response;

pub use self::event::{ORDER_CREATED_TOPIC, OrderCreatedMessage};
pub use self::order::{Address, CatalogItemOrdered, Order, OrderItem};
pub use self::response::ApiResponse;
