mod draft;
mod requests;
mod response;

pub use self::draft::OrderDraft;
pub use self::requests::CreateOrderRequest;
pub use self::response::OrderResponse;
