use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::domain::{Address, Order, OrderItem};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub id: i64,
    pub buyer_id: String,
    pub order_date: DateTime<Utc>,
    pub ship_to_address: Address,
    pub order_items: Vec<OrderItem>,
    pub total: f64,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        let total = order.total();
        Self {
            id: order.id,
            buyer_id: order.buyer_id,
            order_date: order.order_date,
            ship_to_address: order.ship_to_address,
            order_items: order.order_items,
            total,
        }
    }
}
