use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::domain::{Address, Order, OrderItem};
use utoipa::ToSchema;

/// Queryable projection of an ingested order: the id becomes the string
/// partition key, everything else is copied verbatim from the order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderDocument {
    pub id: String,
    pub buyer_id: String,
    pub order_date: DateTime<Utc>,
    pub ship_to_address: Address,
    pub order_items: Vec<OrderItem>,
}

impl From<Order> for OrderDocument {
    fn from(order: Order) -> Self {
        Self {
            id: order.id.to_string(),
            buyer_id: order.buyer_id,
            order_date: order.order_date,
            ship_to_address: order.ship_to_address,
            order_items: order.order_items,
        }
    }
}
