use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Snapshot of a catalog item at the moment it was ordered. A completed
/// order keeps these values even if the live catalog row changes later.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItemOrdered {
    pub id: i64,
    pub product_name: String,
    pub picture_uri: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub item_ordered: CatalogItemOrdered,
    pub unit_price: f64,
    pub units: i32,
}

impl OrderItem {
    pub fn total(&self) -> f64 {
        self.unit_price * self.units as f64
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[validate(length(min = 1, message = "Street is required"))]
    pub street: String,

    #[validate(length(min = 1, message = "City is required"))]
    pub city: String,

    #[validate(length(min = 1, message = "State is required"))]
    pub state: String,

    #[validate(length(min = 1, message = "Country is required"))]
    pub country: String,

    #[validate(length(min = 1, message = "Zip code is required"))]
    pub zip_code: String,
}

/// The order aggregate as it travels between stages: committed by checkout,
/// serialized onto the queue, archived by reservation and ingested by
/// delivery. Always carries at least one item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: i64,
    pub buyer_id: String,
    pub order_date: DateTime<Utc>,
    pub ship_to_address: Address,
    pub order_items: Vec<OrderItem>,
}

impl Order {
    pub fn total(&self) -> f64 {
        self.order_items.iter().map(OrderItem::total).sum()
    }
}
