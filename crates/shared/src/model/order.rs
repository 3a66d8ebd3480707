use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Committed order row. Orders are write-once: there is no update path and
/// no soft-delete column.
#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct OrderRecord {
    pub order_id: i64,
    pub buyer_id: String,
    pub order_date: DateTime<Utc>,
    pub street: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub zip_code: String,
}

#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct OrderItemRecord {
    pub order_item_id: i64,
    pub order_id: i64,
    pub catalog_item_id: i64,
    pub product_name: String,
    pub picture_uri: String,
    pub unit_price: f64,
    pub units: i32,
}
