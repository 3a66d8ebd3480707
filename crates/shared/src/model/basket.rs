use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Basket {
    pub id: i64,
    pub buyer_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct BasketItem {
    pub id: i64,
    pub basket_id: i64,
    pub catalog_item_id: i64,
    pub unit_price: f64,
    pub quantity: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BasketWithItems {
    pub basket: Basket,
    pub items: Vec<BasketItem>,
}
