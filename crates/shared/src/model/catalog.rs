use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CatalogItem {
    pub id: i64,
    pub name: String,
    pub picture_uri: String,
    pub price: f64,
}
