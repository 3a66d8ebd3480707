use async_trait::async_trait;
use shared::{
    config::ConnectionPool,
    domain::Order,
    errors::RepositoryError,
    model::OrderRecord,
};
use tracing::{error, info};

use crate::{abstract_trait::OrderCommandRepositoryTrait, domain::OrderDraft};

pub struct OrderCommandRepository {
    db: ConnectionPool,
}

impl OrderCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderCommandRepositoryTrait for OrderCommandRepository {
    async fn create_order(&self, draft: &OrderDraft) -> Result<Order, RepositoryError> {
        let mut tx = self.db.begin().await.map_err(RepositoryError::from)?;

        let record = sqlx::query_as::<_, OrderRecord>(
            r#"
            INSERT INTO orders (buyer_id, order_date, street, city, state, country, zip_code)
            VALUES ($1, current_timestamp, $2, $3, $4, $5, $6)
            RETURNING order_id, buyer_id, order_date, street, city, state, country, zip_code
            "#,
        )
        .bind(&draft.buyer_id)
        .bind(&draft.ship_to_address.street)
        .bind(&draft.ship_to_address.city)
        .bind(&draft.ship_to_address.state)
        .bind(&draft.ship_to_address.country)
        .bind(&draft.ship_to_address.zip_code)
        .fetch_one(&mut *tx)
        .await
        .map_err(|err| {
            error!(
                "❌ Failed to create order for buyer {}: {:?}",
                draft.buyer_id, err
            );
            RepositoryError::from(err)
        })?;

        for item in &draft.items {
            sqlx::query(
                r#"
                INSERT INTO order_items
                    (order_id, catalog_item_id, product_name, picture_uri, unit_price, units)
                VALUES ($1, $2, $3, $4, $5, $6)
                "#,
            )
            .bind(record.order_id)
            .bind(item.item_ordered.id)
            .bind(&item.item_ordered.product_name)
            .bind(&item.item_ordered.picture_uri)
            .bind(item.unit_price)
            .bind(item.units)
            .execute(&mut *tx)
            .await
            .map_err(|err| {
                error!(
                    "❌ Failed to create item for order {}: {:?}",
                    record.order_id, err
                );
                RepositoryError::from(err)
            })?;
        }

        tx.commit().await.map_err(RepositoryError::from)?;

        info!(
            "✅ Created order ID {} for buyer {} with {} items",
            record.order_id,
            record.buyer_id,
            draft.items.len()
        );

        Ok(Order {
            id: record.order_id,
            buyer_id: record.buyer_id,
            order_date: record.order_date,
            ship_to_address: draft.ship_to_address.clone(),
            order_items: draft.items.clone(),
        })
    }
}
