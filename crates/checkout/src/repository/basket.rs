use async_trait::async_trait;
use shared::{
    config::ConnectionPool,
    errors::RepositoryError,
    model::{Basket, BasketItem, BasketWithItems},
};
use tracing::error;

use crate::abstract_trait::BasketQueryRepositoryTrait;

pub struct BasketQueryRepository {
    db: ConnectionPool,
}

impl BasketQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BasketQueryRepositoryTrait for BasketQueryRepository {
    async fn find_with_items(
        &self,
        basket_id: i64,
    ) -> Result<Option<BasketWithItems>, RepositoryError> {
        let basket = sqlx::query_as::<_, Basket>(
            r#"
            SELECT id, buyer_id
            FROM baskets
            WHERE id = $1
            "#,
        )
        .bind(basket_id)
        .fetch_optional(&self.db)
        .await
        .map_err(|err| {
            error!("❌ Failed to fetch basket {basket_id}: {err:?}");
            RepositoryError::from(err)
        })?;

        let Some(basket) = basket else {
            return Ok(None);
        };

        let items = sqlx::query_as::<_, BasketItem>(
            r#"
            SELECT id, basket_id, catalog_item_id, unit_price, quantity
            FROM basket_items
            WHERE basket_id = $1
            ORDER BY id
            "#,
        )
        .bind(basket_id)
        .fetch_all(&self.db)
        .await
        .map_err(|err| {
            error!("❌ Failed to fetch items for basket {basket_id}: {err:?}");
            RepositoryError::from(err)
        })?;

        Ok(Some(BasketWithItems { basket, items }))
    }
}
