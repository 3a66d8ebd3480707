use std::sync::Arc;

use async_trait::async_trait;
use shared::{errors::RepositoryError, model::BasketWithItems};

pub type DynBasketQueryRepository = Arc<dyn BasketQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait BasketQueryRepositoryTrait {
    async fn find_with_items(
        &self,
        basket_id: i64,
    ) -> Result<Option<BasketWithItems>, RepositoryError>;
}
