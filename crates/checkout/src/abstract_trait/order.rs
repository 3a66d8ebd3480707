use std::sync::Arc;

use async_trait::async_trait;
use shared::{domain::Order, errors::RepositoryError};

use crate::domain::OrderDraft;

pub type DynOrderCommandRepository = Arc<dyn OrderCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait OrderCommandRepositoryTrait {
    /// Commits the draft and its items in one transaction and returns the
    /// persisted aggregate, now carrying the database-assigned id and date.
    async fn create_order(&self, draft: &OrderDraft) -> Result<Order, RepositoryError>;
}
