use std::sync::Arc;

use async_trait::async_trait;
use shared::{domain::Order, errors::ServiceError};

pub type DynOrderPublisher = Arc<dyn OrderPublisherTrait + Send + Sync>;

#[async_trait]
pub trait OrderPublisherTrait {
    async fn publish_created(&self, order: &Order) -> Result<(), ServiceError>;
}
