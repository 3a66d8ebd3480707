use std::sync::Arc;

use async_trait::async_trait;
use shared::{errors::RepositoryError, model::CatalogItem};

pub type DynCatalogQueryRepository = Arc<dyn CatalogQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait CatalogQueryRepositoryTrait {
    async fn find_by_ids(&self, ids: &[i64]) -> Result<Vec<CatalogItem>, RepositoryError>;
}
