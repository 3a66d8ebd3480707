use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError, model::CatalogItem};
use tracing::error;

use crate::abstract_trait::CatalogQueryRepositoryTrait;

pub struct CatalogQueryRepository {
    db: ConnectionPool,
}

impl CatalogQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CatalogQueryRepositoryTrait for CatalogQueryRepository {
    async fn find_by_ids(&self, ids: &[i64]) -> Result<Vec<CatalogItem>, RepositoryError> {
        let items = sqlx::query_as::<_, CatalogItem>(
            r#"
            SELECT id, name, picture_uri, price
            FROM catalog_items
            WHERE id = ANY($1)
            "#,
        )
        .bind(ids.to_vec())
        .fetch_all(&self.db)
        .await
        .map_err(|err| {
            error!("❌ Failed to fetch catalog items {ids:?}: {err:?}");
            RepositoryError::from(err)
        })?;

        Ok(items)
    }
}
