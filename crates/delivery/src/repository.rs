use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};

use crate::{abstract_trait::DocumentStoreTrait, domain::OrderDocument};

/// Document store over Postgres: one JSONB document per order id in
/// `delivery.orders`, indexed as a whole via GIN so every field is
/// queryable without per-field index management.
pub struct PostgresDocumentStore {
    db: ConnectionPool,
}

impl PostgresDocumentStore {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl DocumentStoreTrait for PostgresDocumentStore {
    async fn ensure_provisioned(&self) -> Result<(), RepositoryError> {
        sqlx::query(r#"CREATE SCHEMA IF NOT EXISTS delivery"#)
            .execute(&self.db)
            .await
            .map_err(|err| {
                error!("❌ Failed to create delivery schema: {err:?}");
                RepositoryError::from(err)
            })?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS delivery.orders (
                id          TEXT PRIMARY KEY,
                document    JSONB NOT NULL,
                ingested_at TIMESTAMPTZ NOT NULL DEFAULT current_timestamp
            )
            "#,
        )
        .execute(&self.db)
        .await
        .map_err(|err| {
            error!("❌ Failed to create delivery.orders: {err:?}");
            RepositoryError::from(err)
        })?;

        sqlx::query(
            r#"
            CREATE INDEX IF NOT EXISTS orders_document_idx
            ON delivery.orders USING GIN (document)
            "#,
        )
        .execute(&self.db)
        .await
        .map_err(|err| {
            error!("❌ Failed to create delivery.orders index: {err:?}");
            RepositoryError::from(err)
        })?;

        info!("✅ Delivery document store provisioned");
        Ok(())
    }

    async fn upsert(&self, document: &OrderDocument) -> Result<(), RepositoryError> {
        let body = serde_json::to_value(document)
            .map_err(|err| RepositoryError::Custom(format!("Failed to encode document: {err}")))?;

        sqlx::query(
            r#"
            INSERT INTO delivery.orders (id, document, ingested_at)
            VALUES ($1, $2, current_timestamp)
            ON CONFLICT (id) DO UPDATE
            SET document    = EXCLUDED.document,
                ingested_at = EXCLUDED.ingested_at
            "#,
        )
        .bind(&document.id)
        .bind(body)
        .execute(&self.db)
        .await
        .map_err(|err| {
            error!("❌ Failed to upsert order document {}: {err:?}", document.id);
            RepositoryError::from(err)
        })?;

        info!("✅ Upserted order document {}", document.id);
        Ok(())
    }
}
