use std::sync::Arc;

use async_trait::async_trait;
use shared::errors::RepositoryError;

use crate::domain::OrderDocument;

pub type DynDocumentStore = Arc<dyn DocumentStoreTrait + Send + Sync>;

#[async_trait]
pub trait DocumentStoreTrait {
    /// Idempotent create-if-absent of the database/container this store
    /// writes into.
    async fn ensure_provisioned(&self) -> Result<(), RepositoryError>;

    /// Create-or-overwrite keyed by the document id, so re-ingesting a
    /// redelivered order never faults on a duplicate key.
    async fn upsert(&self, document: &OrderDocument) -> Result<(), RepositoryError>;
}
