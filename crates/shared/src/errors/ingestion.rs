use thiserror::Error;

use crate::errors::RepositoryError;

/// Failure classification for the delivery ingestion endpoint. Malformed
/// payloads and store faults map to different HTTP statuses and are never
/// reported through a success-shaped body.
#[derive(Debug, Error)]
pub enum IngestionError {
    #[error("Malformed order payload: {0}")]
    Malformed(String),

    #[error("Document store error: {0}")]
    Store(#[from] RepositoryError),
}
