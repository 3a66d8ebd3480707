use rdkafka::error::KafkaError;
use thiserror::Error;

use crate::errors::{CheckoutError, IngestionError, RepositoryError};

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Repository error: {0}")]
    Repo(#[from] RepositoryError),

    #[error("Checkout rejected: {0}")]
    Checkout(#[from] CheckoutError),

    #[error("Ingestion failed: {0}")]
    Ingestion(#[from] IngestionError),

    #[error("Kafka error: {0}")]
    Kafka(String),

    #[error("Archive store error: {0}")]
    Archive(String),

    #[error("Escalation webhook error: {0}")]
    Escalation(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Custom error: {0}")]
    Custom(String),
}

impl From<KafkaError> for ServiceError {
    fn from(error: KafkaError) -> Self {
        ServiceError::Kafka(error.to_string())
    }
}
