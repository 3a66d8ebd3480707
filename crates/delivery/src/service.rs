use prometheus_client::registry::Registry;
use shared::{
    domain::Order,
    errors::IngestionError,
    utils::{Method, Metrics, Status},
};
use tokio::time::Instant;
use tracing::{error, info};

use crate::{abstract_trait::DynDocumentStore, domain::OrderDocument};

/// Ingests raw order payloads: deserialize, project, upsert. Re-ingesting a
/// redelivered order id overwrites the stored document instead of erroring,
/// so at-least-once delivery upstream is safe.
pub struct DeliveryIngestionService {
    store: DynDocumentStore,
    metrics: Metrics,
}

impl DeliveryIngestionService {
    pub fn new(store: DynDocumentStore, registry: &mut Registry) -> Self {
        let metrics = Metrics::new();

        registry.register(
            "delivery_ingestion_request_counter",
            "Total number of requests to the DeliveryIngestionService",
            metrics.request_counter.clone(),
        );
        registry.register(
            "delivery_ingestion_request_duration",
            "Histogram of request durations for the DeliveryIngestionService",
            metrics.request_duration.clone(),
        );

        Self { store, metrics }
    }

    pub async fn ingest(&self, payload: &[u8]) -> Result<OrderDocument, IngestionError> {
        let started = Instant::now();

        let result = self.ingest_inner(payload).await;

        let status = if result.is_ok() {
            Status::Success
        } else {
            Status::Error
        };
        self.metrics
            .record(Method::Post, status, started.elapsed().as_secs_f64());

        result
    }

    async fn ingest_inner(&self, payload: &[u8]) -> Result<OrderDocument, IngestionError> {
        let order: Order = serde_json::from_slice(payload).map_err(|e| {
            error!("❌ Failed to deserialize order payload: {e}");
            IngestionError::Malformed(e.to_string())
        })?;

        let document = OrderDocument::from(order);

        self.store.upsert(&document).await?;

        info!(
            "✅ Ingested order {} for buyer {}",
            document.id, document.buyer_id
        );

        Ok(document)
    }
}
