use std::{sync::Arc, time::Duration};

use shared::{
    config::ReservationConfig,
    domain::ORDER_CREATED_TOPIC,
    errors::ServiceError,
};
use tracing::info;

use crate::{
    abstract_trait::{DynArchiveStore, DynEscalationNotifier},
    handler::ReservationHandler,
    retry::{RetryPolicy, TokioSleeper},
    service::{HttpArchiveStore, KafkaReservationService, WebhookEscalationService},
};

pub struct ReservationApp {
    config: ReservationConfig,
    kafka_broker: String,
}

impl ReservationApp {
    pub fn new(config: ReservationConfig, kafka_broker: &str) -> Self {
        Self {
            config,
            kafka_broker: kafka_broker.to_string(),
        }
    }

    pub async fn run(self) -> Result<(), ServiceError> {
        let archive = Arc::new(HttpArchiveStore::new(
            &self.config.archive_url,
            &self.config.archive_container,
        )?) as DynArchiveStore;

        let escalation = Arc::new(WebhookEscalationService::new(
            &self.config.escalation_url,
            Duration::from_secs(self.config.escalation_timeout_secs),
        )?) as DynEscalationNotifier;

        let policy = RetryPolicy::new(
            self.config.archive_max_attempts,
            Duration::from_secs(self.config.archive_retry_interval_secs),
        );

        let handler = ReservationHandler::new(archive, escalation, policy, Arc::new(TokioSleeper));

        let consumer = KafkaReservationService::new(
            &self.kafka_broker,
            "reservation-service-group",
            &[ORDER_CREATED_TOPIC],
            handler,
        )?;

        info!("🚀 Starting Reservation Service...");
        consumer.start_consuming().await
    }
}
