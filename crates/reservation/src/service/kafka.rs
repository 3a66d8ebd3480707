use rdkafka::{
    config::ClientConfig,
    consumer::{CommitMode, Consumer, StreamConsumer},
};
use shared::errors::ServiceError;
use tokio::time::{Duration, sleep};
use tracing::{error, info};

use crate::handler::ReservationHandler;

/// At-least-once consumer: the offset is committed only after the handler
/// reports the message handled. A handler fault leaves the offset alone and
/// the broker's redelivery policy takes over.
pub struct KafkaReservationService {
    consumer: StreamConsumer,
    handler: ReservationHandler,
}

impl KafkaReservationService {
    pub fn new(
        brokers: &str,
        group_id: &str,
        topics: &[&str],
        handler: ReservationHandler,
    ) -> Result<Self, ServiceError> {
        let consumer: StreamConsumer = ClientConfig::new()
            .set("bootstrap.servers", brokers)
            .set("group.id", group_id)
            .set("enable.partition.eof", "false")
            .set("session.timeout.ms", "6000")
            .set("enable.auto.commit", "false")
            .set("auto.offset.reset", "earliest")
            .set("allow.auto.create.topics", "true")
            .create()
            .map_err(ServiceError::from)?;

        consumer.subscribe(topics).map_err(ServiceError::from)?;

        Ok(Self { consumer, handler })
    }

    pub async fn start_consuming(&self) -> Result<(), ServiceError> {
        info!("🚀 Starting reservation consumer...");

        loop {
            match self.consumer.recv().await {
                Err(e) => {
                    error!("⚠️ Kafka not connected or error: {e:?}");

                    sleep(Duration::from_secs(5)).await;
                    continue;
                }
                Ok(message) => match self.handler.handle_message(&message).await {
                    Ok(()) => {
                        if let Err(e) = self.consumer.commit_message(&message, CommitMode::Async) {
                            error!("Failed to commit message: {e:?}");
                        }
                    }
                    Err(e) => {
                        error!("Failed to handle message, offset withheld: {e:?}");
                    }
                },
            }
        }
    }
}
