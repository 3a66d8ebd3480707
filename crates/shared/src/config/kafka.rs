use async_trait::async_trait;
use rdkafka::config::ClientConfig;
use rdkafka::error::KafkaResult;
use rdkafka::producer::{BaseProducer, BaseRecord, Producer};
use tokio::time::Duration;
use tracing::info;

use crate::abstract_trait::KafkaTrait;
use crate::errors::ServiceError;

/// Long-lived producer shared across requests. Consumers are constructed in
/// the crate that owns them; this wrapper only publishes.
pub struct Kafka {
    producer: BaseProducer,
}

impl Kafka {
    pub fn new(brokers: &str) -> Result<Self, ServiceError> {
        let producer: BaseProducer = ClientConfig::new()
            .set("bootstrap.servers", brokers)
            .set("message.timeout.ms", "6000")
            .set("allow.auto.create.topics", "true")
            .create()
            .map_err(ServiceError::from)?;

        info!("Kafka producer connected successfully");
        Ok(Kafka { producer })
    }

    pub fn send_message(&self, topic: &str, key: &str, value: &[u8]) -> KafkaResult<()> {
        if let Err((kafka_error, _record)) = self
            .producer
            .send(BaseRecord::to(topic).key(key).payload(value))
        {
            return Err(kafka_error);
        }

        let _ = self.producer.flush(Duration::from_secs(1));
        info!(topic, key, "Message sent successfully");
        Ok(())
    }
}

#[async_trait]
impl KafkaTrait for Kafka {
    async fn publish(&self, topic: &str, key: &str, value: &[u8]) -> Result<(), ServiceError> {
        self.send_message(topic, key, value)
            .map_err(ServiceError::from)
    }
}
