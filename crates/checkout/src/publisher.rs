use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use shared::{
    abstract_trait::DynKafka,
    domain::{ORDER_CREATED_TOPIC, Order},
    errors::ServiceError,
};
use tracing::{error, info};

use crate::abstract_trait::OrderPublisherTrait;

const DIRECT_PUBLISH_TIMEOUT: Duration = Duration::from_secs(10);

/// Direct synchronous hand-off to the delivery endpoint, used alongside the
/// queue publish when a URL is configured. Failures are logged and dropped:
/// the queue path is the durable one.
pub struct DirectDeliveryClient {
    client: reqwest::Client,
    url: String,
    function_key: Option<String>,
}

impl DirectDeliveryClient {
    pub fn new(url: String, function_key: Option<String>) -> Result<Self, ServiceError> {
        let client = reqwest::Client::builder()
            .timeout(DIRECT_PUBLISH_TIMEOUT)
            .build()
            .map_err(|e| ServiceError::Internal(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            url,
            function_key,
        })
    }

    async fn publish(&self, payload: &[u8]) -> Result<(), ServiceError> {
        let mut request = self
            .client
            .post(&self.url)
            .header(CONTENT_TYPE, "application/json")
            .body(payload.to_vec());

        if let Some(key) = &self.function_key {
            request = request.header("x-functions-key", key);
        }

        request
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|e| ServiceError::Internal(format!("Direct delivery publish failed: {e}")))?;

        Ok(())
    }
}

/// Publishes exactly one `order.created` message per committed order, keyed
/// by the order id. The producer outlives individual requests.
pub struct OrderEventPublisher {
    kafka: DynKafka,
    direct: Option<DirectDeliveryClient>,
}

impl OrderEventPublisher {
    pub fn new(kafka: DynKafka, direct: Option<DirectDeliveryClient>) -> Self {
        Self { kafka, direct }
    }
}

#[async_trait]
impl OrderPublisherTrait for OrderEventPublisher {
    async fn publish_created(&self, order: &Order) -> Result<(), ServiceError> {
        let payload = serde_json::to_vec(order)
            .map_err(|e| ServiceError::Custom(format!("Failed to serialize order: {e}")))?;

        if let Some(direct) = &self.direct {
            match direct.publish(&payload).await {
                Ok(()) => info!("📤 Direct delivery publish succeeded for order {}", order.id),
                Err(e) => error!("⚠️ Direct delivery publish failed for order {}: {e:?}", order.id),
            }
        }

        self.kafka
            .publish(ORDER_CREATED_TOPIC, &order.id.to_string(), &payload)
            .await?;

        info!("📤 Published order.created | order_id={}", order.id);
        Ok(())
    }
}
