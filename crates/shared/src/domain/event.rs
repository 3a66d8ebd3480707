use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Topic carrying one message per created order. The message body is the
/// JSON-encoded order itself, keyed by the order id.
pub const ORDER_CREATED_TOPIC: &str = "order.created";

/// Consumer-side view of one queue delivery. `enqueued_at` and
/// `delivery_count` come from broker metadata and are observability-only:
/// they must never be used for deduplication.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCreatedMessage {
    pub order_id: i64,
    pub payload: String,
    pub enqueued_at: Option<DateTime<Utc>>,
    pub delivery_count: u32,
}
