use chrono::DateTime;
use rdkafka::{
    Message,
    message::{BorrowedMessage, Headers},
};
use shared::{domain::OrderCreatedMessage, errors::ServiceError};
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::{
    abstract_trait::{DynArchiveStore, DynEscalationNotifier},
    domain::EscalationNotice,
    retry::{DynSleeper, RetryPolicy, RetryState},
};

/// Handles one inbound delivery: archive the raw payload with bounded
/// retry, escalate once if the store never accepts it. Holds no mutable
/// state, so concurrent invocations for distinct messages are safe.
pub struct ReservationHandler {
    archive: DynArchiveStore,
    escalation: DynEscalationNotifier,
    policy: RetryPolicy,
    sleeper: DynSleeper,
}

impl ReservationHandler {
    pub fn new(
        archive: DynArchiveStore,
        escalation: DynEscalationNotifier,
        policy: RetryPolicy,
        sleeper: DynSleeper,
    ) -> Self {
        Self {
            archive,
            escalation,
            policy,
            sleeper,
        }
    }

    pub async fn handle_message(&self, message: &BorrowedMessage<'_>) -> Result<(), ServiceError> {
        let payload = message
            .payload()
            .ok_or_else(|| ServiceError::Custom("Empty message payload".to_string()))?;

        let envelope = envelope_from(message, payload);

        info!(
            order_id = envelope.order_id,
            delivery_count = envelope.delivery_count,
            enqueued_at = ?envelope.enqueued_at,
            "📥 Received order.created delivery"
        );

        self.process(&envelope).await
    }

    /// Archive-with-retry for one envelope. The payload is archived as
    /// received; it is never deserialized here, so even a malformed order
    /// still gets archived and escalated.
    pub async fn process(&self, envelope: &OrderCreatedMessage) -> Result<(), ServiceError> {
        let payload = envelope.payload.as_bytes();
        let mut state = self.policy.first();

        while let RetryState::Attempting(attempt) = state {
            // A fresh key per attempt: an attempt that fails after the store
            // persisted the object leaves a duplicate archive entry behind.
            let key = Uuid::new_v4().to_string();

            match self.archive.put(&key, payload).await {
                Ok(()) => {
                    info!(
                        order_id = envelope.order_id,
                        key, attempt, "✅ Archived order payload"
                    );
                    state = self.policy.next(state, true);
                }
                Err(e) => {
                    error!(
                        order_id = envelope.order_id,
                        key,
                        attempt,
                        max_attempts = self.policy.max_attempts(),
                        "❌ Archive attempt failed: {e:?}"
                    );
                    state = self.policy.next(state, false);
                    if matches!(state, RetryState::Attempting(_)) {
                        self.sleeper.sleep(self.policy.interval()).await;
                    }
                }
            }
        }

        if state == RetryState::Exhausted {
            let notice = EscalationNotice {
                error: format!(
                    "Archiving order {} failed after {} attempts",
                    envelope.order_id,
                    self.policy.max_attempts()
                ),
                order_id: envelope.order_id,
                payload: envelope.payload.clone(),
            };

            // One shot, never retried. A transport fault propagates out and
            // the offset stays uncommitted.
            self.escalation.notify(&notice).await?;

            warn!(
                order_id = envelope.order_id,
                "🚨 Escalated order payload to webhook after exhausting retries"
            );
        }

        Ok(())
    }
}

fn envelope_from(message: &BorrowedMessage<'_>, payload: &[u8]) -> OrderCreatedMessage {
    let order_id = message
        .key()
        .and_then(|key| std::str::from_utf8(key).ok())
        .and_then(|key| key.parse::<i64>().ok())
        .unwrap_or_else(|| {
            warn!("Message has no usable order-id key");
            0
        });

    let enqueued_at = message
        .timestamp()
        .to_millis()
        .and_then(DateTime::from_timestamp_millis);

    let delivery_count = message
        .headers()
        .and_then(|headers| {
            headers
                .iter()
                .find(|header| header.key == "delivery-count")
                .and_then(|header| header.value)
                .and_then(|value| std::str::from_utf8(value).ok())
                .and_then(|value| value.parse::<u32>().ok())
        })
        .unwrap_or(0);

    OrderCreatedMessage {
        order_id,
        payload: String::from_utf8_lossy(payload).into_owned(),
        enqueued_at,
        delivery_count,
    }
}
