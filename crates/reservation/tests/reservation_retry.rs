//! Retry-window tests for the reservation handler, run against a flaky
//! in-memory archive store, a recording webhook and an instant sleeper —
//! the full window executes with no real delays.

use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

use async_trait::async_trait;
use reservation::{
    abstract_trait::{ArchiveStoreTrait, EscalationNotifierTrait},
    domain::EscalationNotice,
    handler::ReservationHandler,
    retry::{RetryPolicy, Sleeper},
};
use shared::{domain::OrderCreatedMessage, errors::ServiceError};

/// Fails the first `failures` puts, then accepts. Records every key it saw.
struct FlakyArchiveStore {
    failures: u32,
    keys: Mutex<Vec<String>>,
}

impl FlakyArchiveStore {
    fn new(failures: u32) -> Self {
        Self {
            failures,
            keys: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl ArchiveStoreTrait for FlakyArchiveStore {
    async fn put(&self, key: &str, _payload: &[u8]) -> Result<(), ServiceError> {
        let mut keys = self.keys.lock().unwrap();
        keys.push(key.to_string());
        if keys.len() as u32 <= self.failures {
            return Err(ServiceError::Archive("store unavailable".into()));
        }
        Ok(())
    }
}

#[derive(Default)]
struct RecordingNotifier {
    notices: Mutex<Vec<EscalationNotice>>,
}

#[async_trait]
impl EscalationNotifierTrait for RecordingNotifier {
    async fn notify(&self, notice: &EscalationNotice) -> Result<(), ServiceError> {
        self.notices.lock().unwrap().push(notice.clone());
        Ok(())
    }
}

struct FailingNotifier;

#[async_trait]
impl EscalationNotifierTrait for FailingNotifier {
    async fn notify(&self, _notice: &EscalationNotice) -> Result<(), ServiceError> {
        Err(ServiceError::Escalation("webhook unreachable".into()))
    }
}

#[derive(Default)]
struct InstantSleeper {
    sleeps: Mutex<Vec<Duration>>,
}

#[async_trait]
impl Sleeper for InstantSleeper {
    async fn sleep(&self, duration: Duration) {
        self.sleeps.lock().unwrap().push(duration);
    }
}

fn envelope() -> OrderCreatedMessage {
    OrderCreatedMessage {
        order_id: 42,
        payload: r#"{"id":42,"buyerId":"buyer-1"}"#.to_string(),
        enqueued_at: None,
        delivery_count: 1,
    }
}

fn policy() -> RetryPolicy {
    RetryPolicy::new(3, Duration::from_secs(1))
}

#[tokio::test]
async fn first_attempt_success_archives_once_without_backoff() {
    let store = Arc::new(FlakyArchiveStore::new(0));
    let notifier = Arc::new(RecordingNotifier::default());
    let sleeper = Arc::new(InstantSleeper::default());

    let handler =
        ReservationHandler::new(store.clone(), notifier.clone(), policy(), sleeper.clone());

    handler.process(&envelope()).await.unwrap();

    assert_eq!(store.keys.lock().unwrap().len(), 1);
    assert!(notifier.notices.lock().unwrap().is_empty());
    assert!(sleeper.sleeps.lock().unwrap().is_empty());
}

#[tokio::test]
async fn transient_failures_retry_with_fresh_keys_and_no_escalation() {
    let store = Arc::new(FlakyArchiveStore::new(2));
    let notifier = Arc::new(RecordingNotifier::default());
    let sleeper = Arc::new(InstantSleeper::default());

    let handler =
        ReservationHandler::new(store.clone(), notifier.clone(), policy(), sleeper.clone());

    handler.process(&envelope()).await.unwrap();

    let keys = store.keys.lock().unwrap();
    assert_eq!(keys.len(), 3);

    // every attempt must write under its own key
    let mut deduped = keys.clone();
    deduped.sort();
    deduped.dedup();
    assert_eq!(deduped.len(), keys.len());

    assert!(notifier.notices.lock().unwrap().is_empty());

    let sleeps = sleeper.sleeps.lock().unwrap();
    assert_eq!(sleeps.as_slice(), &[Duration::from_secs(1); 2]);
}

#[tokio::test]
async fn exhausted_retries_escalate_exactly_once_with_the_raw_payload() {
    let store = Arc::new(FlakyArchiveStore::new(u32::MAX));
    let notifier = Arc::new(RecordingNotifier::default());
    let sleeper = Arc::new(InstantSleeper::default());

    let handler =
        ReservationHandler::new(store.clone(), notifier.clone(), policy(), sleeper.clone());

    // exhaustion plus a successful escalation still counts as handled
    handler.process(&envelope()).await.unwrap();

    assert_eq!(store.keys.lock().unwrap().len(), 3);

    let notices = notifier.notices.lock().unwrap();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].order_id, 42);
    assert_eq!(notices[0].payload, envelope().payload);
    assert!(notices[0].error.contains("3 attempts"));
}

#[tokio::test]
async fn escalation_fault_propagates_out_of_the_handler() {
    let store = Arc::new(FlakyArchiveStore::new(u32::MAX));
    let sleeper = Arc::new(InstantSleeper::default());

    let handler = ReservationHandler::new(store, Arc::new(FailingNotifier), policy(), sleeper);

    let err = handler.process(&envelope()).await.unwrap_err();

    assert!(matches!(err, ServiceError::Escalation(_)));
}
