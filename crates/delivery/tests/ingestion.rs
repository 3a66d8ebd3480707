//! Ingestion tests against an in-memory document store: round-trip
//! fidelity, idempotent re-ingestion and failure classification.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use delivery::{
    abstract_trait::DocumentStoreTrait, domain::OrderDocument, service::DeliveryIngestionService,
};
use prometheus_client::registry::Registry;
use shared::{
    domain::{Address, CatalogItemOrdered, Order, OrderItem},
    errors::{IngestionError, RepositoryError},
};

#[derive(Default)]
struct InMemoryDocumentStore {
    documents: Mutex<HashMap<String, OrderDocument>>,
    fail_writes: bool,
}

#[async_trait]
impl DocumentStoreTrait for InMemoryDocumentStore {
    async fn ensure_provisioned(&self) -> Result<(), RepositoryError> {
        Ok(())
    }

    async fn upsert(&self, document: &OrderDocument) -> Result<(), RepositoryError> {
        if self.fail_writes {
            return Err(RepositoryError::Custom("store unavailable".into()));
        }
        self.documents
            .lock()
            .unwrap()
            .insert(document.id.clone(), document.clone());
        Ok(())
    }
}

fn service(store: Arc<InMemoryDocumentStore>) -> DeliveryIngestionService {
    let mut registry = Registry::default();
    DeliveryIngestionService::new(store, &mut registry)
}

fn widget_order(id: i64, units: i32) -> Order {
    Order {
        id,
        buyer_id: "buyer-1".into(),
        order_date: DateTime::parse_from_rfc3339("2024-05-01T09:30:00+02:00")
            .unwrap()
            .with_timezone(&Utc),
        ship_to_address: Address {
            street: "1 Main St".into(),
            city: "Springfield".into(),
            state: "IL".into(),
            country: "USA".into(),
            zip_code: "62704".into(),
        },
        order_items: vec![OrderItem {
            item_ordered: CatalogItemOrdered {
                id: 7,
                product_name: "Widget".into(),
                picture_uri: "http://catalog.local/pics/7.png".into(),
            },
            unit_price: 9.99,
            units,
        }],
    }
}

#[tokio::test]
async fn ingesting_a_serialized_order_round_trips_into_a_document() {
    let store = Arc::new(InMemoryDocumentStore::default());
    let service = service(store.clone());

    let order = widget_order(42, 2);
    let payload = serde_json::to_vec(&order).unwrap();

    let document = service.ingest(&payload).await.unwrap();

    assert_eq!(document.id, "42");
    assert_eq!(document.buyer_id, order.buyer_id);
    assert_eq!(document.ship_to_address, order.ship_to_address);
    assert_eq!(document.order_items, order.order_items);
    assert_eq!(document.order_date, order.order_date);

    let documents = store.documents.lock().unwrap();
    assert_eq!(documents.len(), 1);
    assert_eq!(documents["42"], document);
}

#[tokio::test]
async fn reingesting_the_same_order_id_keeps_one_document_with_the_latest_payload() {
    let store = Arc::new(InMemoryDocumentStore::default());
    let service = service(store.clone());

    let first = serde_json::to_vec(&widget_order(42, 2)).unwrap();
    let second = serde_json::to_vec(&widget_order(42, 5)).unwrap();

    service.ingest(&first).await.unwrap();
    service.ingest(&second).await.unwrap();

    let documents = store.documents.lock().unwrap();
    assert_eq!(documents.len(), 1);
    assert_eq!(documents["42"].order_items[0].units, 5);
}

#[tokio::test]
async fn malformed_payload_is_classified_not_masked() {
    let store = Arc::new(InMemoryDocumentStore::default());
    let service = service(store.clone());

    let err = service.ingest(b"{not json").await.unwrap_err();

    assert!(matches!(err, IngestionError::Malformed(_)));
    assert!(store.documents.lock().unwrap().is_empty());
}

#[tokio::test]
async fn store_fault_surfaces_as_a_store_error() {
    let store = Arc::new(InMemoryDocumentStore {
        documents: Mutex::new(HashMap::new()),
        fail_writes: true,
    });
    let service = service(store);

    let payload = serde_json::to_vec(&widget_order(42, 2)).unwrap();
    let err = service.ingest(&payload).await.unwrap_err();

    assert!(matches!(err, IngestionError::Store(_)));
}
