//! Checkout service tests against in-memory repositories and a recording
//! publisher: no database, broker, or network involved.

use std::{
    collections::HashMap,
    sync::{
        Arc, Mutex,
        atomic::{AtomicI64, Ordering},
    },
};

use async_trait::async_trait;
use checkout::{
    abstract_trait::{
        BasketQueryRepositoryTrait, CatalogQueryRepositoryTrait, CheckoutServiceTrait,
        OrderCommandRepositoryTrait, OrderPublisherTrait,
    },
    builder::OrderAggregateBuilder,
    domain::{CreateOrderRequest, OrderDraft},
    service::{CheckoutService, CheckoutServiceDeps},
};
use chrono::Utc;
use prometheus_client::registry::Registry;
use shared::{
    domain::{Address, Order},
    errors::{CheckoutError, RepositoryError, ServiceError},
    model::{Basket, BasketItem, BasketWithItems, CatalogItem},
};

struct InMemoryBasketRepository {
    baskets: HashMap<i64, BasketWithItems>,
}

#[async_trait]
impl BasketQueryRepositoryTrait for InMemoryBasketRepository {
    async fn find_with_items(
        &self,
        basket_id: i64,
    ) -> Result<Option<BasketWithItems>, RepositoryError> {
        Ok(self.baskets.get(&basket_id).cloned())
    }
}

struct InMemoryCatalogRepository {
    items: Vec<CatalogItem>,
}

#[async_trait]
impl CatalogQueryRepositoryTrait for InMemoryCatalogRepository {
    async fn find_by_ids(&self, ids: &[i64]) -> Result<Vec<CatalogItem>, RepositoryError> {
        Ok(self
            .items
            .iter()
            .filter(|item| ids.contains(&item.id))
            .cloned()
            .collect())
    }
}

#[derive(Default)]
struct RecordingOrderRepository {
    committed: Mutex<Vec<Order>>,
    next_id: AtomicI64,
}

#[async_trait]
impl OrderCommandRepositoryTrait for RecordingOrderRepository {
    async fn create_order(&self, draft: &OrderDraft) -> Result<Order, RepositoryError> {
        let order = Order {
            id: self.next_id.fetch_add(1, Ordering::SeqCst) + 1,
            buyer_id: draft.buyer_id.clone(),
            order_date: Utc::now(),
            ship_to_address: draft.ship_to_address.clone(),
            order_items: draft.items.clone(),
        };
        self.committed.lock().unwrap().push(order.clone());
        Ok(order)
    }
}

#[derive(Default)]
struct RecordingPublisher {
    published: Mutex<Vec<Order>>,
    fail: bool,
}

#[async_trait]
impl OrderPublisherTrait for RecordingPublisher {
    async fn publish_created(&self, order: &Order) -> Result<(), ServiceError> {
        if self.fail {
            return Err(ServiceError::Kafka("broker unavailable".into()));
        }
        self.published.lock().unwrap().push(order.clone());
        Ok(())
    }
}

struct Harness {
    orders: Arc<RecordingOrderRepository>,
    publisher: Arc<RecordingPublisher>,
    service: CheckoutService,
}

fn ship_to() -> Address {
    Address {
        street: "1 Main St".into(),
        city: "Springfield".into(),
        state: "IL".into(),
        country: "USA".into(),
        zip_code: "62704".into(),
    }
}

fn harness(
    baskets: HashMap<i64, BasketWithItems>,
    catalog: Vec<CatalogItem>,
    failing_publisher: bool,
) -> Harness {
    let orders = Arc::new(RecordingOrderRepository::default());
    let publisher = Arc::new(RecordingPublisher {
        published: Mutex::new(Vec::new()),
        fail: failing_publisher,
    });

    let deps = CheckoutServiceDeps {
        basket: Arc::new(InMemoryBasketRepository { baskets }),
        catalog: Arc::new(InMemoryCatalogRepository { items: catalog }),
        orders: orders.clone(),
        publisher: publisher.clone(),
        builder: OrderAggregateBuilder::new("http://catalog.local"),
    };

    let mut registry = Registry::default();
    let service = CheckoutService::new(deps, &mut registry);

    Harness {
        orders,
        publisher,
        service,
    }
}

fn widget_basket() -> HashMap<i64, BasketWithItems> {
    HashMap::from([(
        42,
        BasketWithItems {
            basket: Basket {
                id: 42,
                buyer_id: "buyer-1".into(),
            },
            items: vec![BasketItem {
                id: 1,
                basket_id: 42,
                catalog_item_id: 7,
                unit_price: 9.99,
                quantity: 2,
            }],
        },
    )])
}

fn widget_catalog() -> Vec<CatalogItem> {
    vec![CatalogItem {
        id: 7,
        name: "Widget".into(),
        picture_uri: "/pics/7.png".into(),
        price: 9.99,
    }]
}

#[tokio::test]
async fn create_order_snapshots_the_basket() {
    let harness = harness(widget_basket(), widget_catalog(), false);

    let response = harness
        .service
        .create_order(&CreateOrderRequest {
            basket_id: 42,
            ship_to_address: ship_to(),
        })
        .await
        .unwrap();

    let order = &response.data;
    assert_eq!(order.order_items.len(), 1);

    let item = &order.order_items[0];
    assert_eq!(item.item_ordered.id, 7);
    assert_eq!(item.item_ordered.product_name, "Widget");
    assert_eq!(
        item.item_ordered.picture_uri,
        "http://catalog.local/pics/7.png"
    );
    assert_eq!(item.units, 2);
    assert_eq!(item.unit_price, 9.99);
    assert!((order.total - 19.98).abs() < 1e-9);

    assert_eq!(harness.orders.committed.lock().unwrap().len(), 1);
    assert_eq!(harness.publisher.published.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn order_item_count_matches_basket_item_count() {
    let baskets = HashMap::from([(
        1,
        BasketWithItems {
            basket: Basket {
                id: 1,
                buyer_id: "buyer-2".into(),
            },
            items: vec![
                BasketItem {
                    id: 1,
                    basket_id: 1,
                    catalog_item_id: 7,
                    unit_price: 9.99,
                    quantity: 1,
                },
                BasketItem {
                    id: 2,
                    basket_id: 1,
                    catalog_item_id: 8,
                    unit_price: 2.50,
                    quantity: 4,
                },
            ],
        },
    )]);
    let catalog = vec![
        CatalogItem {
            id: 7,
            name: "Widget".into(),
            picture_uri: "/pics/7.png".into(),
            price: 9.99,
        },
        CatalogItem {
            id: 8,
            name: "Gadget".into(),
            picture_uri: "/pics/8.png".into(),
            price: 2.50,
        },
    ];

    let harness = harness(baskets, catalog, false);

    let response = harness
        .service
        .create_order(&CreateOrderRequest {
            basket_id: 1,
            ship_to_address: ship_to(),
        })
        .await
        .unwrap();

    assert_eq!(response.data.order_items.len(), 2);
    for item in &response.data.order_items {
        assert!((item.total() - item.unit_price * item.units as f64).abs() < 1e-9);
    }
    assert!((response.data.total - (9.99 + 10.0)).abs() < 1e-9);
}

#[tokio::test]
async fn unknown_basket_fails_without_side_effects() {
    let harness = harness(HashMap::new(), widget_catalog(), false);

    let err = harness
        .service
        .create_order(&CreateOrderRequest {
            basket_id: 999,
            ship_to_address: ship_to(),
        })
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ServiceError::Checkout(CheckoutError::BasketNotFound(999))
    ));
    assert!(harness.orders.committed.lock().unwrap().is_empty());
    assert!(harness.publisher.published.lock().unwrap().is_empty());
}

#[tokio::test]
async fn empty_basket_fails_without_side_effects() {
    let baskets = HashMap::from([(
        5,
        BasketWithItems {
            basket: Basket {
                id: 5,
                buyer_id: "buyer-3".into(),
            },
            items: vec![],
        },
    )]);
    let harness = harness(baskets, widget_catalog(), false);

    let err = harness
        .service
        .create_order(&CreateOrderRequest {
            basket_id: 5,
            ship_to_address: ship_to(),
        })
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ServiceError::Checkout(CheckoutError::EmptyBasket(5))
    ));
    assert!(harness.orders.committed.lock().unwrap().is_empty());
    assert!(harness.publisher.published.lock().unwrap().is_empty());
}

#[tokio::test]
async fn missing_catalog_item_fails_without_side_effects() {
    let harness = harness(widget_basket(), vec![], false);

    let err = harness
        .service
        .create_order(&CreateOrderRequest {
            basket_id: 42,
            ship_to_address: ship_to(),
        })
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ServiceError::Checkout(CheckoutError::CatalogItemMissing(7))
    ));
    assert!(harness.orders.committed.lock().unwrap().is_empty());
    assert!(harness.publisher.published.lock().unwrap().is_empty());
}

#[tokio::test]
async fn publish_failure_does_not_fail_the_committed_order() {
    let harness = harness(widget_basket(), widget_catalog(), true);

    let response = harness
        .service
        .create_order(&CreateOrderRequest {
            basket_id: 42,
            ship_to_address: ship_to(),
        })
        .await
        .unwrap();

    assert_eq!(response.status, "success");
    assert_eq!(harness.orders.committed.lock().unwrap().len(), 1);
}
