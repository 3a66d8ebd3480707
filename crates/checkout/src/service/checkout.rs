use async_trait::async_trait;
use opentelemetry::{
    Context, KeyValue,
    global::{self, BoxedTracer},
    trace::{Span, SpanKind, TraceContextExt, Tracer},
};
use prometheus_client::registry::Registry;
use shared::{
    domain::ApiResponse,
    errors::{CheckoutError, ServiceError},
    utils::{Method, Metrics, Status, TracingContext},
};
use tokio::time::Instant;
use tracing::{error, info};

use crate::{
    abstract_trait::{
        CheckoutServiceTrait, DynBasketQueryRepository, DynCatalogQueryRepository,
        DynOrderCommandRepository, DynOrderPublisher,
    },
    builder::OrderAggregateBuilder,
    domain::{CreateOrderRequest, OrderResponse},
};

pub struct CheckoutService {
    basket: DynBasketQueryRepository,
    catalog: DynCatalogQueryRepository,
    orders: DynOrderCommandRepository,
    publisher: DynOrderPublisher,
    builder: OrderAggregateBuilder,
    metrics: Metrics,
}

pub struct CheckoutServiceDeps {
    pub basket: DynBasketQueryRepository,
    pub catalog: DynCatalogQueryRepository,
    pub orders: DynOrderCommandRepository,
    pub publisher: DynOrderPublisher,
    pub builder: OrderAggregateBuilder,
}

impl CheckoutService {
    pub fn new(deps: CheckoutServiceDeps, registry: &mut Registry) -> Self {
        let CheckoutServiceDeps {
            basket,
            catalog,
            orders,
            publisher,
            builder,
        } = deps;

        let metrics = Metrics::new();

        registry.register(
            "checkout_service_request_counter",
            "Total number of requests to the CheckoutService",
            metrics.request_counter.clone(),
        );
        registry.register(
            "checkout_service_request_duration",
            "Histogram of request durations for the CheckoutService",
            metrics.request_duration.clone(),
        );

        Self {
            basket,
            catalog,
            orders,
            publisher,
            builder,
            metrics,
        }
    }

    fn get_tracer(&self) -> BoxedTracer {
        global::tracer("checkout-service")
    }

    fn start_tracing(&self, operation_name: &str, attributes: Vec<KeyValue>) -> TracingContext {
        let start_time = Instant::now();
        let tracer = self.get_tracer();
        let mut span = tracer
            .span_builder(operation_name.to_string())
            .with_kind(SpanKind::Server)
            .with_attributes(attributes)
            .start(&tracer);

        info!("Starting operation: {operation_name}");

        span.add_event(
            "Operation started",
            vec![KeyValue::new("operation", operation_name.to_string())],
        );

        let cx = Context::current_with_span(span);
        TracingContext { cx, start_time }
    }

    fn complete_tracing_success(&self, tracing_ctx: &TracingContext, message: &str) {
        self.complete_tracing_internal(tracing_ctx, true, message);
    }

    fn complete_tracing_error(&self, tracing_ctx: &TracingContext, error_message: &str) {
        self.complete_tracing_internal(tracing_ctx, false, error_message);
    }

    fn complete_tracing_internal(
        &self,
        tracing_ctx: &TracingContext,
        is_success: bool,
        message: &str,
    ) {
        let status_str = if is_success { "SUCCESS" } else { "ERROR" };
        let status = if is_success {
            Status::Success
        } else {
            Status::Error
        };
        let elapsed = tracing_ctx.start_time.elapsed().as_secs_f64();

        tracing_ctx.cx.span().add_event(
            "Operation completed",
            vec![
                KeyValue::new("status", status_str),
                KeyValue::new("duration_secs", elapsed.to_string()),
                KeyValue::new("message", message.to_string()),
            ],
        );

        if is_success {
            info!("✅ Operation completed successfully: {message}");
        } else {
            error!("❌ Operation failed: {message}");
        }

        self.metrics.record(Method::Post, status, elapsed);

        tracing_ctx.cx.span().end();
    }
}

#[async_trait]
impl CheckoutServiceTrait for CheckoutService {
    async fn create_order(
        &self,
        req: &CreateOrderRequest,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError> {
        info!("🏗️ Creating order from basket {}", req.basket_id);

        let tracing_ctx = self.start_tracing(
            "create_order",
            vec![
                KeyValue::new("component", "checkout"),
                KeyValue::new("operation", "create"),
                KeyValue::new("basket.id", req.basket_id.to_string()),
            ],
        );

        let basket = match self.basket.find_with_items(req.basket_id).await {
            Ok(Some(basket)) => basket,
            Ok(None) => {
                self.complete_tracing_error(&tracing_ctx, "Basket not found");
                return Err(CheckoutError::BasketNotFound(req.basket_id).into());
            }
            Err(e) => {
                error!("❌ Failed to fetch basket {}: {e:?}", req.basket_id);
                self.complete_tracing_error(&tracing_ctx, "Basket query failed");
                return Err(ServiceError::Repo(e));
            }
        };

        let catalog_ids: Vec<i64> = basket
            .items
            .iter()
            .map(|item| item.catalog_item_id)
            .collect();

        let catalog_items = match self.catalog.find_by_ids(&catalog_ids).await {
            Ok(items) => items,
            Err(e) => {
                error!("❌ Failed to fetch catalog items {catalog_ids:?}: {e:?}");
                self.complete_tracing_error(&tracing_ctx, "Catalog query failed");
                return Err(ServiceError::Repo(e));
            }
        };

        let draft = match self
            .builder
            .build(&basket, &catalog_items, &req.ship_to_address)
        {
            Ok(draft) => draft,
            Err(e) => {
                self.complete_tracing_error(&tracing_ctx, "Order assembly rejected");
                return Err(e.into());
            }
        };

        let order = match self.orders.create_order(&draft).await {
            Ok(order) => order,
            Err(e) => {
                error!("❌ Failed to commit order for basket {}: {e:?}", req.basket_id);
                self.complete_tracing_error(&tracing_ctx, "Order commit failed");
                return Err(ServiceError::Repo(e));
            }
        };

        // The order is committed; a lost notification is redelivered by the
        // queue layer, so publish failures never fail the request.
        if let Err(e) = self.publisher.publish_created(&order).await {
            error!("❌ Failed to publish event for order {}: {e:?}", order.id);
        }

        self.complete_tracing_success(&tracing_ctx, "Order created");

        Ok(ApiResponse {
            status: "success".into(),
            message: "Order created successfully".into(),
            data: OrderResponse::from(order),
        })
    }
}
