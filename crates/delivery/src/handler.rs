use std::sync::Arc;

use axum::{
    Json, Router,
    body::Body,
    extract::State,
    http::{StatusCode, header::CONTENT_TYPE},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use prometheus_client::encoding::text::encode;
use shared::{domain::ApiResponse, errors::HttpError};
use tower_http::trace::TraceLayer;

use crate::{domain::OrderDocument, state::AppState};

pub fn routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/delivery/orders", post(ingest_order))
        .route("/metrics", get(metrics_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[utoipa::path(
    post,
    path = "/delivery/orders",
    tag = "Delivery",
    request_body = shared::domain::Order,
    responses(
        (status = 200, description = "Order ingested", body = ApiResponse<OrderDocument>),
        (status = 400, description = "Malformed order payload"),
        (status = 503, description = "Document store unavailable")
    )
)]
pub async fn ingest_order(
    State(state): State<Arc<AppState>>,
    body: String,
) -> Result<impl IntoResponse, HttpError> {
    let document = state
        .ingestion
        .ingest(body.as_bytes())
        .await
        .map_err(HttpError::from)?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse {
            status: "success".into(),
            message: "Order ingested successfully".into(),
            data: document,
        }),
    ))
}

pub async fn metrics_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let mut buffer = String::new();

    let registry = state.registry.lock().await;

    if let Err(e) = encode(&mut buffer, &registry) {
        return Response::builder()
            .status(StatusCode::INTERNAL_SERVER_ERROR)
            .body(Body::from(format!("Failed to encode metrics: {e}")))
            .unwrap();
    }

    Response::builder()
        .status(StatusCode::OK)
        .header(
            CONTENT_TYPE,
            "application/openmetrics-text; version=1.0.0; charset=utf-8",
        )
        .body(Body::from(buffer))
        .unwrap()
}
