use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use shared::{domain::ApiResponse, errors::HttpError};

use crate::{
    domain::{CreateOrderRequest, OrderResponse},
    middleware::SimpleValidatedJson,
    state::AppState,
};

#[utoipa::path(
    post,
    path = "/api/checkout",
    tag = "Checkout",
    request_body = CreateOrderRequest,
    responses(
        (status = 201, description = "Order created", body = ApiResponse<OrderResponse>),
        (status = 400, description = "Validation error or empty basket"),
        (status = 404, description = "Basket not found"),
        (status = 409, description = "Basket references a missing catalog item"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn create_order(
    State(state): State<Arc<AppState>>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateOrderRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = state
        .di_container
        .checkout
        .create_order(&body)
        .await
        .map_err(HttpError::from)?;

    Ok((StatusCode::CREATED, Json(response)))
}
