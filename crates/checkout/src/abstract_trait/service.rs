use std::sync::Arc;

use async_trait::async_trait;
use shared::{domain::ApiResponse, errors::ServiceError};

use crate::domain::{CreateOrderRequest, OrderResponse};

pub type DynCheckoutService = Arc<dyn CheckoutServiceTrait + Send + Sync>;

#[async_trait]
pub trait CheckoutServiceTrait {
    async fn create_order(
        &self,
        req: &CreateOrderRequest,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError>;
}
