use serde::{Deserialize, Serialize};
use shared::domain::Address;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    #[validate(range(min = 1, message = "Basket ID is required"))]
    #[schema(example = 42)]
    pub basket_id: i64,

    #[validate(nested)]
    pub ship_to_address: Address,
}
