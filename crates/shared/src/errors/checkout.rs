use thiserror::Error;

/// Validation failures raised while assembling an order from a basket.
/// None of these leave any side effect behind: no order row is written and
/// no event is published.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckoutError {
    #[error("Basket {0} not found")]
    BasketNotFound(i64),

    #[error("Basket {0} has no items to check out")]
    EmptyBasket(i64),

    #[error("Catalog item {0} referenced by the basket does not exist")]
    CatalogItemMissing(i64),
}
