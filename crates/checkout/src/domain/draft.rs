use shared::domain::{Address, OrderItem};

/// Fully assembled order aggregate awaiting its durable commit. The id and
/// order date are assigned by the database when the draft is committed.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderDraft {
    pub buyer_id: String,
    pub ship_to_address: Address,
    pub items: Vec<OrderItem>,
}
