use std::collections::HashMap;

use shared::{
    domain::{Address, CatalogItemOrdered, OrderItem},
    errors::CheckoutError,
    model::{BasketWithItems, CatalogItem},
};

use crate::domain::OrderDraft;

/// Assembles an immutable order aggregate from a basket and the catalog
/// rows its items reference. Pure and synchronous: all reads happen before,
/// the commit happens after.
pub struct OrderAggregateBuilder {
    pic_base_url: String,
}

impl OrderAggregateBuilder {
    pub fn new(pic_base_url: impl Into<String>) -> Self {
        Self {
            pic_base_url: pic_base_url.into(),
        }
    }

    /// Turns a relative catalog picture path into an absolute URI. The
    /// snapshot stores the absolute form so the order stays renderable even
    /// if the catalog host layout changes.
    pub fn compose_pic_uri(&self, picture_uri: &str) -> String {
        format!(
            "{}/{}",
            self.pic_base_url.trim_end_matches('/'),
            picture_uri.trim_start_matches('/')
        )
    }

    pub fn build(
        &self,
        basket: &BasketWithItems,
        catalog_items: &[CatalogItem],
        ship_to_address: &Address,
    ) -> Result<OrderDraft, CheckoutError> {
        if basket.items.is_empty() {
            return Err(CheckoutError::EmptyBasket(basket.basket.id));
        }

        let by_id: HashMap<i64, &CatalogItem> =
            catalog_items.iter().map(|item| (item.id, item)).collect();

        let items = basket
            .items
            .iter()
            .map(|basket_item| {
                let catalog_item = by_id
                    .get(&basket_item.catalog_item_id)
                    .ok_or(CheckoutError::CatalogItemMissing(basket_item.catalog_item_id))?;

                let item_ordered = CatalogItemOrdered {
                    id: catalog_item.id,
                    product_name: catalog_item.name.clone(),
                    picture_uri: self.compose_pic_uri(&catalog_item.picture_uri),
                };

                Ok(OrderItem {
                    item_ordered,
                    unit_price: basket_item.unit_price,
                    units: basket_item.quantity,
                })
            })
            .collect::<Result<Vec<_>, CheckoutError>>()?;

        Ok(OrderDraft {
            buyer_id: basket.basket.buyer_id.clone(),
            ship_to_address: ship_to_address.clone(),
            items,
        })
    }
}
