mod basket;
mod catalog;
mod order;
mod publisher;
mod service;

pub use self::basket::{BasketQueryRepositoryTrait, DynBasketQueryRepository};
pub use self::catalog::{CatalogQueryRepositoryTrait, DynCatalogQueryRepository};
pub use self::order::{DynOrderCommandRepository, OrderCommandRepositoryTrait};
pub use self::publisher::{DynOrderPublisher, OrderPublisherTrait};
pub use self::service::{CheckoutServiceTrait, DynCheckoutService};
