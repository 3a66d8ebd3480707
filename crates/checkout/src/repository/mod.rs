mod basket;
mod catalog;
mod order;

pub use self::basket::BasketQueryRepository;
pub use self::catalog::CatalogQueryRepository;
pub use self::order::OrderCommandRepository;
