use std::{fmt, sync::Arc};

use anyhow::Result;
use prometheus_client::registry::Registry;
use shared::{
    abstract_trait::DynKafka,
    config::{CheckoutConfig, ConnectionPool},
};

use crate::{
    abstract_trait::DynCheckoutService,
    builder::OrderAggregateBuilder,
    publisher::{DirectDeliveryClient, OrderEventPublisher},
    repository::{BasketQueryRepository, CatalogQueryRepository, OrderCommandRepository},
    service::{CheckoutService, CheckoutServiceDeps},
};

#[derive(Clone)]
pub struct DependenciesInject {
    pub checkout: DynCheckoutService,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("checkout", &"CheckoutService")
            .finish()
    }
}

pub struct DependenciesInjectDeps {
    pub pool: ConnectionPool,
    pub kafka: DynKafka,
    pub config: CheckoutConfig,
}

impl DependenciesInject {
    pub fn new(deps: DependenciesInjectDeps, registry: &mut Registry) -> Result<Self> {
        let DependenciesInjectDeps {
            pool,
            kafka,
            config,
        } = deps;

        let basket = Arc::new(BasketQueryRepository::new(pool.clone()));
        let catalog = Arc::new(CatalogQueryRepository::new(pool.clone()));
        let orders = Arc::new(OrderCommandRepository::new(pool));

        let direct = match config.direct_delivery_url {
            Some(url) => Some(DirectDeliveryClient::new(
                url,
                config.direct_delivery_key,
            )?),
            None => None,
        };

        let publisher = Arc::new(OrderEventPublisher::new(kafka, direct));
        let builder = OrderAggregateBuilder::new(config.pic_base_url);

        let checkout_deps = CheckoutServiceDeps {
            basket,
            catalog,
            orders,
            publisher,
            builder,
        };

        let checkout: DynCheckoutService =
            Arc::new(CheckoutService::new(checkout_deps, registry));

        Ok(Self { checkout })
    }
}
