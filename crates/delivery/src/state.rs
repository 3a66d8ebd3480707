use std::{fmt, sync::Arc};

use prometheus_client::registry::Registry;
use shared::config::ConnectionPool;
use tokio::sync::Mutex;

use crate::{
    abstract_trait::DynDocumentStore, repository::PostgresDocumentStore,
    service::DeliveryIngestionService,
};

#[derive(Clone)]
pub struct AppState {
    pub ingestion: Arc<DeliveryIngestionService>,
    pub store: DynDocumentStore,
    pub registry: Arc<Mutex<Registry>>,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("ingestion", &"DeliveryIngestionService")
            .finish()
    }
}

impl AppState {
    pub fn new(pool: ConnectionPool) -> Self {
        let store = Arc::new(PostgresDocumentStore::new(pool)) as DynDocumentStore;

        let mut registry = Registry::default();
        let ingestion = Arc::new(DeliveryIngestionService::new(store.clone(), &mut registry));

        Self {
            ingestion,
            store,
            registry: Arc::new(Mutex::new(registry)),
        }
    }
}
