use std::sync::Arc;

use async_trait::async_trait;
use shared::errors::ServiceError;

use crate::domain::EscalationNotice;

pub type DynArchiveStore = Arc<dyn ArchiveStoreTrait + Send + Sync>;

/// Opaque durable object store. One object per call, never overwritten.
#[async_trait]
pub trait ArchiveStoreTrait {
    async fn put(&self, key: &str, payload: &[u8]) -> Result<(), ServiceError>;
}

pub type DynEscalationNotifier = Arc<dyn EscalationNotifierTrait + Send + Sync>;

#[async_trait]
pub trait EscalationNotifierTrait {
    async fn notify(&self, notice: &EscalationNotice) -> Result<(), ServiceError>;
}
