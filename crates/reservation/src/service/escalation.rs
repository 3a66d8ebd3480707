use std::time::Duration;

use async_trait::async_trait;
use shared::errors::ServiceError;

use crate::{abstract_trait::EscalationNotifierTrait, domain::EscalationNotice};

/// One-shot webhook notifier. The call carries an explicit deadline so an
/// unresponsive webhook cannot pin a consumer slot indefinitely; the
/// response status and body are not consumed.
pub struct WebhookEscalationService {
    client: reqwest::Client,
    url: String,
}

impl WebhookEscalationService {
    pub fn new(url: &str, timeout: Duration) -> Result<Self, ServiceError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ServiceError::Internal(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            url: url.to_string(),
        })
    }
}

#[async_trait]
impl EscalationNotifierTrait for WebhookEscalationService {
    async fn notify(&self, notice: &EscalationNotice) -> Result<(), ServiceError> {
        self.client
            .post(&self.url)
            .json(notice)
            .send()
            .await
            .map_err(|e| ServiceError::Escalation(format!("Escalation webhook call failed: {e}")))?;

        Ok(())
    }
}
