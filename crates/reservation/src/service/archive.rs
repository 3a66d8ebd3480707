use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use shared::errors::ServiceError;

use crate::abstract_trait::ArchiveStoreTrait;

const ARCHIVE_PUT_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP-backed object store: one `PUT {base}/{container}/{key}` per archived
/// payload, content type `application/json`.
pub struct HttpArchiveStore {
    client: reqwest::Client,
    base_url: String,
    container: String,
}

impl HttpArchiveStore {
    pub fn new(base_url: &str, container: &str) -> Result<Self, ServiceError> {
        let client = reqwest::Client::builder()
            .timeout(ARCHIVE_PUT_TIMEOUT)
            .build()
            .map_err(|e| ServiceError::Internal(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            container: container.to_string(),
        })
    }
}

#[async_trait]
impl ArchiveStoreTrait for HttpArchiveStore {
    async fn put(&self, key: &str, payload: &[u8]) -> Result<(), ServiceError> {
        let url = format!("{}/{}/{}", self.base_url, self.container, key);

        self.client
            .put(&url)
            .header(CONTENT_TYPE, "application/json")
            .body(payload.to_vec())
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|e| ServiceError::Archive(format!("PUT {url} failed: {e}")))?;

        Ok(())
    }
}
