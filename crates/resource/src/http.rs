//! HTTP fetcher backed by `reqwest`.

use async_trait::async_trait;
use eventdoc_traits::{RemoteFetcher, ResourceError, SharedResourceData};
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl RemoteFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<SharedResourceData, ResourceError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ResourceError::Fetch {
                url: url.to_string(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ResourceError::Http {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let bytes = response.bytes().await.map_err(|e| ResourceError::Fetch {
            url: url.to_string(),
            message: e.to_string(),
        })?;
        Ok(Arc::new(bytes.to_vec()))
    }

    fn name(&self) -> &'static str {
        "HttpFetcher"
    }
}
