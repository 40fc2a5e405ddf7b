//! HTTP attribute store client

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, instrument};
use url::Url;

use crate::error::{Result, StoreError};
use crate::traits::AttributeStore;

/// HTTP client for an attribute store endpoint
#[derive(Debug, Clone)]
pub struct HttpStore {
    client: Client,
    base_url: Url,
}

impl HttpStore {
    /// Create a new store client
    ///
    /// # Errors
    /// Returns an error if the base URL is invalid.
    pub fn new(base_url: impl AsRef<str>) -> Result<Self> {
        let base_url = Url::parse(base_url.as_ref())?;
        Ok(Self {
            client: Client::new(),
            base_url,
        })
    }

    /// Create a new store client with a custom `reqwest::Client`
    ///
    /// # Errors
    /// Returns an error if the base URL is invalid.
    pub fn with_client(base_url: impl AsRef<str>, client: Client) -> Result<Self> {
        let base_url = Url::parse(base_url.as_ref())?;
        Ok(Self { client, base_url })
    }

    /// Build a full URL from an attribute path
    fn url(&self, path: &str) -> Result<Url> {
        self.base_url.join(path).map_err(StoreError::Url)
    }
}

#[async_trait]
impl AttributeStore for HttpStore {
    #[instrument(skip(self, content), fields(bytes = content.len()))]
    async fn put(&self, path: &str, content: Vec<u8>) -> Result<()> {
        let url = self.url(path)?;

        debug!(%url, "writing attribute");

        let response = self.client.put(url).body(content).send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(StoreError::Api { status, message });
        }

        Ok(())
    }
}
