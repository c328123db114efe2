/*
[INPUT]:  Endpoint URL and signed request document
[OUTPUT]: Raw reply body text
[POS]:    HTTP layer - pluggable POST transport
[UPDATE]: When changing connection options or status handling
*/

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use tracing::debug;
use url::Url;

use crate::http::client::ClientConfig;
use crate::http::{MerchantError, Result};

/// Sends a request body to an endpoint and returns the reply body
///
/// Errors are handed back to the caller as-is; implementations must not retry.
#[async_trait]
pub trait Transport: Send + Sync + std::fmt::Debug {
    async fn post(&self, url: &Url, body: String) -> Result<String>;
}

/// Transport backed by `reqwest`
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http_client: Client,
}

impl HttpTransport {
    /// Build a transport from client configuration
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(connect_timeout) = config.connect_timeout {
            builder = builder.connect_timeout(connect_timeout);
        }

        Ok(Self {
            http_client: builder.build()?,
        })
    }

    /// Wrap an existing `reqwest` client (proxies, custom TLS, ...)
    pub fn from_client(http_client: Client) -> Self {
        Self { http_client }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post(&self, url: &Url, body: String) -> Result<String> {
        let response = self
            .http_client
            .post(url.clone())
            .header(CONTENT_TYPE, "application/xml; charset=utf-8")
            .body(body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        debug!(%url, status = status.as_u16(), "http reply");

        if !status.is_success() {
            return Err(MerchantError::api_error(status, text));
        }
        Ok(text)
    }
}
