/*
[INPUT]:  Merchant configuration, HTTP options and a transport
[OUTPUT]: Configured merchant client that signs and posts requests
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing request execution
*/

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};
use url::Url;

use crate::config::MerchantConfig;
use crate::http::transport::{HttpTransport, Transport};
use crate::http::{RequestSigner, Result};
use crate::xml::{envelope, to_json_string};

/// Base URL of the merchant API
pub const API_BASE_URL: &str = "https://api.privatbank.ua/p24api";

/// HTTP client configuration
///
/// No overall request timeout is set by default; the bank is told to answer
/// within 90 seconds through the request payload instead.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Option<Duration>,
    pub connect_timeout: Option<Duration>,
    pub base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: None,
            connect_timeout: Some(Duration::from_secs(10)),
            base_url: API_BASE_URL.to_string(),
        }
    }
}

/// Main client for the merchant API
#[derive(Debug, Clone)]
pub struct MerchantClient {
    merchant: Arc<MerchantConfig>,
    signer: RequestSigner,
    base_url: String,
    transport: Arc<dyn Transport>,
}

impl MerchantClient {
    /// Create a new client with default configuration
    pub fn new(merchant: MerchantConfig) -> Result<Self> {
        Self::with_config(merchant, ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(merchant: MerchantConfig, config: ClientConfig) -> Result<Self> {
        let transport = HttpTransport::new(&config)?;
        Self::with_transport(merchant, &config.base_url, Arc::new(transport))
    }

    /// Create a client that sends through the given transport
    pub fn with_transport(
        merchant: MerchantConfig,
        base_url: &str,
        transport: Arc<dyn Transport>,
    ) -> Result<Self> {
        Url::parse(base_url)?;

        Ok(Self {
            signer: RequestSigner::new(merchant.password.clone()),
            merchant: Arc::new(merchant),
            base_url: base_url.trim_end_matches('/').to_string(),
            transport,
        })
    }

    /// Merchant configuration in use
    pub fn merchant(&self) -> &MerchantConfig {
        &self.merchant
    }

    /// Signature the bank expects for `payload`
    pub fn signature(&self, payload: &str) -> String {
        self.signer.sign(payload)
    }

    /// Build full URL for an endpoint path such as `/balance`
    pub fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(Url::parse(&format!("{}{}", self.base_url, path))?)
    }

    /// Sign `payload`, post it to `path` and convert the reply to JSON
    pub(crate) async fn request(&self, path: &str, payload: &str) -> Result<String> {
        let url = self.endpoint(path)?;
        let signature = self.signer.sign(payload);
        let body = envelope(&self.merchant.id, &signature, payload)?;

        debug!(
            merchant_id = %self.merchant.id,
            path,
            body_len = body.len(),
            "posting signed request"
        );

        let reply = self
            .transport
            .post(&url, body)
            .await
            .inspect_err(|err| warn!(path, error = %err, "merchant request failed"))?;

        debug!(path, reply_len = reply.len(), "reply received");
        Ok(to_json_string(&reply)?)
    }
}
