/*
[INPUT]:  Error sources (configuration, HTTP, XML, serialization)
[OUTPUT]: Structured error types for every merchant operation
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use thiserror::Error;

use crate::config::ConfigError;
use crate::xml::XmlError;

/// Main error type for merchant operations
#[derive(Error, Debug)]
pub enum MerchantError {
    /// Merchant configuration is incomplete or unreadable
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Neither the call nor the configuration supplied a card number
    #[error("Card number is required")]
    MissingCard,

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Bank answered with a non-success status
    #[error("API error (code {code}): {message}")]
    Api { code: i32, message: String },

    /// Reply body is not well-formed XML
    #[error("Invalid XML response: {0}")]
    Xml(#[from] XmlError),

    /// Request XML could not be written
    #[error("Failed to build request XML: {0}")]
    Writer(#[from] std::io::Error),

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Failure reported by a custom transport
    #[error("Transport error: {0}")]
    Transport(String),
}

impl MerchantError {
    /// Check if the error is a usage mistake rather than an operational failure
    pub fn is_config_error(&self) -> bool {
        matches!(self, MerchantError::Config(_) | MerchantError::MissingCard)
    }

    /// Create an API error from status code and message
    pub fn api_error(status: StatusCode, message: impl Into<String>) -> Self {
        MerchantError::Api {
            code: status.as_u16() as i32,
            message: message.into(),
        }
    }
}

/// Result type alias for merchant operations
pub type Result<T> = std::result::Result<T, MerchantError>;
