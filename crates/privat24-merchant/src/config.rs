/*
[INPUT]:  Merchant credentials from code, YAML files or environment
[OUTPUT]: Validated merchant configuration
[POS]:    Configuration layer - merchant identity
[UPDATE]: When adding new configuration options
*/

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// Country sent with every payment block unless overridden
pub const DEFAULT_COUNTRY: &str = "UA";

const ENV_MERCHANT_ID: &str = "PRIVAT24_MERCHANT_ID";
const ENV_MERCHANT_PASSWORD: &str = "PRIVAT24_MERCHANT_PASSWORD";
const ENV_COUNTRY: &str = "PRIVAT24_COUNTRY";
const ENV_CARD: &str = "PRIVAT24_CARD";

/// Errors raised while building a [`MerchantConfig`]
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required fields are absent or empty
    #[error("{}", missing_fields_message(.0))]
    MissingFields(Vec<&'static str>),

    /// Config file could not be read
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid YAML
    #[error("Invalid YAML config: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

fn missing_fields_message(fields: &[&str]) -> String {
    let verb = if fields.len() > 1 { "are" } else { "is" };
    format!("{} {verb} required", fields.join(", "))
}

fn non_empty(value: String) -> Option<String> {
    (!value.is_empty()).then_some(value)
}

/// Merchant identity used to sign and address requests
#[derive(Clone, Deserialize)]
#[serde(try_from = "RawMerchantConfig")]
pub struct MerchantConfig {
    /// Merchant identifier issued by the bank
    pub id: String,
    /// Merchant password, only used for signing
    pub password: String,
    /// Country code placed into payment blocks
    pub country: String,
    /// Card used when an operation is called without one
    pub card: Option<String>,
    /// Unrecognised keys from a loaded config
    pub extra: BTreeMap<String, Value>,
}

/// Unvalidated shape of a merchant config file
#[derive(Debug, Default, Deserialize)]
struct RawMerchantConfig {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    password: Option<String>,
    #[serde(default)]
    country: Option<String>,
    #[serde(default)]
    card: Option<String>,
    #[serde(flatten)]
    extra: BTreeMap<String, Value>,
}

impl TryFrom<RawMerchantConfig> for MerchantConfig {
    type Error = ConfigError;

    fn try_from(raw: RawMerchantConfig) -> Result<Self, Self::Error> {
        let id = raw.id.and_then(non_empty);
        let password = raw.password.and_then(non_empty);

        let (id, password) = match (id, password) {
            (Some(id), Some(password)) => (id, password),
            (id, password) => {
                let mut missing = Vec::with_capacity(2);
                if id.is_none() {
                    missing.push("id");
                }
                if password.is_none() {
                    missing.push("password");
                }
                return Err(ConfigError::MissingFields(missing));
            }
        };

        Ok(Self {
            id,
            password,
            country: raw
                .country
                .and_then(non_empty)
                .unwrap_or_else(|| DEFAULT_COUNTRY.to_string()),
            card: raw.card.and_then(non_empty),
            extra: raw.extra,
        })
    }
}

impl MerchantConfig {
    /// Create a config from merchant id and password
    pub fn new(id: impl Into<String>, password: impl Into<String>) -> Result<Self, ConfigError> {
        RawMerchantConfig {
            id: Some(id.into()),
            password: Some(password.into()),
            ..Default::default()
        }
        .try_into()
    }

    /// Override the country code
    ///
    /// An empty value restores the default country.
    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country =
            non_empty(country.into()).unwrap_or_else(|| DEFAULT_COUNTRY.to_string());
        self
    }

    /// Set the card used when an operation is called without one
    ///
    /// An empty value clears the default card.
    pub fn with_card(mut self, card: impl Into<String>) -> Self {
        self.card = non_empty(card.into());
        self
    }

    /// Attach an auxiliary key/value pair
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Parse configuration from a YAML document
    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        let raw: RawMerchantConfig = serde_yaml::from_str(content)?;
        raw.try_into()
    }

    /// Load configuration from YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration from `PRIVAT24_*` environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        RawMerchantConfig {
            id: lookup(ENV_MERCHANT_ID),
            password: lookup(ENV_MERCHANT_PASSWORD),
            country: lookup(ENV_COUNTRY),
            card: lookup(ENV_CARD),
            extra: BTreeMap::new(),
        }
        .try_into()
    }
}

impl std::fmt::Debug for MerchantConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MerchantConfig")
            .field("id", &self.id)
            .field("password", &"<redacted>")
            .field("country", &self.country)
            .field("card", &self.card)
            .field("extra", &self.extra)
            .finish()
    }
}
