/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public Privat24 merchant crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod config;
pub mod http;
pub mod types;
pub mod xml;

pub use config::{ConfigError, MerchantConfig};

// Re-export commonly used types from http
pub use http::{
    ClientConfig,
    HttpTransport,
    MerchantClient,
    MerchantError,
    RequestSigner,
    Result,
    Transport,
};

pub use types::*;

pub use xml::XmlError;
