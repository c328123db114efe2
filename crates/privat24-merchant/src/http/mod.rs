/*
[INPUT]:  Merchant configuration, HTTP options and operation parameters
[OUTPUT]: Signed requests and JSON replies
[POS]:    HTTP layer - merchant API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod account;
pub mod client;
pub mod error;
pub mod signature;
pub mod transport;

pub use error::{MerchantError, Result};
pub use signature::RequestSigner;
pub use transport::{HttpTransport, Transport};

pub use client::{API_BASE_URL, ClientConfig, MerchantClient};
