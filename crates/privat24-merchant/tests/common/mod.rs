/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for privat24-merchant tests

#![allow(dead_code)]

use privat24_merchant::{ClientConfig, MerchantClient, MerchantConfig};
use wiremock::MockServer;

pub const TEST_CARD: &str = "4000001234567890";

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Merchant used throughout the integration tests
pub fn test_merchant() -> MerchantConfig {
    MerchantConfig::new("M1", "P1").expect("valid merchant config")
}

/// Client pointed at the mock server's `/p24api` prefix
pub fn client_for(server: &MockServer, merchant: MerchantConfig) -> MerchantClient {
    let config = ClientConfig {
        base_url: format!("{}/p24api", server.uri()),
        ..ClientConfig::default()
    };
    MerchantClient::with_config(merchant, config).expect("client init")
}

/// Text between `<tag>` and `</tag>` in a request body
pub fn element_text<'a>(body: &'a str, tag: &str) -> Option<&'a str> {
    let open = format!("<{tag}>");
    let close = format!("</{tag}>");
    let start = body.find(&open)? + open.len();
    let end = body[start..].find(&close)? + start;
    Some(&body[start..end])
}
