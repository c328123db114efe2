/*
[INPUT]:  PRIVAT24_* environment variables (merchant id, password, card)
[OUTPUT]: Card balance and last month's statement as JSON
[POS]:    Examples - card account queries
[UPDATE]: When adding new account endpoints
*/

use privat24_merchant::*;

/// Example: Query balance and statement for the configured card
///
/// Requires PRIVAT24_MERCHANT_ID, PRIVAT24_MERCHANT_PASSWORD and PRIVAT24_CARD.
#[tokio::main]
async fn main() {
    println!("=== Privat24 Card Account Example ===\n");

    let merchant = match MerchantConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Invalid merchant configuration: {}", e);
            return;
        }
    };

    let client = match MerchantClient::new(merchant) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    println!("✓ HTTP client created for merchant {}\n", client.merchant().id);

    println!("Querying balance...");
    match client.balance(None).await {
        Ok(json) => println!("✓ Balance: {}", json),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nQuerying statement for the last month...");
    match client.statement(None, None, None).await {
        Ok(json) => println!("✓ Statement: {}", json),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\n✓ Card account example complete");
}
