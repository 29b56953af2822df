//! Example: KunaCode checksum validation and lookup.
//!
//! Run with: cargo run --example kuna_codes -- <code>

use std::sync::Arc;

use kuna_api_client::auth::EnvCredentials;
use kuna_api_client::rest::{KunaCodesRequest, KunaRestClient};
use kuna_api_client::{KunaError, is_valid_kuna_code};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let code = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "1-UAH-KCode".to_string());

    // Checked offline, no request is sent for a bad code.
    println!("{} checksum valid: {}", code, is_valid_kuna_code(&code));

    let client = KunaRestClient::new();
    match client.check_kuna_code(&code).await {
        Ok(info) => println!("Status: {:?}, amount: {} {}", info.status, info.amount, info.currency),
        Err(KunaError::InvalidChecksum(reason)) => println!("Rejected locally: {}", reason),
        Err(KunaError::Api(err)) if err.is_kuna_code_not_found() => println!("Unknown code"),
        Err(KunaError::Api(err)) => println!("Exchange answered: {}", err),
        Err(err) => return Err(err.into()),
    }

    if let Some(credentials) = EnvCredentials::try_from_env() {
        let client = KunaRestClient::builder()
            .credentials(Arc::new(credentials))
            .build();
        let issued = client
            .get_issued_kuna_codes(&KunaCodesRequest::default())
            .await?;
        println!("\nIssued codes: {}", issued.len());
        for code in issued.iter().take(5) {
            println!("{} {} {} {:?}", code.sn, code.amount, code.currency, code.status);
        }
    }

    Ok(())
}
