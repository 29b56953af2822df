use std::sync::Arc;

use kuna_api_client::auth::EnvCredentials;
use kuna_api_client::rest::KunaRestClient;

fn live_tests_enabled() -> bool {
    std::env::var("KUNA_LIVE_TESTS").ok().as_deref() == Some("1")
}

#[tokio::test]
#[ignore]
async fn live_public_smoke() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenv::dotenv();
    if !live_tests_enabled() {
        return Ok(());
    }

    let client = KunaRestClient::new();
    let time = client.get_timestamp().await?;
    assert!(time.timestamp > 0);

    let book = client.get_orderbook("btcuah").await?;
    assert!(book.ask.iter().all(|r| r.volume >= 0.0));

    Ok(())
}

#[tokio::test]
#[ignore]
async fn live_private_smoke() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenv::dotenv();
    if !live_tests_enabled() {
        return Ok(());
    }

    let credentials = match EnvCredentials::try_from_env() {
        Some(creds) => creds,
        None => return Ok(()),
    };
    let client = KunaRestClient::builder()
        .credentials(Arc::new(credentials))
        .build();

    let _wallets = client.get_wallets().await?;
    let account = client.get_account_info().await?;
    assert!(!account.email.is_empty());

    Ok(())
}
