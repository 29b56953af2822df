//! Example: Private account endpoints.
//!
//! Run with: cargo run --example private_account

use std::sync::Arc;

use kuna_api_client::auth::{EnvCredentials, IncreasingNonce};
use kuna_api_client::rest::{ActiveOrdersRequest, HistoryRequest, KunaRestClient, OrdersHistoryRequest};
use kuna_api_client::types::SortOrder;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let credentials = match EnvCredentials::try_from_env() {
        Some(creds) => Arc::new(creds),
        None => {
            println!("Set KUNA_PUBLIC_KEY and KUNA_SECRET_KEY to run this example.");
            return Ok(());
        }
    };

    let client = KunaRestClient::builder()
        .credentials(credentials)
        .nonce_provider(Arc::new(IncreasingNonce::new()))
        .user_agent("kuna-api-client-examples/private_account")
        .max_retries(2)
        .build();

    println!("=== Account ===");
    let account = client.get_account_info().await?;
    println!("Email: {}, 2FA: {}", account.email, account.two_factor);

    println!("\n=== Wallets ===");
    let wallets = client.get_wallets().await?;
    for wallet in wallets.iter().filter(|w| w.total > 0.0) {
        println!("{}: total={} available={}", wallet.currency, wallet.total, wallet.available);
    }

    println!("\n=== Active Orders ===");
    let active = client
        .get_active_orders(None, &ActiveOrdersRequest::default())
        .await?;
    for order in &active {
        println!(
            "#{} {} {:?} {} @ {:?}",
            order.id, order.market, order.side, order.initial_volume, order.price
        );
    }

    println!("\n=== Order History (btcuah) ===");
    let history = client
        .get_orders_history(
            Some("btcuah"),
            &OrdersHistoryRequest::default().limit(10).sort(SortOrder::Desc),
        )
        .await?;
    println!("Closed orders: {}", history.len());

    println!("\n=== Deposits (uah) ===");
    let deposits = client
        .get_deposit_history(&HistoryRequest::currency("uah"))
        .await?;
    for deposit in deposits.iter().take(5) {
        println!("{} {} {} ({})", deposit.id, deposit.amount, deposit.currency, deposit.status);
    }

    Ok(())
}
