//! Example: Fetching public market data from Kuna.
//!
//! Run with: RUST_LOG=kuna_api_client=debug cargo run --example public_data

use kuna_api_client::rest::{KunaRestClient, TickersRequest};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let client = KunaRestClient::new();

    println!("=== Server Time ===");
    let time = client.get_timestamp().await?;
    println!("Unix time: {}", time.timestamp);

    println!("\n=== Markets ===");
    let markets = client.get_markets().await?;
    for market in markets.iter().take(5) {
        println!(
            "{}: base={}, quote={}, change={:?}",
            market.id, market.base_unit, market.quote_unit, market.price_change
        );
    }

    println!("\n=== Tickers ===");
    let tickers = client
        .get_tickers(&TickersRequest::symbols(["btcuah", "ethuah"]))
        .await?;
    for ticker in &tickers {
        println!(
            "{}: bid={} ask={} last={}",
            ticker.symbol, ticker.bid, ticker.ask, ticker.last_price
        );
    }

    println!("\n=== Order Book (btcuah) ===");
    let book = client.get_orderbook("btcuah").await?;
    for level in book.ask.iter().take(3) {
        println!("ask {} x {} ({} orders)", level.price, level.volume, level.orders);
    }
    for level in book.bid.iter().take(3) {
        println!("bid {} x {} ({} orders)", level.price, level.volume, level.orders);
    }

    println!("\n=== Exchange Rates (btc) ===");
    let rates = client.get_exchange_rates(Some("btc")).await?;
    if let Some(rate) = rates.first() {
        println!("1 {} = {} uah = {} usd", rate.currency, rate.uah, rate.usd);
    }

    println!("\n=== Fees ===");
    let fees = client.get_fees().await?;
    println!("Fee schedules: {}", fees.len());

    Ok(())
}
