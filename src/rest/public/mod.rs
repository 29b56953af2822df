//! Public REST API endpoints (no authentication required).

mod types;

pub use types::*;

use serde_json::Value;

use crate::error::KunaError;
use crate::kuna_code::validate_kuna_code;
use crate::rest::KunaRestClient;
use crate::rest::endpoints::public;
use crate::rest::private::KunaCode;
use crate::types::Unimplemented;

impl KunaRestClient {
    /// Get the server time.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use kuna_api_client::rest::KunaRestClient;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = KunaRestClient::new();
    ///     let time = client.get_timestamp().await?;
    ///     println!("Server time: {} ({} ms)", time.timestamp, time.timestamp_miliseconds);
    ///     Ok(())
    /// }
    /// ```
    pub async fn get_timestamp(&self) -> Result<KunaTimestamp, KunaError> {
        self.public_get(public::TIMESTAMP).await
    }

    /// Get all listed currencies.
    pub async fn get_currencies(&self) -> Result<Vec<Currency>, KunaError> {
        self.public_get(public::CURRENCIES).await
    }

    /// Get exchange rates.
    ///
    /// # Arguments
    ///
    /// * `currency` - Restrict to one currency code, e.g. `"btc"`.
    pub async fn get_exchange_rates(
        &self,
        currency: Option<&str>,
    ) -> Result<Vec<ExchangeRate>, KunaError> {
        match currency {
            Some(currency) => {
                let path = format!("{}/{}", public::EXCHANGE_RATES, currency);
                self.public_get(&path).await
            }
            None => self.public_get(public::EXCHANGE_RATES).await,
        }
    }

    /// Get all trading markets.
    pub async fn get_markets(&self) -> Result<Vec<Market>, KunaError> {
        self.public_get(public::MARKETS).await
    }

    /// Get tickers for some or all markets.
    ///
    /// # Arguments
    ///
    /// * `request` - Symbols to fetch; [`TickersRequest::All`] for every market.
    pub async fn get_tickers(&self, request: &TickersRequest) -> Result<Vec<Ticker>, KunaError> {
        let path = format!("{}?symbols={}", public::TICKERS, request.query_value());
        let raw: Value = self.public_get(&path).await?;
        Ok(self.normalizer().tickers(&raw)?)
    }

    /// Get the order book of a market.
    ///
    /// # Arguments
    ///
    /// * `symbol` - Market symbol, e.g. `"btcuah"`.
    pub async fn get_orderbook(&self, symbol: &str) -> Result<Orderbook, KunaError> {
        let path = format!("{}/{}", public::BOOK, symbol);
        let raw: Value = self.public_get(&path).await?;
        Ok(self.normalizer().orderbook(&raw)?)
    }

    /// Get the deposit and withdrawal fees of every currency.
    pub async fn get_fees(&self) -> Result<Vec<FeeInfo>, KunaError> {
        let raw: Value = self.public_get(public::FEES).await?;
        Ok(self.normalizer().fees(&raw)?)
    }

    /// Look up a KunaCode by its full code.
    ///
    /// The checksum is verified locally first; a code that fails it is
    /// rejected with [`KunaError::InvalidChecksum`] without a request.
    pub async fn check_kuna_code(&self, code: &str) -> Result<KunaCode, KunaError> {
        validate_kuna_code(code)?;
        let path = format!("{}/{}/check", public::KUNA_CODES, code);
        let raw: Value = self.public_get(&path).await?;
        Ok(self.normalizer().kuna_code(&raw)?)
    }

    /// Public trade history. Not implemented by this client; sends nothing.
    pub async fn get_trades_history(&self) -> Unimplemented {
        Self::unimplemented("get_trades_history")
    }

    /// Price chart. Not implemented by this client; sends nothing.
    pub async fn get_price_chart(&self) -> Unimplemented {
        Self::unimplemented("get_price_chart")
    }
}
