//! Types for public REST API endpoints.

use serde::{Deserialize, Serialize};

use crate::types::serde_helpers::{
    empty_string_as_none, number_or_string, optional_number_or_string,
};

/// Server time response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KunaTimestamp {
    /// Unix timestamp in seconds.
    pub timestamp: i64,
    /// Unix timestamp in milliseconds (the exchange spells it this way).
    pub timestamp_miliseconds: i64,
}

/// Icon URLs of a currency.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyIcons {
    #[serde(default)]
    pub std: Option<String>,
    #[serde(default)]
    pub xl: Option<String>,
    #[serde(default)]
    pub png_2x: Option<String>,
    #[serde(default)]
    pub png_3x: Option<String>,
}

/// Decimal precision of a currency.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyPrecision {
    /// Precision of balances.
    pub real: u32,
    /// Precision used in trading.
    pub trade: u32,
}

/// A currency listed on the exchange.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    pub id: u64,
    /// Currency code, e.g. `btc`.
    pub code: String,
    pub name: String,
    /// Whether deposits need a memo/tag.
    pub has_memo: bool,
    #[serde(default)]
    pub icons: CurrencyIcons,
    /// `true` for crypto, `false` for fiat.
    pub coin: bool,
    #[serde(default, deserialize_with = "empty_string_as_none::deserialize")]
    pub explorer_link: Option<String>,
    pub sort_order: i64,
    pub precision: CurrencyPrecision,
}

/// Exchange rate of one currency against the reference currencies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExchangeRate {
    pub currency: String,
    #[serde(deserialize_with = "number_or_string::deserialize")]
    pub usd: f64,
    #[serde(deserialize_with = "number_or_string::deserialize")]
    pub uah: f64,
    #[serde(deserialize_with = "number_or_string::deserialize")]
    pub btc: f64,
    #[serde(deserialize_with = "number_or_string::deserialize")]
    pub eur: f64,
    #[serde(deserialize_with = "number_or_string::deserialize")]
    pub rub: f64,
}

/// A trading market.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Market {
    /// Market symbol, e.g. `btcuah`.
    pub id: String,
    pub base_unit: String,
    pub quote_unit: String,
    pub base_precision: u32,
    pub quote_precision: u32,
    pub display_precision: u32,
    /// 24h price change; `None` for freshly listed markets.
    #[serde(default, deserialize_with = "optional_number_or_string::deserialize")]
    pub price_change: Option<f64>,
}

/// Which symbols `GET /v3/tickers` should return.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TickersRequest {
    /// Every listed market.
    #[default]
    All,
    /// Only the given symbols.
    Symbols(Vec<String>),
}

impl TickersRequest {
    /// Request the given symbols.
    pub fn symbols<I, S>(symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Symbols(symbols.into_iter().map(Into::into).collect())
    }

    /// Value of the `symbols` query parameter: the comma-joined list, or `ALL`.
    pub fn query_value(&self) -> String {
        match self {
            Self::All => "ALL".to_string(),
            Self::Symbols(symbols) if symbols.is_empty() => "ALL".to_string(),
            Self::Symbols(symbols) => symbols.join(","),
        }
    }
}

/// 24h ticker of one market.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticker {
    pub symbol: String,
    /// Best bid price.
    pub bid: f64,
    pub bid_volume: f64,
    /// Best ask price.
    pub ask: f64,
    pub ask_volume: f64,
    /// Absolute price change over 24h.
    pub day_change_quote: f64,
    /// Relative price change over 24h, in percent.
    pub day_change_quote_percent: f64,
    pub last_price: f64,
    pub day_volume: f64,
    pub day_min: f64,
    pub day_max: f64,
}

/// A single order book level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderbookRecord {
    pub price: f64,
    /// Always non-negative once normalized.
    pub volume: f64,
    /// Number of orders at this level.
    pub orders: u32,
}

/// Order book split by side.
///
/// Levels keep the order in which the exchange sent them; neither side is
/// sorted by the client.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Orderbook {
    pub ask: Vec<OrderbookRecord>,
    pub bid: Vec<OrderbookRecord>,
}

/// An amount expressed in a currency together with its USD value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeeAsset {
    pub amount: f64,
    pub currency: String,
    pub to_usd: f64,
}

/// One deposit or withdrawal fee rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Fee {
    /// Flat fee.
    Fixed { asset: FeeAsset },
    /// Fee as a percentage of the amount.
    Percent { amount: f64 },
}

/// Fee schedule of one currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeeInfo {
    /// Currency code.
    pub code: String,
    /// `coin` for crypto, otherwise a fiat category.
    pub category: String,
    pub deposit_fees: Vec<Fee>,
    pub withdraw_fees: Vec<Fee>,
    /// Only sent for crypto currencies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_deposit: Option<FeeAsset>,
    /// Only sent for crypto currencies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_withdraw: Option<FeeAsset>,
}
