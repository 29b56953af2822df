//! Common domain types for Kuna API.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_with::{DeserializeFromStr, SerializeDisplay};

/// Error returned when an enumerant does not belong to the exchange's vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind}: {value:?}")]
pub struct UnknownVariant {
    /// Name of the enumeration.
    pub kind: &'static str,
    /// The rejected input.
    pub value: String,
}

impl UnknownVariant {
    fn new(kind: &'static str, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}

/// Canonicalize an enumerant: `"Partially filled"` -> `"PARTIALLY_FILLED"`.
fn canonical(s: &str) -> String {
    s.trim()
        .chars()
        .map(|c| match c {
            ' ' | '-' => '_',
            c => c.to_ascii_uppercase(),
        })
        .collect()
}

/// Buy or sell side of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, SerializeDisplay, DeserializeFromStr)]
pub enum OrderSide {
    /// Buy order
    Buy,
    /// Sell order
    Sell,
}

impl fmt::Display for OrderSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderSide::Buy => write!(f, "buy"),
            OrderSide::Sell => write!(f, "sell"),
        }
    }
}

impl FromStr for OrderSide {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match canonical(s).as_str() {
            "BUY" | "BID" => Ok(OrderSide::Buy),
            "SELL" | "ASK" => Ok(OrderSide::Sell),
            _ => Err(UnknownVariant::new("order side", s)),
        }
    }
}

/// Order type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, SerializeDisplay, DeserializeFromStr)]
pub enum OrderType {
    /// Limit order
    Limit,
    /// Market order sized in base currency
    Market,
    /// Market order sized in quote currency
    MarketByQuote,
    /// Stop-limit order
    StopLimit,
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OrderType::Limit => "limit",
            OrderType::Market => "market",
            OrderType::MarketByQuote => "market_by_quote",
            OrderType::StopLimit => "stop_limit",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for OrderType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match canonical(s).as_str() {
            "LIMIT" => Ok(OrderType::Limit),
            "MARKET" => Ok(OrderType::Market),
            "MARKET_BY_QUOTE" => Ok(OrderType::MarketByQuote),
            "STOP_LIMIT" => Ok(OrderType::StopLimit),
            _ => Err(UnknownVariant::new("order type", s)),
        }
    }
}

/// Status of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, SerializeDisplay, DeserializeFromStr)]
pub enum OrderStatus {
    /// Order is on the book
    Active,
    /// Order has been partially filled and is still on the book
    PartiallyFilled,
    /// Order has been completely filled
    Executed,
    /// Order has been canceled
    Canceled,
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OrderStatus::Active => "active",
            OrderStatus::PartiallyFilled => "partially_filled",
            OrderStatus::Executed => "executed",
            OrderStatus::Canceled => "canceled",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for OrderStatus {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match canonical(s).as_str() {
            "ACTIVE" | "WAIT" => Ok(OrderStatus::Active),
            "PARTIALLY_FILLED" => Ok(OrderStatus::PartiallyFilled),
            "EXECUTED" | "DONE" => Ok(OrderStatus::Executed),
            "CANCELED" | "CANCELLED" | "CANCEL" => Ok(OrderStatus::Canceled),
            _ => Err(UnknownVariant::new("order status", s)),
        }
    }
}

/// Status of a KunaCode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, SerializeDisplay, DeserializeFromStr)]
pub enum KunaCodeStatus {
    /// Issued, not yet activated
    Created,
    /// Can be redeemed
    Active,
    /// Redemption in progress
    Redeeming,
    /// Already redeemed
    Redeemed,
    /// Frozen by the exchange
    Onhold,
    /// Canceled by the issuer
    Canceled,
}

impl fmt::Display for KunaCodeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            KunaCodeStatus::Created => "created",
            KunaCodeStatus::Active => "active",
            KunaCodeStatus::Redeeming => "redeeming",
            KunaCodeStatus::Redeemed => "redeemed",
            KunaCodeStatus::Onhold => "onhold",
            KunaCodeStatus::Canceled => "canceled",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for KunaCodeStatus {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match canonical(s).as_str() {
            "CREATED" => Ok(KunaCodeStatus::Created),
            "ACTIVE" => Ok(KunaCodeStatus::Active),
            "REDEEMING" => Ok(KunaCodeStatus::Redeeming),
            "REDEEMED" => Ok(KunaCodeStatus::Redeemed),
            "ONHOLD" | "ON_HOLD" => Ok(KunaCodeStatus::Onhold),
            "CANCELED" | "CANCELLED" => Ok(KunaCodeStatus::Canceled),
            _ => Err(UnknownVariant::new("kuna code status", s)),
        }
    }
}

/// Sort direction for history endpoints, sent as `1` / `-1`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortOrder {
    /// Oldest first
    Asc,
    /// Newest first
    #[default]
    Desc,
}

impl SortOrder {
    /// Wire value of the sort direction.
    pub fn as_i8(self) -> i8 {
        match self {
            SortOrder::Asc => 1,
            SortOrder::Desc => -1,
        }
    }
}

impl Serialize for SortOrder {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i8(self.as_i8())
    }
}

/// Whether the user's side of a trade added or removed liquidity.
///
/// Sent by the exchange as `1` (maker) or `-1` (taker).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TradePosition {
    /// Order rested on the book
    Maker,
    /// Order crossed the book
    Taker,
}

impl TradePosition {
    /// Wire value of the position.
    pub fn as_i8(self) -> i8 {
        match self {
            TradePosition::Maker => 1,
            TradePosition::Taker => -1,
        }
    }

    /// Decode the wire value; anything but `1` or `-1` is rejected.
    pub fn from_i64(value: i64) -> Option<Self> {
        match value {
            1 => Some(TradePosition::Maker),
            -1 => Some(TradePosition::Taker),
            _ => None,
        }
    }
}

impl Serialize for TradePosition {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i8(self.as_i8())
    }
}

impl<'de> Deserialize<'de> for TradePosition {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = i64::deserialize(deserializer)?;
        TradePosition::from_i64(value).ok_or_else(|| {
            serde::de::Error::custom(format!("trade position must be 1 or -1, got {value}"))
        })
    }
}

/// Outcome of an endpoint this client does not implement yet.
///
/// Returned instead of an empty success so callers can tell "the exchange
/// returned nothing" apart from "the client never asked".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unimplemented {
    /// Name of the client operation.
    pub operation: &'static str,
}

impl fmt::Display for Unimplemented {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} is not implemented by this client", self.operation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_side_parsing() {
        assert_eq!("buy".parse::<OrderSide>().unwrap(), OrderSide::Buy);
        assert_eq!("SELL".parse::<OrderSide>().unwrap(), OrderSide::Sell);
        assert!("hold".parse::<OrderSide>().is_err());
    }

    #[test]
    fn test_order_status_aliases() {
        assert_eq!("ACTIVE".parse::<OrderStatus>().unwrap(), OrderStatus::Active);
        assert_eq!(
            "PARTIALLY FILLED".parse::<OrderStatus>().unwrap(),
            OrderStatus::PartiallyFilled
        );
        assert_eq!("cancel".parse::<OrderStatus>().unwrap(), OrderStatus::Canceled);
        assert_eq!("done".parse::<OrderStatus>().unwrap(), OrderStatus::Executed);
    }

    #[test]
    fn test_enum_serde_round_trip() {
        let json = serde_json::to_string(&OrderType::MarketByQuote).unwrap();
        assert_eq!(json, r#""market_by_quote""#);
        let parsed: OrderType = serde_json::from_str(r#""LIMIT""#).unwrap();
        assert_eq!(parsed, OrderType::Limit);

        let status: KunaCodeStatus = serde_json::from_str(r#""redeemed""#).unwrap();
        assert_eq!(status, KunaCodeStatus::Redeemed);
    }

    #[test]
    fn test_sort_order_wire_value() {
        assert_eq!(serde_json::to_string(&SortOrder::Asc).unwrap(), "1");
        assert_eq!(serde_json::to_string(&SortOrder::default()).unwrap(), "-1");
    }

    #[test]
    fn test_trade_position() {
        assert_eq!(TradePosition::from_i64(1), Some(TradePosition::Maker));
        assert_eq!(TradePosition::from_i64(-1), Some(TradePosition::Taker));
        assert_eq!(TradePosition::from_i64(0), None);

        let position: TradePosition = serde_json::from_str("-1").unwrap();
        assert_eq!(position, TradePosition::Taker);
        assert!(serde_json::from_str::<TradePosition>("2").is_err());
    }
}
