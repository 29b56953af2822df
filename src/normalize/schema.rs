//! Positional layouts of Kuna's array-encoded responses.
//!
//! Each table maps an index to a field name. Positions the client does not
//! expose still carry a name so the layout is documented end to end; an
//! empty name marks a slot Kuna always sends as `null`.

/// Index -> field table for one positional response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionalSchema {
    /// Record name used in error messages.
    pub name: &'static str,
    /// API version the layout was taken from.
    pub version: &'static str,
    /// Field names by position.
    pub fields: &'static [&'static str],
}

impl PositionalSchema {
    /// Number of positions in the layout.
    pub const fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the layout has no positions.
    pub const fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Position of a named field.
    pub fn index_of(&self, field: &str) -> Option<usize> {
        if field.is_empty() {
            return None;
        }
        self.fields.iter().position(|f| *f == field)
    }
}

/// `GET /v3/tickers`
pub const TICKER: PositionalSchema = PositionalSchema {
    name: "ticker",
    version: "v3",
    fields: &[
        "symbol",
        "bid",
        "bid_volume",
        "ask",
        "ask_volume",
        "day_change_quote",
        "day_change_quote_percent",
        "last_price",
        "day_volume",
        "day_min",
        "day_max",
    ],
};

/// `GET /v3/book/{symbol}`; volume is negative for asks.
pub const ORDERBOOK_RECORD: PositionalSchema = PositionalSchema {
    name: "orderbook record",
    version: "v3",
    fields: &["price", "volume", "orders"],
};

/// `POST /v3/auth/r/wallets`
pub const WALLET: PositionalSchema = PositionalSchema {
    name: "wallet",
    version: "v3",
    fields: &[
        "wallet_type",
        "currency",
        "total",
        "unsettled_interest",
        "available",
    ],
};

/// `POST /v3/auth/r/orders` and `/v3/auth/r/orders/hist`.
///
/// `initial_volume` is signed: positive for buys.
pub const USER_ORDER: PositionalSchema = PositionalSchema {
    name: "order",
    version: "v3",
    fields: &[
        "id",
        "",
        "",
        "market",
        "created_at",
        "updated_at",
        "volume",
        "initial_volume",
        "type",
        "",
        "",
        "",
        "",
        "status",
        "",
        "",
        "price",
        "avg_execution_price",
    ],
};

/// `POST /v3/auth/r/order/{market}:{id}/trades`
///
/// `position` is `1` for maker and `-1` for taker.
pub const USER_TRADE: PositionalSchema = PositionalSchema {
    name: "trade",
    version: "v3",
    fields: &[
        "id",
        "market",
        "executed_at",
        "order_id",
        "volume",
        "price",
        "order_type",
        "order_price",
        "position",
        "fee",
        "fee_currency",
    ],
};
