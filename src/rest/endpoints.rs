//! Kuna REST API endpoint constants.
//!
//! Paths include the `/v3` prefix because the signature covers it.

/// Base URL of the trading API.
pub const KUNA_BASE_URL: &str = "https://api.kuna.io";

/// Base URL of the payment API (deposits and withdrawals).
pub const KUNA_PAYMENT_URL: &str = "https://pay.kuna.io";

/// Public endpoints (no authentication required).
pub mod public {
    /// Server time.
    pub const TIMESTAMP: &str = "/v3/timestamp";
    /// Listed currencies.
    pub const CURRENCIES: &str = "/v3/currencies";
    /// Exchange rates; append `/{currency}` for one currency.
    pub const EXCHANGE_RATES: &str = "/v3/exchange-rates";
    /// Trading markets.
    pub const MARKETS: &str = "/v3/markets";
    /// Tickers; takes `?symbols=`.
    pub const TICKERS: &str = "/v3/tickers";
    /// Order book; append `/{symbol}`.
    pub const BOOK: &str = "/v3/book";
    /// Fee schedules.
    pub const FEES: &str = "/v3/fees";
    /// KunaCode lookup; `/{code}/check`.
    pub const KUNA_CODES: &str = "/v3/kuna_codes";
}

/// Private endpoints (authentication required).
pub mod private {
    // Account
    /// Account information.
    pub const ME: &str = "/v3/auth/me";
    /// Wallet balances.
    pub const WALLETS: &str = "/v3/auth/r/wallets";

    // Orders
    /// Active orders; append `/{market}` to filter.
    pub const ORDERS: &str = "/v3/auth/r/orders";
    /// Order history; append `/{market}` to filter.
    pub const ORDERS_HISTORY: &str = "/v3/auth/r/orders/hist";
    /// Single order; `/{market}:{id}/trades`.
    pub const ORDER: &str = "/v3/auth/r/order";
    /// Cancel one order.
    pub const CANCEL_ORDER: &str = "/v3/order/cancel";
    /// Cancel several orders.
    pub const CANCEL_ORDERS: &str = "/v3/order/cancel/multi";

    // Payment host
    /// Deposit details.
    pub const DEPOSIT_DETAILS: &str = "/v3/auth/deposit/details";
    /// Deposit history.
    pub const DEPOSIT_HISTORY: &str = "/v3/auth/history/deposits";
    /// Create a withdrawal.
    pub const WITHDRAW: &str = "/v3/auth/withdraw";
    /// Withdrawal details.
    pub const WITHDRAW_DETAILS: &str = "/v3/auth/withdraw/details";
    /// Withdrawal history.
    pub const WITHDRAW_HISTORY: &str = "/v3/auth/history/withdraws";

    // KunaCodes
    /// Issue a KunaCode.
    pub const KUNA_CODES: &str = "/v3/auth/kuna_codes";
    /// Codes issued by the user.
    pub const KUNA_CODES_ISSUED: &str = "/v3/auth/kuna_codes/issued-by-me";
    /// Codes redeemed by the user.
    pub const KUNA_CODES_REDEEMED: &str = "/v3/auth/kuna_codes/redeemed-by-me";
    /// Redeem a KunaCode.
    pub const KUNA_CODES_REDEEM: &str = "/v3/auth/kuna_codes/redeem";
}
