//! Kuna REST API v3 client.
//!
//! [`KunaRestClient`] has one method per endpoint. Public endpoints go to the
//! trading host unsigned; private ones are signed and go to the trading or
//! payment host. Array-encoded and loosely typed responses are passed through
//! the client's [`Normalizer`](crate::normalize::Normalizer).
//!
//! # Trait-based API
//!
//! The [`KunaClient`] trait abstracts all REST API operations, enabling:
//! - Mock implementations for testing
//! - Decorators around the client
//! - Alternative implementations
//!
//! ```rust,ignore
//! use kuna_api_client::rest::{KunaClient, KunaRestClient};
//!
//! async fn use_client<C: KunaClient>(client: &C) -> Result<(), kuna_api_client::KunaError> {
//!     let time = client.get_timestamp().await?;
//!     println!("Server time: {}", time.timestamp);
//!     Ok(())
//! }
//! ```

mod client;
mod endpoints;
pub mod private;
pub mod public;
mod traits;

pub use client::{Host, KunaRestClient, KunaRestClientBuilder};
pub use endpoints::{KUNA_BASE_URL, KUNA_PAYMENT_URL};
pub use private::{
    AccountInfo, AccountPublicKeys, ActiveOrdersRequest, CancelledOrder, CreateKunaCodeRequest,
    DepositDetails, HistoryRequest, KunaCode, KunaCodesRequest, OrdersHistoryRequest, UserOrder,
    UserTrade, WalletInfo, WithdrawCreated, WithdrawDetails, WithdrawRequest,
};
pub use public::{
    Currency, CurrencyIcons, CurrencyPrecision, ExchangeRate, Fee, FeeAsset, FeeInfo,
    KunaTimestamp, Market, Orderbook, OrderbookRecord, Ticker, TickersRequest,
};
pub use traits::KunaClient;
