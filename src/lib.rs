//! # Kuna Client
//!
//! An async Rust client library for the Kuna exchange REST API v3.
//!
//! ## Features
//!
//! - Public market data and private account, order, payment and KunaCode endpoints
//! - HMAC-SHA384 request signing with credential validation before any I/O
//! - Normalization of Kuna's positional-array responses into typed records,
//!   strict by default with an opt-in lenient mode
//! - Offline KunaCode checksum validation
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use kuna_api_client::rest::{KunaRestClient, TickersRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = KunaRestClient::new();
//!     let book = client.get_orderbook("btcuah").await?;
//!     println!("Best ask: {:?}", book.ask.first());
//!
//!     let tickers = client.get_tickers(&TickersRequest::All).await?;
//!     println!("{} markets", tickers.len());
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod error;
pub mod kuna_code;
pub mod normalize;
pub mod rest;
pub mod types;

// Re-export commonly used types at crate root
pub use error::{ApiError, KunaError};
pub use kuna_code::{is_valid_kuna_code, validate_kuna_code};
pub use normalize::{NormalizeError, Normalizer, Strictness};
pub use rest::{KunaClient, KunaRestClient};
pub use types::common::{
    KunaCodeStatus, OrderSide, OrderStatus, OrderType, SortOrder, TradePosition, Unimplemented,
};

/// Result type alias using KunaError
pub type Result<T> = std::result::Result<T, KunaError>;
