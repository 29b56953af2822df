//! Trait definition for the Kuna REST API client.
//!
//! This module provides the `KunaClient` trait which abstracts all REST API operations.
//! This enables:
//! - Mock implementations for testing
//! - Decorators around the HTTP client
//! - Alternative implementations
//!
//! # Example
//!
//! ```rust,ignore
//! use kuna_api_client::rest::{KunaClient, KunaRestClient};
//!
//! async fn print_time<C: KunaClient>(client: &C) -> Result<(), kuna_api_client::KunaError> {
//!     let time = client.get_timestamp().await?;
//!     println!("Server time: {}", time.timestamp);
//!     Ok(())
//! }
//! ```

use std::future::Future;

use crate::error::KunaError;
use crate::rest::private::{
    AccountInfo, ActiveOrdersRequest, CancelledOrder, CreateKunaCodeRequest, DepositDetails,
    HistoryRequest, KunaCode, KunaCodesRequest, OrdersHistoryRequest, UserOrder, UserTrade,
    WalletInfo, WithdrawCreated, WithdrawDetails, WithdrawRequest,
};
use crate::rest::public::{
    Currency, ExchangeRate, FeeInfo, KunaTimestamp, Market, Orderbook, Ticker, TickersRequest,
};
use crate::types::Unimplemented;

/// Trait defining all Kuna REST API operations.
///
/// Mirrors the inherent methods of [`KunaRestClient`](crate::rest::KunaRestClient)
/// one to one. Placeholder operations resolve to [`Unimplemented`] rather
/// than an error.
pub trait KunaClient: Send + Sync {
    // ========== Public Endpoints ==========

    /// Get the server time.
    fn get_timestamp(&self) -> impl Future<Output = Result<KunaTimestamp, KunaError>> + Send;

    /// Get the listed currencies.
    fn get_currencies(&self) -> impl Future<Output = Result<Vec<Currency>, KunaError>> + Send;

    /// Get exchange rates, optionally for one currency.
    fn get_exchange_rates(
        &self,
        currency: Option<&str>,
    ) -> impl Future<Output = Result<Vec<ExchangeRate>, KunaError>> + Send;

    /// Get the trading markets.
    fn get_markets(&self) -> impl Future<Output = Result<Vec<Market>, KunaError>> + Send;

    /// Get tickers.
    fn get_tickers(
        &self,
        request: &TickersRequest,
    ) -> impl Future<Output = Result<Vec<Ticker>, KunaError>> + Send;

    /// Get the order book of a market.
    fn get_orderbook(
        &self,
        symbol: &str,
    ) -> impl Future<Output = Result<Orderbook, KunaError>> + Send;

    /// Get the fee schedules.
    fn get_fees(&self) -> impl Future<Output = Result<Vec<FeeInfo>, KunaError>> + Send;

    /// Look up a KunaCode.
    fn check_kuna_code(
        &self,
        code: &str,
    ) -> impl Future<Output = Result<KunaCode, KunaError>> + Send;

    /// Public trade history (not implemented).
    fn get_trades_history(&self) -> impl Future<Output = Unimplemented> + Send;

    /// Price chart (not implemented).
    fn get_price_chart(&self) -> impl Future<Output = Unimplemented> + Send;

    // ========== Private Endpoints - Account ==========

    /// Get account information.
    fn get_account_info(&self) -> impl Future<Output = Result<AccountInfo, KunaError>> + Send;

    /// Get wallet balances.
    fn get_wallets(&self) -> impl Future<Output = Result<Vec<WalletInfo>, KunaError>> + Send;

    // ========== Private Endpoints - Orders ==========

    /// Get active orders.
    fn get_active_orders(
        &self,
        market: Option<&str>,
        request: &ActiveOrdersRequest,
    ) -> impl Future<Output = Result<Vec<UserOrder>, KunaError>> + Send;

    /// Get order history.
    fn get_orders_history(
        &self,
        market: Option<&str>,
        request: &OrdersHistoryRequest,
    ) -> impl Future<Output = Result<Vec<UserOrder>, KunaError>> + Send;

    /// Get the fills of an order.
    fn get_order_trades(
        &self,
        market: &str,
        order_id: u64,
    ) -> impl Future<Output = Result<Vec<UserTrade>, KunaError>> + Send;

    /// Place an order (not implemented).
    fn create_order(&self) -> impl Future<Output = Unimplemented> + Send;

    /// Cancel an order.
    fn cancel_order(
        &self,
        order_id: u64,
    ) -> impl Future<Output = Result<CancelledOrder, KunaError>> + Send;

    /// Cancel several orders.
    fn cancel_orders(
        &self,
        order_ids: &[u64],
    ) -> impl Future<Output = Result<Vec<CancelledOrder>, KunaError>> + Send;

    // ========== Private Endpoints - Deposits & Withdrawals ==========

    /// Get a deposit.
    fn get_deposit_details(
        &self,
        deposit_id: &str,
    ) -> impl Future<Output = Result<DepositDetails, KunaError>> + Send;

    /// Get the deposit history.
    fn get_deposit_history(
        &self,
        request: &HistoryRequest,
    ) -> impl Future<Output = Result<Vec<DepositDetails>, KunaError>> + Send;

    /// Create a withdrawal.
    fn create_withdraw(
        &self,
        request: &WithdrawRequest,
    ) -> impl Future<Output = Result<WithdrawCreated, KunaError>> + Send;

    /// Get a withdrawal.
    fn get_withdraw_details(
        &self,
        withdrawal_id: &str,
    ) -> impl Future<Output = Result<WithdrawDetails, KunaError>> + Send;

    /// Get the withdrawal history.
    fn get_withdraw_history(
        &self,
        request: &HistoryRequest,
    ) -> impl Future<Output = Result<Vec<WithdrawDetails>, KunaError>> + Send;

    /// List saved payment cards (not implemented).
    fn get_saved_cards(&self) -> impl Future<Output = Unimplemented> + Send;

    /// Delete a saved payment card (not implemented).
    fn delete_saved_card(&self) -> impl Future<Output = Unimplemented> + Send;

    // ========== Private Endpoints - KunaCodes ==========

    /// Issue a KunaCode.
    fn create_kuna_code(
        &self,
        request: &CreateKunaCodeRequest,
    ) -> impl Future<Output = Result<KunaCode, KunaError>> + Send;

    /// List the codes issued by the user.
    fn get_issued_kuna_codes(
        &self,
        request: &KunaCodesRequest,
    ) -> impl Future<Output = Result<Vec<KunaCode>, KunaError>> + Send;

    /// List the codes redeemed by the user.
    fn get_redeemed_kuna_codes(
        &self,
        request: &KunaCodesRequest,
    ) -> impl Future<Output = Result<Vec<KunaCode>, KunaError>> + Send;

    /// Redeem a KunaCode.
    fn redeem_kuna_code(
        &self,
        code: &str,
    ) -> impl Future<Output = Result<KunaCode, KunaError>> + Send;
}
