//! Private REST API endpoints (authentication required).
//!
//! Every request here is signed. The credentials are validated before the
//! request is built, so invalid or missing keys fail with
//! [`KunaError::InvalidCredential`] without touching the network.

mod types;

pub use types::*;

use reqwest::Method;
use serde_json::Value;

use crate::error::KunaError;
use crate::kuna_code::validate_kuna_code;
use crate::rest::client::Host;
use crate::rest::endpoints::private;
use crate::rest::KunaRestClient;
use crate::types::Unimplemented;

/// Body of requests without parameters; signed and sent as `{}`.
const NO_PARAMS: &() = &();

impl KunaRestClient {
    // ========== Account ==========

    /// Get information about the authenticated account.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use kuna_api_client::rest::KunaRestClient;
    /// use kuna_api_client::auth::EnvCredentials;
    /// use std::sync::Arc;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let credentials = EnvCredentials::try_from_env().ok_or("missing KUNA_* keys")?;
    ///     let client = KunaRestClient::builder()
    ///         .credentials(Arc::new(credentials))
    ///         .build();
    ///     let account = client.get_account_info().await?;
    ///     println!("Logged in as {}", account.email);
    ///     Ok(())
    /// }
    /// ```
    pub async fn get_account_info(&self) -> Result<AccountInfo, KunaError> {
        self.private_request(Method::POST, Host::Trading, private::ME, NO_PARAMS)
            .await
    }

    /// Get the balance of every wallet.
    pub async fn get_wallets(&self) -> Result<Vec<WalletInfo>, KunaError> {
        let raw: Value = self
            .private_request(Method::POST, Host::Trading, private::WALLETS, NO_PARAMS)
            .await?;
        Ok(self.normalizer().wallets(&raw)?)
    }

    // ========== Orders ==========

    /// Get active orders.
    ///
    /// # Arguments
    ///
    /// * `market` - Restrict to one market, e.g. `"btcuah"`.
    /// * `request` - Body filter.
    pub async fn get_active_orders(
        &self,
        market: Option<&str>,
        request: &ActiveOrdersRequest,
    ) -> Result<Vec<UserOrder>, KunaError> {
        let path = with_market(private::ORDERS, market);
        let raw: Value = self
            .private_request(Method::POST, Host::Trading, &path, request)
            .await?;
        Ok(self.normalizer().user_orders(&raw)?)
    }

    /// Get closed and cancelled orders.
    ///
    /// # Arguments
    ///
    /// * `market` - Restrict to one market.
    /// * `request` - Time window, limit and sort order.
    pub async fn get_orders_history(
        &self,
        market: Option<&str>,
        request: &OrdersHistoryRequest,
    ) -> Result<Vec<UserOrder>, KunaError> {
        let path = with_market(private::ORDERS_HISTORY, market);
        let raw: Value = self
            .private_request(Method::POST, Host::Trading, &path, request)
            .await?;
        Ok(self.normalizer().user_orders(&raw)?)
    }

    /// Get the fills of one order.
    pub async fn get_order_trades(
        &self,
        market: &str,
        order_id: u64,
    ) -> Result<Vec<UserTrade>, KunaError> {
        let path = format!("{}/{}:{}/trades", private::ORDER, market, order_id);
        let raw: Value = self
            .private_request(Method::POST, Host::Trading, &path, NO_PARAMS)
            .await?;
        Ok(self.normalizer().user_trades(&raw)?)
    }

    /// Place an order. Not implemented by this client; sends nothing.
    pub async fn create_order(&self) -> Unimplemented {
        Self::unimplemented("create_order")
    }

    /// Cancel one order.
    pub async fn cancel_order(&self, order_id: u64) -> Result<CancelledOrder, KunaError> {
        let body = CancelOrderRequest { order_id };
        let raw: Value = self
            .private_request(Method::POST, Host::Trading, private::CANCEL_ORDER, &body)
            .await?;
        Ok(self.normalizer().cancelled_order(&raw)?)
    }

    /// Cancel several orders at once.
    pub async fn cancel_orders(&self, order_ids: &[u64]) -> Result<Vec<CancelledOrder>, KunaError> {
        let body = CancelOrdersRequest { order_ids };
        let raw: Value = self
            .private_request(Method::POST, Host::Trading, private::CANCEL_ORDERS, &body)
            .await?;
        Ok(self.normalizer().cancelled_orders(&raw)?)
    }

    // ========== Deposits & Withdrawals ==========

    /// Get one deposit. Served by the payment host.
    pub async fn get_deposit_details(&self, deposit_id: &str) -> Result<DepositDetails, KunaError> {
        let body = DetailsRequest { id: deposit_id };
        let raw: Value = self
            .private_request(Method::POST, Host::Payment, private::DEPOSIT_DETAILS, &body)
            .await?;
        Ok(self.normalizer().deposit_details(&raw)?)
    }

    /// Get the deposit history. Served by the payment host.
    pub async fn get_deposit_history(
        &self,
        request: &HistoryRequest,
    ) -> Result<Vec<DepositDetails>, KunaError> {
        let raw: Value = self
            .private_request(Method::POST, Host::Payment, private::DEPOSIT_HISTORY, request)
            .await?;
        Ok(self.normalizer().deposits(&raw)?)
    }

    /// Create a withdrawal. Served by the payment host.
    pub async fn create_withdraw(
        &self,
        request: &WithdrawRequest,
    ) -> Result<WithdrawCreated, KunaError> {
        self.private_request(Method::POST, Host::Payment, private::WITHDRAW, request)
            .await
    }

    /// Get one withdrawal. Served by the payment host.
    pub async fn get_withdraw_details(
        &self,
        withdrawal_id: &str,
    ) -> Result<WithdrawDetails, KunaError> {
        let body = DetailsRequest { id: withdrawal_id };
        let raw: Value = self
            .private_request(Method::POST, Host::Payment, private::WITHDRAW_DETAILS, &body)
            .await?;
        Ok(self.normalizer().withdraw_details(&raw)?)
    }

    /// Get the withdrawal history. Served by the payment host.
    pub async fn get_withdraw_history(
        &self,
        request: &HistoryRequest,
    ) -> Result<Vec<WithdrawDetails>, KunaError> {
        let raw: Value = self
            .private_request(Method::POST, Host::Payment, private::WITHDRAW_HISTORY, request)
            .await?;
        Ok(self.normalizer().withdraws(&raw)?)
    }

    /// List saved payment cards. Not implemented by this client; sends nothing.
    pub async fn get_saved_cards(&self) -> Unimplemented {
        Self::unimplemented("get_saved_cards")
    }

    /// Delete a saved payment card. Not implemented by this client; sends nothing.
    pub async fn delete_saved_card(&self) -> Unimplemented {
        Self::unimplemented("delete_saved_card")
    }

    // ========== KunaCodes ==========

    /// Issue a new KunaCode.
    pub async fn create_kuna_code(
        &self,
        request: &CreateKunaCodeRequest,
    ) -> Result<KunaCode, KunaError> {
        let raw: Value = self
            .private_request(Method::POST, Host::Trading, private::KUNA_CODES, request)
            .await?;
        Ok(self.normalizer().kuna_code(&raw)?)
    }

    /// List the KunaCodes issued by the user.
    pub async fn get_issued_kuna_codes(
        &self,
        request: &KunaCodesRequest,
    ) -> Result<Vec<KunaCode>, KunaError> {
        let raw: Value = self
            .private_request(Method::POST, Host::Trading, private::KUNA_CODES_ISSUED, request)
            .await?;
        Ok(self.normalizer().kuna_codes(&raw)?)
    }

    /// List the KunaCodes redeemed by the user.
    pub async fn get_redeemed_kuna_codes(
        &self,
        request: &KunaCodesRequest,
    ) -> Result<Vec<KunaCode>, KunaError> {
        let raw: Value = self
            .private_request(Method::POST, Host::Trading, private::KUNA_CODES_REDEEMED, request)
            .await?;
        Ok(self.normalizer().kuna_codes(&raw)?)
    }

    /// Redeem a KunaCode into the user's wallet.
    ///
    /// The checksum is verified locally before the credentials and the network.
    pub async fn redeem_kuna_code(&self, code: &str) -> Result<KunaCode, KunaError> {
        validate_kuna_code(code)?;
        let body = RedeemKunaCodeRequest { code };
        let raw: Value = self
            .private_request(Method::PUT, Host::Trading, private::KUNA_CODES_REDEEM, &body)
            .await?;
        Ok(self.normalizer().kuna_code(&raw)?)
    }
}

fn with_market(base: &str, market: Option<&str>) -> String {
    match market {
        Some(market) => format!("{}/{}", base, market),
        None => base.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholders_resolve_without_io() {
        let client = KunaRestClient::new();
        assert_eq!(tokio_test::block_on(client.create_order()).operation, "create_order");
        assert_eq!(
            tokio_test::block_on(client.get_saved_cards()).operation,
            "get_saved_cards"
        );
        assert_eq!(
            tokio_test::block_on(client.delete_saved_card()).operation,
            "delete_saved_card"
        );
    }

    #[test]
    fn test_with_market() {
        assert_eq!(with_market(private::ORDERS, None), "/v3/auth/r/orders");
        assert_eq!(
            with_market(private::ORDERS_HISTORY, Some("btcuah")),
            "/v3/auth/r/orders/hist/btcuah"
        );
    }
}
