//! Kuna REST API client implementation.

use std::sync::Arc;

use reqwest::Method;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{RetryTransientMiddleware, policies::ExponentialBackoff};
use reqwest_tracing::TracingMiddleware;
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::auth::{
    CredentialsProvider, NonceProvider, TimestampNonce, canonical_body, public_headers,
    signed_headers,
};
use crate::error::{ApiError, KunaError};
use crate::normalize::{Normalizer, Strictness};
use crate::rest::endpoints::{KUNA_BASE_URL, KUNA_PAYMENT_URL};
use crate::rest::private::{
    AccountInfo, ActiveOrdersRequest, CancelledOrder, CreateKunaCodeRequest, DepositDetails,
    HistoryRequest, KunaCode, KunaCodesRequest, OrdersHistoryRequest, UserOrder, UserTrade,
    WalletInfo, WithdrawCreated, WithdrawDetails, WithdrawRequest,
};
use crate::rest::public::{
    Currency, ExchangeRate, FeeInfo, KunaTimestamp, Market, Orderbook, Ticker, TickersRequest,
};
use crate::rest::traits::KunaClient;
use crate::types::Unimplemented;

/// Which Kuna host serves an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Host {
    /// `api.kuna.io`: market data, account, orders and KunaCodes.
    Trading,
    /// `pay.kuna.io`: deposits and withdrawals.
    Payment,
}

/// The Kuna REST API client.
///
/// Every method maps to a single HTTP request. Private methods validate the
/// configured credentials before anything is sent.
///
/// # Example
///
/// ```rust,no_run
/// use kuna_api_client::rest::{KunaRestClient, TickersRequest};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     // Create a client for public endpoints only
///     let client = KunaRestClient::new();
///
///     let tickers = client.get_tickers(&TickersRequest::symbols(["btcuah"])).await?;
///     println!("Tickers: {:?}", tickers);
///
///     Ok(())
/// }
/// ```
///
/// For private endpoints, provide credentials:
///
/// ```rust,no_run
/// use kuna_api_client::rest::KunaRestClient;
/// use kuna_api_client::auth::StaticCredentials;
/// use std::sync::Arc;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let credentials = Arc::new(StaticCredentials::new("public_key", "secret_key"));
///     let client = KunaRestClient::builder()
///         .credentials(credentials)
///         .build();
///
///     let wallets = client.get_wallets().await?;
///     println!("Wallets: {:?}", wallets);
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct KunaRestClient {
    http_client: ClientWithMiddleware,
    base_url: String,
    payment_url: String,
    credentials: Option<Arc<dyn CredentialsProvider>>,
    nonce_provider: Arc<dyn NonceProvider>,
    normalizer: Normalizer,
}

impl KunaRestClient {
    /// Create a new client with default settings.
    ///
    /// This client can only access public endpoints.
    /// Use [`KunaRestClient::builder()`] to configure credentials for private endpoints.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Create a new client builder.
    pub fn builder() -> KunaRestClientBuilder {
        KunaRestClientBuilder::new()
    }

    /// The normalizer applied to array and loosely typed responses.
    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    fn url(&self, host: Host, path: &str) -> Result<Url, KunaError> {
        let base = match host {
            Host::Trading => &self.base_url,
            Host::Payment => &self.payment_url,
        };
        Ok(Url::parse(&format!("{}{}", base.trim_end_matches('/'), path))?)
    }

    /// Make a public GET request on the trading host.
    pub(crate) async fn public_get<T>(&self, path: &str) -> Result<T, KunaError>
    where
        T: DeserializeOwned,
    {
        let url = self.url(Host::Trading, path)?;
        tracing::debug!(method = "GET", %url, signed = false, "sending Kuna request");

        let response = self
            .http_client
            .get(url)
            .headers(public_headers(""))
            .send()
            .await?;
        self.parse_response(response).await
    }

    /// Make a signed request.
    ///
    /// `body` is serialized once; the same text is signed and sent.
    pub(crate) async fn private_request<T, B>(
        &self,
        method: Method,
        host: Host,
        path: &str,
        body: &B,
    ) -> Result<T, KunaError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let credentials = self
            .credentials
            .as_ref()
            .ok_or_else(|| KunaError::InvalidCredential("no credentials configured".to_string()))?;
        let creds = credentials.get_credentials();

        let body = canonical_body(body)?;
        let nonce = self.nonce_provider.next_nonce();
        // Signing validates the credentials.
        let headers = signed_headers(creds, path, nonce, &body)?;

        let url = self.url(host, path)?;
        tracing::debug!(%method, %url, nonce, signed = true, "sending Kuna request");

        let response = self
            .http_client
            .request(method, url)
            .headers(headers)
            .body(body)
            .send()
            .await?;
        self.parse_response(response).await
    }

    /// Parse a response from the Kuna API.
    async fn parse_response<T>(&self, response: reqwest::Response) -> Result<T, KunaError>
    where
        T: DeserializeOwned,
    {
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let error = ApiError::from_body(status.as_u16(), &body);
            tracing::debug!(status = status.as_u16(), %error, "Kuna API error");
            return Err(KunaError::Api(error));
        }

        serde_json::from_str(&body).map_err(|e| {
            KunaError::InvalidResponse(format!("Failed to parse response: {}. Body: {}", e, body))
        })
    }

    /// Log and return the placeholder for an operation this client does not implement.
    pub(crate) fn unimplemented(operation: &'static str) -> Unimplemented {
        tracing::debug!(operation, "operation not implemented, no request sent");
        Unimplemented { operation }
    }
}

impl Default for KunaRestClient {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for KunaRestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KunaRestClient")
            .field("base_url", &self.base_url)
            .field("payment_url", &self.payment_url)
            .field("has_credentials", &self.credentials.is_some())
            .field("strictness", &self.normalizer.mode())
            .finish()
    }
}

/// Builder for [`KunaRestClient`].
pub struct KunaRestClientBuilder {
    base_url: String,
    payment_url: String,
    credentials: Option<Arc<dyn CredentialsProvider>>,
    nonce_provider: Option<Arc<dyn NonceProvider>>,
    user_agent: Option<String>,
    max_retries: u32,
    strictness: Strictness,
    http_client: Option<ClientWithMiddleware>,
}

impl KunaRestClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            base_url: KUNA_BASE_URL.to_string(),
            payment_url: KUNA_PAYMENT_URL.to_string(),
            credentials: None,
            nonce_provider: None,
            user_agent: None,
            max_retries: 0,
            strictness: Strictness::default(),
            http_client: None,
        }
    }

    /// Set the trading host URL (useful for testing with a mock server).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the payment host URL used for deposits and withdrawals.
    pub fn payment_url(mut self, url: impl Into<String>) -> Self {
        self.payment_url = url.into();
        self
    }

    /// Set the credentials provider for authenticated requests.
    pub fn credentials(mut self, credentials: Arc<dyn CredentialsProvider>) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set a custom nonce provider.
    ///
    /// Defaults to [`TimestampNonce`].
    pub fn nonce_provider(mut self, provider: Arc<dyn NonceProvider>) -> Self {
        self.nonce_provider = Some(provider);
        self
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Retry transient failures up to `retries` times with exponential backoff.
    ///
    /// Off by default.
    pub fn max_retries(mut self, retries: u32) -> Self {
        self.max_retries = retries;
        self
    }

    /// Set how malformed response fields are handled.
    pub fn strictness(mut self, strictness: Strictness) -> Self {
        self.strictness = strictness;
        self
    }

    /// Use a prebuilt HTTP client.
    ///
    /// `user_agent` and `max_retries` are ignored when this is set.
    pub fn http_client(mut self, client: ClientWithMiddleware) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Build the client.
    pub fn build(self) -> KunaRestClient {
        let http_client = match self.http_client {
            Some(client) => client,
            None => build_http_client(self.user_agent, self.max_retries),
        };

        let nonce_provider = self
            .nonce_provider
            .unwrap_or_else(|| Arc::new(TimestampNonce));

        KunaRestClient {
            http_client,
            base_url: self.base_url,
            payment_url: self.payment_url,
            credentials: self.credentials,
            nonce_provider,
            normalizer: Normalizer::new(self.strictness),
        }
    }
}

impl Default for KunaRestClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn build_http_client(user_agent: Option<String>, max_retries: u32) -> ClientWithMiddleware {
    let mut headers = HeaderMap::new();
    let user_agent =
        user_agent.unwrap_or_else(|| format!("kuna-api-client/{}", env!("CARGO_PKG_VERSION")));
    let header_value = HeaderValue::from_str(&user_agent)
        .unwrap_or_else(|_| HeaderValue::from_static("kuna-api-client"));
    headers.insert(USER_AGENT, header_value);

    let reqwest_client = reqwest::Client::builder()
        .default_headers(headers)
        .build()
        .unwrap_or_else(|_| reqwest::Client::new());

    let mut builder = ClientBuilder::new(reqwest_client).with(TracingMiddleware::default());
    if max_retries > 0 {
        let retry_policy = ExponentialBackoff::builder().build_with_max_retries(max_retries);
        builder = builder.with(RetryTransientMiddleware::new_with_policy(retry_policy));
    }
    builder.build()
}

// KunaClient trait implementation.

impl KunaClient for KunaRestClient {
    // ========== Public Endpoints ==========

    async fn get_timestamp(&self) -> Result<KunaTimestamp, KunaError> {
        KunaRestClient::get_timestamp(self).await
    }

    async fn get_currencies(&self) -> Result<Vec<Currency>, KunaError> {
        KunaRestClient::get_currencies(self).await
    }

    async fn get_exchange_rates(
        &self,
        currency: Option<&str>,
    ) -> Result<Vec<ExchangeRate>, KunaError> {
        KunaRestClient::get_exchange_rates(self, currency).await
    }

    async fn get_markets(&self) -> Result<Vec<Market>, KunaError> {
        KunaRestClient::get_markets(self).await
    }

    async fn get_tickers(&self, request: &TickersRequest) -> Result<Vec<Ticker>, KunaError> {
        KunaRestClient::get_tickers(self, request).await
    }

    async fn get_orderbook(&self, symbol: &str) -> Result<Orderbook, KunaError> {
        KunaRestClient::get_orderbook(self, symbol).await
    }

    async fn get_fees(&self) -> Result<Vec<FeeInfo>, KunaError> {
        KunaRestClient::get_fees(self).await
    }

    async fn check_kuna_code(&self, code: &str) -> Result<KunaCode, KunaError> {
        KunaRestClient::check_kuna_code(self, code).await
    }

    async fn get_trades_history(&self) -> Unimplemented {
        KunaRestClient::get_trades_history(self).await
    }

    async fn get_price_chart(&self) -> Unimplemented {
        KunaRestClient::get_price_chart(self).await
    }

    // ========== Private Endpoints - Account ==========

    async fn get_account_info(&self) -> Result<AccountInfo, KunaError> {
        KunaRestClient::get_account_info(self).await
    }

    async fn get_wallets(&self) -> Result<Vec<WalletInfo>, KunaError> {
        KunaRestClient::get_wallets(self).await
    }

    // ========== Private Endpoints - Orders ==========

    async fn get_active_orders(
        &self,
        market: Option<&str>,
        request: &ActiveOrdersRequest,
    ) -> Result<Vec<UserOrder>, KunaError> {
        KunaRestClient::get_active_orders(self, market, request).await
    }

    async fn get_orders_history(
        &self,
        market: Option<&str>,
        request: &OrdersHistoryRequest,
    ) -> Result<Vec<UserOrder>, KunaError> {
        KunaRestClient::get_orders_history(self, market, request).await
    }

    async fn get_order_trades(
        &self,
        market: &str,
        order_id: u64,
    ) -> Result<Vec<UserTrade>, KunaError> {
        KunaRestClient::get_order_trades(self, market, order_id).await
    }

    async fn create_order(&self) -> Unimplemented {
        KunaRestClient::create_order(self).await
    }

    async fn cancel_order(&self, order_id: u64) -> Result<CancelledOrder, KunaError> {
        KunaRestClient::cancel_order(self, order_id).await
    }

    async fn cancel_orders(&self, order_ids: &[u64]) -> Result<Vec<CancelledOrder>, KunaError> {
        KunaRestClient::cancel_orders(self, order_ids).await
    }

    // ========== Private Endpoints - Deposits & Withdrawals ==========

    async fn get_deposit_details(&self, deposit_id: &str) -> Result<DepositDetails, KunaError> {
        KunaRestClient::get_deposit_details(self, deposit_id).await
    }

    async fn get_deposit_history(
        &self,
        request: &HistoryRequest,
    ) -> Result<Vec<DepositDetails>, KunaError> {
        KunaRestClient::get_deposit_history(self, request).await
    }

    async fn create_withdraw(
        &self,
        request: &WithdrawRequest,
    ) -> Result<WithdrawCreated, KunaError> {
        KunaRestClient::create_withdraw(self, request).await
    }

    async fn get_withdraw_details(
        &self,
        withdrawal_id: &str,
    ) -> Result<WithdrawDetails, KunaError> {
        KunaRestClient::get_withdraw_details(self, withdrawal_id).await
    }

    async fn get_withdraw_history(
        &self,
        request: &HistoryRequest,
    ) -> Result<Vec<WithdrawDetails>, KunaError> {
        KunaRestClient::get_withdraw_history(self, request).await
    }

    async fn get_saved_cards(&self) -> Unimplemented {
        KunaRestClient::get_saved_cards(self).await
    }

    async fn delete_saved_card(&self) -> Unimplemented {
        KunaRestClient::delete_saved_card(self).await
    }

    // ========== Private Endpoints - KunaCodes ==========

    async fn create_kuna_code(
        &self,
        request: &CreateKunaCodeRequest,
    ) -> Result<KunaCode, KunaError> {
        KunaRestClient::create_kuna_code(self, request).await
    }

    async fn get_issued_kuna_codes(
        &self,
        request: &KunaCodesRequest,
    ) -> Result<Vec<KunaCode>, KunaError> {
        KunaRestClient::get_issued_kuna_codes(self, request).await
    }

    async fn get_redeemed_kuna_codes(
        &self,
        request: &KunaCodesRequest,
    ) -> Result<Vec<KunaCode>, KunaError> {
        KunaRestClient::get_redeemed_kuna_codes(self, request).await
    }

    async fn redeem_kuna_code(&self, code: &str) -> Result<KunaCode, KunaError> {
        KunaRestClient::redeem_kuna_code(self, code).await
    }
}
