//! Types for private REST API endpoints.

use serde::{Deserialize, Serialize};
use serde_with::{TimestampMilliSeconds, serde_as, skip_serializing_none};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use crate::types::serde_helpers::string_or_number;
use crate::types::{KunaCodeStatus, OrderSide, OrderStatus, OrderType, SortOrder, TradePosition};

// ========== Account ==========

/// SDK keys attached to the account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountPublicKeys {
    #[serde(default)]
    pub deposit_sdk_uah_public_key: Option<String>,
    #[serde(default)]
    pub deposit_sdk_usd_public_key: Option<String>,
    #[serde(default)]
    pub deposit_sdk_rub_public_key: Option<String>,
    #[serde(default)]
    pub deposit_sdk_uah_worldwide_public_key: Option<String>,
}

/// Response of `POST /v3/auth/me`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountInfo {
    pub email: String,
    /// Public Kuna identifier of the account.
    pub kunaid: String,
    pub two_factor: bool,
    pub withdraw_confirmation: bool,
    #[serde(default)]
    pub public_keys: AccountPublicKeys,
    pub announcements: bool,
}

/// Balance of one currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalletInfo {
    pub currency: String,
    pub total: f64,
    pub available: f64,
}

// ========== Orders ==========

/// An order of the authenticated user.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserOrder {
    pub id: u64,
    pub market: String,
    #[serde_as(as = "Option<Rfc3339>")]
    pub created_at: Option<OffsetDateTime>,
    #[serde_as(as = "Option<Rfc3339>")]
    pub updated_at: Option<OffsetDateTime>,
    /// Remaining volume, as sent by the exchange.
    pub volume: f64,
    /// Volume at creation; always non-negative, the sign lives in `side`.
    pub initial_volume: f64,
    /// Derived from the sign of the initial volume.
    pub side: OrderSide,
    #[serde(rename = "type")]
    pub order_type: OrderType,
    pub status: OrderStatus,
    /// `None` for market orders.
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub avg_execution_price: Option<f64>,
}

/// Body filter of `POST /v3/auth/r/orders`.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ActiveOrdersRequest {
    /// Restrict to these order ids.
    pub ids: Option<Vec<u64>>,
}

impl ActiveOrdersRequest {
    /// Request only the given orders.
    pub fn ids(ids: impl IntoIterator<Item = u64>) -> Self {
        Self {
            ids: Some(ids.into_iter().collect()),
        }
    }
}

/// Body filter of `POST /v3/auth/r/orders/hist`.
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OrdersHistoryRequest {
    /// Lower bound on creation time.
    #[serde_as(as = "Option<TimestampMilliSeconds<i64>>")]
    pub start: Option<OffsetDateTime>,
    /// Upper bound on creation time.
    #[serde_as(as = "Option<TimestampMilliSeconds<i64>>")]
    pub end: Option<OffsetDateTime>,
    /// Maximum number of orders.
    pub limit: Option<u32>,
    pub sort: Option<SortOrder>,
}

impl OrdersHistoryRequest {
    /// Set the time window.
    pub fn between(mut self, start: OffsetDateTime, end: OffsetDateTime) -> Self {
        self.start = Some(start);
        self.end = Some(end);
        self
    }

    /// Set the result limit.
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Set the sort order.
    pub fn sort(mut self, sort: SortOrder) -> Self {
        self.sort = Some(sort);
        self
    }
}

/// A fill of one of the user's orders.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserTrade {
    pub id: u64,
    pub market: String,
    #[serde_as(as = "Option<Rfc3339>")]
    pub executed_at: Option<OffsetDateTime>,
    pub order_id: u64,
    pub volume: f64,
    pub price: f64,
    pub position: TradePosition,
    pub fee: f64,
    pub fee_currency: String,
}

/// Result of cancelling an order.
///
/// The boolean flags are never filled from the response.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CancelledOrder {
    pub id: u64,
    pub side: OrderSide,
    #[serde(rename = "type")]
    pub order_type: OrderType,
    pub price: f64,
    pub avg_execution_price: f64,
    pub state: OrderStatus,
    pub symbol: String,
    #[serde_as(as = "Option<Rfc3339>")]
    pub timestamp: Option<OffsetDateTime>,
    pub original_amount: f64,
    pub remaining_amount: f64,
    pub executed_amount: f64,
    #[serde(default)]
    pub is_cancelled: Option<bool>,
    #[serde(default)]
    pub is_hidden: Option<bool>,
    #[serde(default)]
    pub is_live: Option<bool>,
    #[serde(default)]
    pub was_forced: Option<bool>,
}

// ========== Deposits & withdrawals ==========

/// A deposit, as returned by the payment host.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepositDetails {
    pub id: String,
    pub amount: f64,
    #[serde(default)]
    pub fee: Option<f64>,
    pub currency: String,
    pub status: String,
    #[serde(default)]
    pub payment_service: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub txid: Option<String>,
    #[serde_as(as = "Option<Rfc3339>")]
    pub created_at: Option<OffsetDateTime>,
}

/// A withdrawal, as returned by the payment host.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WithdrawDetails {
    pub id: String,
    pub amount: f64,
    #[serde(default)]
    pub fee: Option<f64>,
    pub currency: String,
    pub status: String,
    #[serde(default)]
    pub payment_service: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub txid: Option<String>,
    #[serde_as(as = "Option<Rfc3339>")]
    pub created_at: Option<OffsetDateTime>,
    #[serde_as(as = "Option<Rfc3339>")]
    pub processed_at: Option<OffsetDateTime>,
}

/// Body filter of the deposit and withdrawal history endpoints.
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HistoryRequest {
    pub currency: Option<String>,
    #[serde_as(as = "Option<TimestampMilliSeconds<i64>>")]
    pub date_from: Option<OffsetDateTime>,
    #[serde_as(as = "Option<TimestampMilliSeconds<i64>>")]
    pub date_to: Option<OffsetDateTime>,
    pub limit: Option<u32>,
    pub sort: Option<SortOrder>,
}

impl HistoryRequest {
    /// History of one currency.
    pub fn currency(currency: impl Into<String>) -> Self {
        Self {
            currency: Some(currency.into()),
            ..Default::default()
        }
    }
}

/// Body of `POST /v3/auth/withdraw`.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WithdrawRequest {
    /// Withdrawal method, usually the currency code.
    pub withdraw_type: String,
    pub amount: f64,
    pub address: Option<String>,
    /// Memo or destination tag.
    pub payment_id: Option<String>,
    /// Withdraw the whole available balance.
    pub withdraw_all: Option<bool>,
}

impl WithdrawRequest {
    /// Withdraw `amount` of `withdraw_type` to `address`.
    pub fn new(withdraw_type: impl Into<String>, amount: f64, address: impl Into<String>) -> Self {
        Self {
            withdraw_type: withdraw_type.into(),
            amount,
            address: Some(address.into()),
            payment_id: None,
            withdraw_all: None,
        }
    }

    /// Attach a memo or destination tag.
    pub fn payment_id(mut self, payment_id: impl Into<String>) -> Self {
        self.payment_id = Some(payment_id.into());
        self
    }
}

/// Response of `POST /v3/auth/withdraw`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WithdrawCreated {
    #[serde(deserialize_with = "string_or_number::deserialize")]
    pub withdrawal_id: String,
}

// ========== KunaCodes ==========

/// A KunaCode voucher.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KunaCode {
    #[serde(default)]
    pub id: Option<u64>,
    /// Public serial number.
    pub sn: String,
    /// Full code; only visible to the issuer.
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub recipient: Option<String>,
    pub amount: f64,
    pub currency: String,
    pub status: KunaCodeStatus,
    #[serde_as(as = "Option<Rfc3339>")]
    pub non_refundable_before: Option<OffsetDateTime>,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub private_comment: Option<String>,
    #[serde_as(as = "Option<Rfc3339>")]
    pub created_at: Option<OffsetDateTime>,
    #[serde_as(as = "Option<Rfc3339>")]
    pub redeemed_at: Option<OffsetDateTime>,
}

/// Body of `POST /v3/auth/kuna_codes`.
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateKunaCodeRequest {
    pub amount: f64,
    pub currency: String,
    /// Restrict redemption to this Kuna id.
    pub recipient: Option<String>,
    #[serde_as(as = "Option<Rfc3339>")]
    pub non_refundable_before: Option<OffsetDateTime>,
    /// Visible to the recipient.
    pub comment: Option<String>,
    /// Visible to the issuer only.
    pub private_comment: Option<String>,
}

impl CreateKunaCodeRequest {
    /// Issue a code worth `amount` of `currency`.
    pub fn new(amount: f64, currency: impl Into<String>) -> Self {
        Self {
            amount,
            currency: currency.into(),
            recipient: None,
            non_refundable_before: None,
            comment: None,
            private_comment: None,
        }
    }

    /// Restrict redemption to one recipient.
    pub fn recipient(mut self, recipient: impl Into<String>) -> Self {
        self.recipient = Some(recipient.into());
        self
    }

    /// Set the public comment.
    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}

/// Paging of the issued/redeemed KunaCode lists.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct KunaCodesRequest {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

/// Body of `PUT /v3/auth/kuna_codes/redeem`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct RedeemKunaCodeRequest<'a> {
    pub code: &'a str,
}

/// Body of `POST /v3/order/cancel`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct CancelOrderRequest {
    pub order_id: u64,
}

/// Body of `POST /v3/order/cancel/multi`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct CancelOrdersRequest<'a> {
    pub order_ids: &'a [u64],
}

/// Body of the deposit and withdrawal details endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct DetailsRequest<'a> {
    pub id: &'a str,
}
