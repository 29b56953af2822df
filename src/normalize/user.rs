//! Private positional payloads: wallets, orders and trades.

use serde_json::Value;

use super::coerce::EpochUnit;
use super::reader::Reader;
use super::schema::{USER_ORDER, USER_TRADE, WALLET};
use super::{NormalizeError, Normalizer};
use crate::rest::private::{UserOrder, UserTrade, WalletInfo};
use crate::types::{OrderSide, TradePosition};

impl Normalizer {
    /// Normalize `POST /v3/auth/r/wallets`.
    pub fn wallets(&self, raw: &Value) -> Result<Vec<WalletInfo>, NormalizeError> {
        self.each("wallets", raw, |this, row| {
            let row = Reader::row(&WALLET, row, this.mode)?;
            Ok(WalletInfo {
                currency: row.text("currency")?,
                total: row.number("total")?,
                available: row.number("available")?,
            })
        })
    }

    /// Normalize the active-orders and orders-history payloads.
    pub fn user_orders(&self, raw: &Value) -> Result<Vec<UserOrder>, NormalizeError> {
        self.each("orders", raw, Self::user_order)
    }

    /// Normalize one order row.
    ///
    /// The side is not transmitted: a positive initial volume is a buy,
    /// zero or negative is a sell.
    pub fn user_order(&self, raw: &Value) -> Result<UserOrder, NormalizeError> {
        let row = Reader::row(&USER_ORDER, raw, self.mode)?;
        let signed_initial = row.number("initial_volume")?;
        let side = if signed_initial > 0.0 {
            OrderSide::Buy
        } else {
            OrderSide::Sell
        };

        Ok(UserOrder {
            id: row.unsigned("id")?,
            market: row.text("market")?,
            created_at: row.date("created_at", EpochUnit::Millis)?,
            updated_at: row.date("updated_at", EpochUnit::Millis)?,
            volume: row.number("volume")?,
            initial_volume: signed_initial.abs(),
            side,
            order_type: row.parse("type", "order type")?,
            status: row.parse("status", "order status")?,
            price: row.opt_number("price")?,
            avg_execution_price: row.opt_number("avg_execution_price")?,
        })
    }

    /// Normalize `POST /v3/auth/r/order/{market}:{id}/trades`.
    pub fn user_trades(&self, raw: &Value) -> Result<Vec<UserTrade>, NormalizeError> {
        self.each("trades", raw, |this, row| {
            let row = Reader::row(&USER_TRADE, row, this.mode)?;
            let position = row.integer("position")?;
            let position = TradePosition::from_i64(position).ok_or_else(|| {
                NormalizeError::InvalidValue {
                    field: "trade.position".to_string(),
                    expected: "trade position (1 or -1)",
                    raw: position.to_string(),
                }
            })?;

            Ok(UserTrade {
                id: row.unsigned("id")?,
                market: row.text("market")?,
                executed_at: row.date("executed_at", EpochUnit::Millis)?,
                order_id: row.unsigned("order_id")?,
                volume: row.number("volume")?,
                price: row.number("price")?,
                position,
                fee: row.number("fee")?,
                fee_currency: row.text("fee_currency")?,
            })
        })
    }
}
