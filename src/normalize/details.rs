//! Object payloads: cancelled orders, deposits, withdrawals and KunaCodes.

use serde_json::Value;

use super::coerce::EpochUnit;
use super::reader::Reader;
use super::{NormalizeError, Normalizer};
use crate::rest::private::{CancelledOrder, DepositDetails, KunaCode, WithdrawDetails};

impl Normalizer {
    /// Normalize the response of `POST /v3/order/cancel`.
    ///
    /// `is_cancelled`, `is_hidden`, `is_live` and `was_forced` are always
    /// `None`; whatever the payload carries for them is ignored.
    pub fn cancelled_order(&self, raw: &Value) -> Result<CancelledOrder, NormalizeError> {
        let obj = Reader::object("cancelled order", raw, self.mode)?;
        Ok(CancelledOrder {
            id: obj.unsigned("id")?,
            side: obj.parse("side", "order side")?,
            order_type: obj.parse("type", "order type")?,
            price: obj.number("price")?,
            avg_execution_price: obj.number("avg_execution_price")?,
            state: obj.parse("state", "order status")?,
            symbol: obj.text("symbol")?,
            timestamp: obj.date("timestamp", EpochUnit::Seconds)?,
            original_amount: obj.number("original_amount")?,
            remaining_amount: obj.number("remaining_amount")?,
            executed_amount: obj.number("executed_amount")?,
            is_cancelled: None,
            is_hidden: None,
            is_live: None,
            was_forced: None,
        })
    }

    /// Normalize the response of `POST /v3/order/cancel/multi`.
    pub fn cancelled_orders(&self, raw: &Value) -> Result<Vec<CancelledOrder>, NormalizeError> {
        self.each("cancelled orders", raw, Self::cancelled_order)
    }

    /// Normalize a single deposit.
    pub fn deposit_details(&self, raw: &Value) -> Result<DepositDetails, NormalizeError> {
        let obj = Reader::object("deposit", raw, self.mode)?;
        Ok(DepositDetails {
            id: obj.text("id")?,
            amount: obj.number("amount")?,
            fee: obj.opt_number("fee")?,
            currency: obj.text("currency")?,
            status: obj.text("status")?,
            payment_service: obj.opt_text("payment_service")?,
            address: obj.opt_text("address")?,
            txid: obj.opt_text("txid")?,
            created_at: obj.date("created_at", EpochUnit::Millis)?,
        })
    }

    /// Normalize the deposit history.
    pub fn deposits(&self, raw: &Value) -> Result<Vec<DepositDetails>, NormalizeError> {
        self.each("deposits", raw, Self::deposit_details)
    }

    /// Normalize a single withdrawal.
    pub fn withdraw_details(&self, raw: &Value) -> Result<WithdrawDetails, NormalizeError> {
        let obj = Reader::object("withdraw", raw, self.mode)?;
        Ok(WithdrawDetails {
            id: obj.text("id")?,
            amount: obj.number("amount")?,
            fee: obj.opt_number("fee")?,
            currency: obj.text("currency")?,
            status: obj.text("status")?,
            payment_service: obj.opt_text("payment_service")?,
            address: obj.opt_text("address")?,
            txid: obj.opt_text("txid")?,
            created_at: obj.date("created_at", EpochUnit::Millis)?,
            processed_at: obj.date("processed_at", EpochUnit::Millis)?,
        })
    }

    /// Normalize the withdrawal history.
    pub fn withdraws(&self, raw: &Value) -> Result<Vec<WithdrawDetails>, NormalizeError> {
        self.each("withdraws", raw, Self::withdraw_details)
    }

    /// Normalize a single KunaCode.
    pub fn kuna_code(&self, raw: &Value) -> Result<KunaCode, NormalizeError> {
        let obj = Reader::object("kuna code", raw, self.mode)?;
        Ok(KunaCode {
            id: obj.opt_unsigned("id")?,
            sn: obj.text("sn")?,
            code: obj.opt_text("code")?,
            recipient: obj.opt_text("recipient")?,
            amount: obj.number("amount")?,
            currency: obj.text("currency")?,
            status: obj.parse("status", "kuna code status")?,
            non_refundable_before: obj.date("non_refundable_before", EpochUnit::Millis)?,
            comment: obj.opt_text("comment")?,
            private_comment: obj.opt_text("private_comment")?,
            created_at: obj.date("created_at", EpochUnit::Millis)?,
            redeemed_at: obj.date("redeemed_at", EpochUnit::Millis)?,
        })
    }

    /// Normalize the issued or redeemed KunaCode lists.
    pub fn kuna_codes(&self, raw: &Value) -> Result<Vec<KunaCode>, NormalizeError> {
        self.each("kuna codes", raw, Self::kuna_code)
    }
}
