//! Fee schedules from `GET /v3/fees`.
//!
//! Numbers are coerced at every level: inside fee entries, their assets and
//! the optional minimum amounts. Values that are already numeric pass through,
//! so normalizing a serialized [`FeeInfo`] again yields the same record.

use serde_json::Value;

use super::reader::Reader;
use super::{NormalizeError, Normalizer};
use crate::rest::public::{Fee, FeeAsset, FeeInfo};

impl Normalizer {
    /// Normalize the fee schedule of every currency.
    pub fn fees(&self, raw: &Value) -> Result<Vec<FeeInfo>, NormalizeError> {
        self.each("fees", raw, Self::fee_info)
    }

    /// Normalize the fee schedule of one currency.
    pub fn fee_info(&self, raw: &Value) -> Result<FeeInfo, NormalizeError> {
        let obj = Reader::object("fee info", raw, self.mode)?;

        let min_deposit = obj
            .raw("min_deposit")?
            .filter(|v| !v.is_null())
            .map(|v| self.fee_asset(v))
            .transpose()?;
        let min_withdraw = obj
            .raw("min_withdraw")?
            .filter(|v| !v.is_null())
            .map(|v| self.fee_asset(v))
            .transpose()?;

        Ok(FeeInfo {
            code: obj.text("code")?,
            category: obj.text("category")?,
            deposit_fees: self.fee_list(obj.raw("deposit_fees")?)?,
            withdraw_fees: self.fee_list(obj.raw("withdraw_fees")?)?,
            min_deposit,
            min_withdraw,
        })
    }

    fn fee_list(&self, raw: Option<&Value>) -> Result<Vec<Fee>, NormalizeError> {
        match raw {
            None | Some(Value::Null) => Ok(Vec::new()),
            Some(list) => self.each("fee list", list, Self::fee),
        }
    }

    fn fee(&self, raw: &Value) -> Result<Fee, NormalizeError> {
        let obj = Reader::object("fee", raw, self.mode)?;
        let kind = obj.text("type")?;
        match kind.as_str() {
            "fixed" => {
                let asset = obj
                    .raw("asset")?
                    .ok_or_else(|| NormalizeError::MissingField {
                        field: "fee.asset".to_string(),
                    })?;
                Ok(Fee::Fixed {
                    asset: self.fee_asset(asset)?,
                })
            }
            "percent" => Ok(Fee::Percent {
                amount: obj.number("amount")?,
            }),
            _ => Err(NormalizeError::InvalidValue {
                field: "fee.type".to_string(),
                expected: "fee type (fixed or percent)",
                raw: kind,
            }),
        }
    }

    fn fee_asset(&self, raw: &Value) -> Result<FeeAsset, NormalizeError> {
        let obj = Reader::object("fee asset", raw, self.mode)?;
        Ok(FeeAsset {
            amount: obj.number("amount")?,
            currency: obj.text("currency")?,
            to_usd: obj.number("to_usd")?,
        })
    }
}
