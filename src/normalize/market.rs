//! Public market data: tickers and order books.

use serde_json::Value;

use super::reader::Reader;
use super::schema::{ORDERBOOK_RECORD, TICKER};
use super::{NormalizeError, Normalizer};
use crate::rest::public::{Orderbook, OrderbookRecord, Ticker};

impl Normalizer {
    /// Normalize `GET /v3/tickers`: one 11-position array per symbol.
    pub fn tickers(&self, raw: &Value) -> Result<Vec<Ticker>, NormalizeError> {
        self.each("tickers", raw, Self::ticker)
    }

    /// Normalize a single ticker row.
    pub fn ticker(&self, raw: &Value) -> Result<Ticker, NormalizeError> {
        let row = Reader::row(&TICKER, raw, self.mode)?;
        Ok(Ticker {
            symbol: row.text("symbol")?,
            bid: row.number("bid")?,
            bid_volume: row.number("bid_volume")?,
            ask: row.number("ask")?,
            ask_volume: row.number("ask_volume")?,
            day_change_quote: row.number("day_change_quote")?,
            day_change_quote_percent: row.number("day_change_quote_percent")?,
            last_price: row.number("last_price")?,
            day_volume: row.number("day_volume")?,
            day_min: row.number("day_min")?,
            day_max: row.number("day_max")?,
        })
    }

    /// Normalize `GET /v3/book/{symbol}`.
    ///
    /// Rows with negative volume are asks and are stored with the absolute
    /// volume; all other rows are bids. Input order is kept within each side.
    pub fn orderbook(&self, raw: &Value) -> Result<Orderbook, NormalizeError> {
        let records = self.each("orderbook", raw, Self::orderbook_row)?;

        let mut book = Orderbook::default();
        for mut record in records {
            if record.volume < 0.0 {
                record.volume = record.volume.abs();
                book.ask.push(record);
            } else {
                book.bid.push(record);
            }
        }
        Ok(book)
    }

    fn orderbook_row(&self, raw: &Value) -> Result<OrderbookRecord, NormalizeError> {
        let row = Reader::row(&ORDERBOOK_RECORD, raw, self.mode)?;
        Ok(OrderbookRecord {
            price: row.number("price")?,
            volume: row.number("volume")?,
            orders: row.unsigned("orders")?,
        })
    }
}
