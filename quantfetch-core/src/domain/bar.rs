//! DailyBar: one trading day of OHLCV data for a single symbol.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// OHLCV bar for a single trading day.
///
/// Prices are in currency per share. `adj_close` is the close corrected for
/// dividends and splits; when a series is fetched with adjustment enabled the
/// OHLC columns have already been scaled onto the same basis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyBar {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
    pub adj_close: f64,
}

impl DailyBar {
    /// Ratio that maps raw prices onto the adjusted-close basis.
    ///
    /// `None` when the ratio is undefined (zero or non-finite close).
    pub fn adjustment_ratio(&self) -> Option<f64> {
        if self.close == 0.0 || !self.close.is_finite() || !self.adj_close.is_finite() {
            return None;
        }
        let ratio = self.adj_close / self.close;
        ratio.is_finite().then_some(ratio)
    }

    /// Basic OHLC sanity check: high >= low and both bracket open and close.
    pub fn is_sane(&self) -> bool {
        self.high >= self.low
            && self.high >= self.open
            && self.high >= self.close
            && self.low <= self.open
            && self.low <= self.close
    }
}
