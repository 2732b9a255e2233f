//! TimeSeries: date-ordered daily bars for one symbol.

use super::bar::DailyBar;
use crate::data::DataError;
use chrono::NaiveDate;
use polars::prelude::*;
use serde::Serialize;

/// Daily bars for one symbol, sorted ascending by date.
///
/// Built fresh on every fetch. Ordering is enforced on construction; duplicate
/// dates are kept as delivered by the source.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeSeries {
    symbol: String,
    bars: Vec<DailyBar>,
}

impl TimeSeries {
    /// Build a series, sorting the bars ascending by date.
    ///
    /// The sort is stable, so bars sharing a date keep their input order.
    pub fn new(symbol: impl Into<String>, mut bars: Vec<DailyBar>) -> Self {
        bars.sort_by_key(|b| b.date);
        Self {
            symbol: symbol.into(),
            bars,
        }
    }

    pub fn empty(symbol: impl Into<String>) -> Self {
        Self::new(symbol, Vec::new())
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn bars(&self) -> &[DailyBar] {
        &self.bars
    }

    pub fn into_bars(self) -> Vec<DailyBar> {
        self.bars
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn first(&self) -> Option<&DailyBar> {
        self.bars.first()
    }

    pub fn last(&self) -> Option<&DailyBar> {
        self.bars.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DailyBar> {
        self.bars.iter()
    }

    /// Bar for an exact date, if present.
    pub fn get(&self, date: NaiveDate) -> Option<&DailyBar> {
        self.bars
            .binary_search_by_key(&date, |b| b.date)
            .ok()
            .map(|i| &self.bars[i])
    }

    pub fn dates(&self) -> Vec<NaiveDate> {
        self.bars.iter().map(|b| b.date).collect()
    }

    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.close).collect()
    }

    pub fn adj_closes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.adj_close).collect()
    }

    /// True when every date is strictly greater than the one before it.
    pub fn is_strictly_ascending(&self) -> bool {
        self.bars.windows(2).all(|w| w[0].date < w[1].date)
    }

    /// Convert to a Polars DataFrame with columns
    /// `date, open, high, low, close, volume, adj_close`.
    pub fn to_frame(&self) -> Result<DataFrame, DataError> {
        let epoch = NaiveDate::from_ymd_opt(1970, 1, 1)
            .ok_or_else(|| DataError::Frame("epoch date out of range".into()))?;
        let dates: Vec<i32> = self
            .bars
            .iter()
            .map(|b| (b.date - epoch).num_days() as i32)
            .collect();
        let opens: Vec<f64> = self.bars.iter().map(|b| b.open).collect();
        let highs: Vec<f64> = self.bars.iter().map(|b| b.high).collect();
        let lows: Vec<f64> = self.bars.iter().map(|b| b.low).collect();
        let closes: Vec<f64> = self.bars.iter().map(|b| b.close).collect();
        let volumes: Vec<u64> = self.bars.iter().map(|b| b.volume).collect();
        let adj_closes: Vec<f64> = self.bars.iter().map(|b| b.adj_close).collect();

        DataFrame::new(vec![
            Column::new("date".into(), dates)
                .cast(&DataType::Date)
                .map_err(|e| DataError::Frame(format!("date cast: {e}")))?,
            Column::new("open".into(), opens),
            Column::new("high".into(), highs),
            Column::new("low".into(), lows),
            Column::new("close".into(), closes),
            Column::new("volume".into(), volumes),
            Column::new("adj_close".into(), adj_closes),
        ])
        .map_err(|e| DataError::Frame(format!("dataframe creation: {e}")))
    }
}

impl<'a> IntoIterator for &'a TimeSeries {
    type Item = &'a DailyBar;
    type IntoIter = std::slice::Iter<'a, DailyBar>;

    fn into_iter(self) -> Self::IntoIter {
        self.bars.iter()
    }
}
