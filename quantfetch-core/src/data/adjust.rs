//! Corporate-action adjustment of OHLC prices.
//!
//! Each bar's open/high/low/close is scaled by `adj_close / close`, putting the
//! whole row on the dividend- and split-adjusted basis. Volume and adj_close
//! are left untouched.

use super::provider::DataError;
use crate::domain::{DailyBar, TimeSeries};

/// Scale one bar onto the adjusted-close basis.
pub fn adjust_bar(bar: &DailyBar) -> Result<DailyBar, DataError> {
    let ratio = bar.adjustment_ratio().ok_or_else(|| DataError::Adjustment {
        date: bar.date,
        reason: format!(
            "adjustment ratio undefined for close {} / adj_close {}",
            bar.close, bar.adj_close
        ),
    })?;

    Ok(DailyBar {
        open: bar.open * ratio,
        high: bar.high * ratio,
        low: bar.low * ratio,
        close: bar.close * ratio,
        ..bar.clone()
    })
}

/// Adjust every bar of a series. Fails on the first bar that cannot be adjusted.
pub fn adjust_series(series: TimeSeries) -> Result<TimeSeries, DataError> {
    let symbol = series.symbol().to_string();
    let bars = series
        .iter()
        .map(adjust_bar)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| {
            log::warn!("adjustment failed for {symbol}: {e}");
            e
        })?;
    Ok(TimeSeries::new(symbol, bars))
}
