//! One-shot performance summary of a fetched price series.

use crate::drawdown::drawdowns;
use crate::metrics::{adj_close_returns, sharpe_ratio, total_return};
use quantfetch_core::TimeSeries;
use serde::{Deserialize, Serialize};

/// Headline statistics of buying and holding a symbol over its series.
///
/// Computed on adjusted close so dividends and splits count toward return.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceSummary {
    pub symbol: String,
    pub bars: usize,
    pub total_return: f64,
    pub sharpe: f64,
    pub max_drawdown: f64,
    pub max_drawdown_duration: usize,
}

impl PerformanceSummary {
    pub fn from_series(series: &TimeSeries) -> Self {
        let prices = series.adj_closes();
        let dd = drawdowns(&prices);
        Self {
            symbol: series.symbol().to_string(),
            bars: series.len(),
            total_return: total_return(&prices),
            sharpe: sharpe_ratio(&adj_close_returns(series)),
            max_drawdown: dd.max_drawdown,
            max_drawdown_duration: dd.max_duration,
        }
    }
}
