//! Performance metrics: pure functions that compute return statistics.
//!
//! Every metric is a pure function: a slice of values in, a scalar out.
//! Degenerate inputs (too short, zero variance) give 0.0 rather than NaN.

use quantfetch_core::TimeSeries;
use serde::{Deserialize, Serialize};

/// Sampling frequency of a profit/loss series, fixing how it is annualized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Frequency {
    /// 250 trading periods per year.
    Daily,
    Weekly,
    Monthly,
}

impl Frequency {
    pub fn periods_per_year(self) -> u32 {
        match self {
            Frequency::Daily => 250,
            Frequency::Weekly => 52,
            Frequency::Monthly => 12,
        }
    }
}

// ─── Ratios ─────────────────────────────────────────────────────────

/// Annualized Sharpe ratio of a daily profit/loss series.
///
/// Sharpe = sqrt(250) * mean(pnl) / std(pnl), with the sample (n - 1)
/// standard deviation. Returns 0.0 for fewer than 2 points or zero spread.
///
/// A NaN or infinite value anywhere in `profit_loss` also yields 0.0, which is
/// indistinguishable from a flat series. Filter or check finiteness first if
/// bad input must be reported.
pub fn sharpe_ratio(profit_loss: &[f64]) -> f64 {
    annualized_sharpe(profit_loss, Frequency::Daily)
}

/// Sharpe ratio annualized for the given sampling frequency.
pub fn annualized_sharpe(profit_loss: &[f64], freq: Frequency) -> f64 {
    if profit_loss.len() < 2 {
        return 0.0;
    }
    let std = std_dev(profit_loss);
    if !std.is_finite() || std < 1e-15 {
        return 0.0;
    }
    f64::from(freq.periods_per_year()).sqrt() * mean_f64(profit_loss) / std
}

// ─── Returns ────────────────────────────────────────────────────────

/// Simple period returns of a price or equity path.
///
/// A non-positive previous value yields a 0.0 return for that step.
pub fn returns(prices: &[f64]) -> Vec<f64> {
    if prices.len() < 2 {
        return Vec::new();
    }
    prices
        .windows(2)
        .map(|w| {
            if w[0] > 0.0 {
                (w[1] - w[0]) / w[0]
            } else {
                0.0
            }
        })
        .collect()
}

/// Daily returns on the adjusted close, i.e. total return including dividends.
pub fn adj_close_returns(series: &TimeSeries) -> Vec<f64> {
    returns(&series.adj_closes())
}

/// Daily returns on the close column as stored in the series.
pub fn close_returns(series: &TimeSeries) -> Vec<f64> {
    returns(&series.closes())
}

/// Total return as a fraction: (final - initial) / initial.
pub fn total_return(prices: &[f64]) -> f64 {
    match (prices.first(), prices.last()) {
        (Some(&first), Some(&last)) if prices.len() >= 2 && first > 0.0 => (last - first) / first,
        _ => 0.0,
    }
}

// ─── Helpers ────────────────────────────────────────────────────────

pub(crate) fn mean_f64(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

pub(crate) fn std_dev(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let mean = mean_f64(values);
    let variance =
        values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (values.len() - 1) as f64;
    variance.sqrt()
}
