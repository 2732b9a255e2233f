//! QuantFetch Perf: performance statistics over price and profit/loss series.
//!
//! This crate builds on `quantfetch-core` to provide:
//! - Simple returns from prices or a fetched `TimeSeries`
//! - Annualized Sharpe ratio (250 periods per year by default)
//! - Drawdown paths with duration, and their extremes
//! - A serializable buy-and-hold summary of a series

pub mod drawdown;
pub mod metrics;
pub mod summary;

pub use drawdown::{drawdowns, max_drawdown, Drawdowns};
pub use metrics::{
    adj_close_returns, annualized_sharpe, close_returns, returns, sharpe_ratio, total_return,
    Frequency,
};
pub use summary::PerformanceSummary;
