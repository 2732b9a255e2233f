//! Sharpe ratio arithmetic and invariants, plus a fetch → summary pipeline.

use proptest::prelude::*;
use quantfetch_core::data::{CsvTransport, DataError, HistoricalSeriesFetcher, Url, YahooCsvEndpoint};
use quantfetch_core::{DateRange, HistoryRequest};
use quantfetch_perf::{adj_close_returns, sharpe_ratio, PerformanceSummary};

/// 250 points with mean 0.002 and sample standard deviation 0.01 exactly.
fn pnl_mean_002_std_01() -> Vec<f64> {
    // Half at mean + d, half at mean - d: sample variance = 250 d^2 / 249.
    let d = 0.01 * (249.0_f64 / 250.0).sqrt();
    (0..250)
        .map(|i| if i % 2 == 0 { 0.002 + d } else { 0.002 - d })
        .collect()
}

#[test]
fn sharpe_of_known_moments() {
    let pnl = pnl_mean_002_std_01();
    let expected = 250.0_f64.sqrt() * 0.002 / 0.01;
    let got = sharpe_ratio(&pnl);
    assert!((got - expected).abs() < 1e-9, "expected {expected}, got {got}");
    assert!((got - 3.162).abs() < 1e-3);
}

proptest! {
    /// Scaling every P&L value by a positive constant leaves Sharpe unchanged.
    #[test]
    fn sharpe_is_scale_invariant(
        pnl in prop::collection::vec(-0.05..0.05_f64, 2..200),
        scale in 0.1..100.0_f64,
    ) {
        let base = sharpe_ratio(&pnl);
        let scaled: Vec<f64> = pnl.iter().map(|p| p * scale).collect();
        let rescaled = sharpe_ratio(&scaled);
        if base != 0.0 && rescaled != 0.0 {
            prop_assert!((base - rescaled).abs() < 1e-6 * base.abs().max(1.0));
        }
    }

    /// Negating the series negates the ratio.
    #[test]
    fn sharpe_is_odd(pnl in prop::collection::vec(-0.05..0.05_f64, 2..200)) {
        let negated: Vec<f64> = pnl.iter().map(|p| -p).collect();
        prop_assert!((sharpe_ratio(&pnl) + sharpe_ratio(&negated)).abs() < 1e-9);
    }
}

struct Canned(&'static str);

impl CsvTransport for Canned {
    fn get(&self, _symbol: &str, _url: &Url) -> Result<String, DataError> {
        Ok(self.0.to_string())
    }
}

#[test]
fn summary_of_fetched_series() {
    let body = "Date,Open,High,Low,Close,Volume,Adj Close\n\
                2020-01-03,108.0,109.0,100.0,101.0,900000,101.0\n\
                2020-01-02,104.0,110.0,103.0,108.0,1200000,108.0\n\
                2020-01-01,100.0,105.0,99.0,104.0,1000000,104.0\n";
    let endpoint = YahooCsvEndpoint::new("http://example.test/table.csv").unwrap();
    let fetcher = HistoricalSeriesFetcher::with_transport(endpoint, Canned(body));
    let range = DateRange::from_ymd((2020, 1, 1), (2020, 1, 3)).unwrap();
    let ts = fetcher
        .fetch(&HistoryRequest::new("TEST", range).unwrap())
        .unwrap();

    let rets = adj_close_returns(&ts);
    assert_eq!(rets.len(), 2);
    assert!((rets[0] - (108.0 / 104.0 - 1.0)).abs() < 1e-12);

    let summary = PerformanceSummary::from_series(&ts);
    assert_eq!(summary.bars, 3);
    assert!((summary.total_return - (101.0 / 104.0 - 1.0)).abs() < 1e-12);
    assert!((summary.max_drawdown - (101.0 / 108.0 - 1.0)).abs() < 1e-12);
    assert_eq!(summary.max_drawdown_duration, 1);
}
