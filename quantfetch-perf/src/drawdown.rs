//! Drawdowns from the running peak of an equity or price path.

use serde::{Deserialize, Serialize};

/// Per-point drawdown and duration, plus their extremes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Drawdowns {
    /// Fractional decline from the running peak at each point (0.0 or negative).
    pub drawdown: Vec<f64>,
    /// Periods elapsed since the running peak was last set.
    pub duration: Vec<usize>,
    /// Deepest drawdown, as a negative fraction (e.g. -0.15 = 15%).
    pub max_drawdown: f64,
    /// Longest run of periods spent below a prior peak.
    pub max_duration: usize,
}

/// Compute the drawdown path of `equity`.
///
/// The first point is its own peak. Non-positive peaks contribute no drawdown.
pub fn drawdowns(equity: &[f64]) -> Drawdowns {
    let mut drawdown = Vec::with_capacity(equity.len());
    let mut duration = Vec::with_capacity(equity.len());
    let mut max_drawdown = 0.0_f64;
    let mut max_duration = 0;

    let mut peak = f64::NEG_INFINITY;
    let mut since_peak = 0;

    for &eq in equity {
        if eq >= peak {
            peak = eq;
            since_peak = 0;
        } else {
            since_peak += 1;
        }

        let dd = if peak > 0.0 { (eq - peak) / peak } else { 0.0 };
        max_drawdown = max_drawdown.min(dd);
        max_duration = max_duration.max(since_peak);

        drawdown.push(dd);
        duration.push(since_peak);
    }

    Drawdowns {
        drawdown,
        duration,
        max_drawdown,
        max_duration,
    }
}

/// Maximum drawdown as a negative fraction; 0.0 for monotone or short input.
pub fn max_drawdown(equity: &[f64]) -> f64 {
    drawdowns(equity).max_drawdown
}
