use crate::error::{check_aligned, check_period, Result};
use crate::sma::simple_moving_average;
use crate::Indicator;
use serde::{Deserialize, Serialize};
use taseries_core::Ohlcv;

/// True Range: `max(high - low, |high - prev_close|, |prev_close - low|)`.
///
/// The first bar has no previous close and reduces to `high - low`.
pub fn true_range(high: &[f64], low: &[f64], close: &[f64]) -> Result<Vec<f64>> {
    let len = check_aligned(&[("high", high), ("low", low), ("close", close)])?;

    Ok((0..len)
        .map(|i| {
            let hl = high[i] - low[i];
            if i == 0 {
                return hl;
            }
            let prev_close = close[i - 1];
            let hc = (high[i] - prev_close).abs();
            let lc = (prev_close - low[i]).abs();
            hl.max(hc).max(lc)
        })
        .collect())
}

/// Average True Range: trailing simple mean of true range over `period`.
pub fn average_true_range(
    high: &[f64],
    low: &[f64],
    close: &[f64],
    period: usize,
) -> Result<Vec<f64>> {
    check_period("atr", period)?;
    let tr = true_range(high, low, close)?;
    simple_moving_average(&tr, period)
}

/// True Range of each bar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TrueRange;

impl Indicator for TrueRange {
    type Output = Vec<f64>;

    fn name(&self) -> &'static str {
        "true_range"
    }

    fn lookback(&self) -> usize {
        0
    }

    fn compute(&self, bars: &Ohlcv) -> Result<Vec<f64>> {
        true_range(&bars.high, &bars.low, &bars.close)
    }
}

/// Average True Range (ATR).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Atr {
    pub period: usize,
}

impl Atr {
    pub fn new(period: usize) -> Self {
        Self { period }
    }
}

impl Default for Atr {
    fn default() -> Self {
        Self::new(14)
    }
}

impl Indicator for Atr {
    type Output = Vec<f64>;

    fn name(&self) -> &'static str {
        "atr"
    }

    fn lookback(&self) -> usize {
        self.period.saturating_sub(1)
    }

    fn compute(&self, bars: &Ohlcv) -> Result<Vec<f64>> {
        average_true_range(&bars.high, &bars.low, &bars.close, self.period)
    }
}
