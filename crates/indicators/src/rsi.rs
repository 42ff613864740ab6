use crate::ema::wilder_moving_average;
use crate::error::{check_period, Result};
use crate::price::price_diff;
use crate::Indicator;
use serde::{Deserialize, Serialize};
use taseries_core::Ohlcv;

/// Relative Strength Index (RSI).
///
/// Gains and losses of the close-to-close delta are smoothed independently with
/// Wilder's EMA (`alpha = 1 / period`), then `rsi = 100 - 100 / (1 + rs)` with
/// `rs = |avg_gain / avg_loss|`. A zero average loss maps to 100. The first bar
/// has no delta and is NaN.
pub fn relative_strength_index(close: &[f64], period: usize) -> Result<Vec<f64>> {
    check_period("rsi", period)?;

    let delta = price_diff(close, 1);
    // NaN deltas stay NaN so the smoothing seeds on the first real change
    let gains: Vec<f64> = delta
        .iter()
        .map(|d| if d.is_nan() { f64::NAN } else { d.max(0.0) })
        .collect();
    let losses: Vec<f64> = delta
        .iter()
        .map(|d| if d.is_nan() { f64::NAN } else { d.min(0.0) })
        .collect();

    let avg_gain = wilder_moving_average(&gains, period)?;
    let avg_loss = wilder_moving_average(&losses, period)?;

    Ok(avg_gain
        .iter()
        .zip(&avg_loss)
        .map(|(g, l)| rsi_from_averages(*g, *l))
        .collect())
}

fn rsi_from_averages(avg_gain: f64, avg_loss: f64) -> f64 {
    if avg_gain.is_nan() || avg_loss.is_nan() {
        return f64::NAN;
    }
    if avg_loss == 0.0 {
        return 100.0;
    }
    let rs = (avg_gain / avg_loss).abs();
    100.0 - 100.0 / (1.0 + rs)
}

/// Relative Strength Index (RSI).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rsi {
    pub period: usize,
}

impl Rsi {
    pub fn new(period: usize) -> Self {
        Self { period }
    }
}

impl Default for Rsi {
    fn default() -> Self {
        Self::new(14)
    }
}

impl Indicator for Rsi {
    type Output = Vec<f64>;

    fn name(&self) -> &'static str {
        "rsi"
    }

    fn lookback(&self) -> usize {
        1
    }

    fn compute(&self, bars: &Ohlcv) -> Result<Vec<f64>> {
        relative_strength_index(&bars.close, self.period)
    }
}
