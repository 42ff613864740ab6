use crate::error::{check_aligned, Result};
use crate::price::signed_difference;
use crate::window::cumulative_sum;
use crate::Indicator;
use serde::{Deserialize, Serialize};
use taseries_core::Ohlcv;

/// On-Balance Volume.
///
/// Running sum of `sign(close[i] - close[i-1]) * volume[i]`, where the first
/// bar's sign is `initial`. A NaN `initial` leaves the first value undefined and
/// accumulation starts at the second bar.
pub fn on_balance_volume(close: &[f64], volume: &[f64], initial: f64) -> Result<Vec<f64>> {
    check_aligned(&[("close", close), ("volume", volume)])?;

    let signed: Vec<f64> = signed_difference(close, initial)
        .iter()
        .zip(volume)
        .map(|(s, v)| s * v)
        .collect();
    Ok(cumulative_sum(&signed))
}

/// On-Balance Volume (OBV).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Obv {
    /// Sign used for the first bar. NaN (the default) leaves it undefined.
    pub initial: f64,
}

impl Obv {
    pub fn new(initial: f64) -> Self {
        Self { initial }
    }
}

impl Default for Obv {
    fn default() -> Self {
        Self::new(f64::NAN)
    }
}

impl Indicator for Obv {
    type Output = Vec<f64>;

    fn name(&self) -> &'static str {
        "obv"
    }

    fn lookback(&self) -> usize {
        usize::from(self.initial.is_nan())
    }

    fn compute(&self, bars: &Ohlcv) -> Result<Vec<f64>> {
        on_balance_volume(&bars.close, &bars.volume, self.initial)
    }
}
