use crate::error::{check_period, IndicatorError, Result};
use crate::Indicator;
use serde::{Deserialize, Serialize};
use taseries_core::{Ohlcv, PriceField};

/// Exponential Moving Average with the conventional multiplier `2 / (period + 1)`.
///
/// Defined from the first value: `ema[0] = series[0]`.
pub fn exponential_moving_average(series: &[f64], period: usize) -> Result<Vec<f64>> {
    check_period("ema", period)?;
    Ok(ewm(series, 2.0 / (period as f64 + 1.0)))
}

/// Exponential Moving Average with an explicit smoothing factor in `(0, 1]`.
pub fn exponential_moving_average_alpha(series: &[f64], alpha: f64) -> Result<Vec<f64>> {
    if !(alpha > 0.0 && alpha <= 1.0) {
        return Err(IndicatorError::InvalidParameter {
            indicator: "ema",
            reason: format!("alpha must be in (0, 1], got {alpha}"),
        });
    }
    Ok(ewm(series, alpha))
}

/// Wilder's smoothing: an EMA with `alpha = 1 / period`.
pub fn wilder_moving_average(series: &[f64], period: usize) -> Result<Vec<f64>> {
    check_period("wilder", period)?;
    Ok(ewm(series, 1.0 / period as f64))
}

/// Recursive weighting `alpha * x + (1 - alpha) * prev`.
///
/// Leading NaN stays NaN until the first finite value seeds the recursion. A
/// NaN after that carries the previous value forward.
pub(crate) fn ewm(series: &[f64], alpha: f64) -> Vec<f64> {
    let mut out = Vec::with_capacity(series.len());
    let mut current: Option<f64> = None;
    for &value in series {
        current = match (current, value.is_nan()) {
            (None, true) => None,
            (None, false) => Some(value),
            (Some(prev), true) => Some(prev),
            (Some(prev), false) => Some(alpha * value + (1.0 - alpha) * prev),
        };
        out.push(current.unwrap_or(f64::NAN));
    }
    out
}

/// Exponential Moving Average (EMA).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Ema {
    pub period: usize,
    pub source: PriceField,
}

impl Ema {
    pub fn new(period: usize) -> Self {
        Self {
            period,
            source: PriceField::Close,
        }
    }
}

impl Default for Ema {
    fn default() -> Self {
        Self::new(10)
    }
}

impl Indicator for Ema {
    type Output = Vec<f64>;

    fn name(&self) -> &'static str {
        "ema"
    }

    fn lookback(&self) -> usize {
        0
    }

    fn compute(&self, bars: &Ohlcv) -> Result<Vec<f64>> {
        exponential_moving_average(bars.field(self.source), self.period)
    }
}
