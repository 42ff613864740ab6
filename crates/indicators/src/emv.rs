use crate::error::{check_aligned, check_finite, check_period, IndicatorError, Result};
use crate::sma::simple_moving_average;
use crate::Indicator;
use serde::{Deserialize, Serialize};
use taseries_core::Ohlcv;

/// Ease of Movement.
///
/// Midpoint move divided by the box ratio `(volume / scale) / (high - low)`,
/// smoothed by a trailing SMA over `period`. A bar with zero volume or a flat
/// range contributes 0. The first bar has no previous midpoint, so output
/// starts at index `period`.
pub fn ease_of_movement(
    high: &[f64],
    low: &[f64],
    volume: &[f64],
    period: usize,
    scale: f64,
) -> Result<Vec<f64>> {
    check_period("emv", period)?;
    check_finite("emv", "scale", scale)?;
    if scale <= 0.0 {
        return Err(IndicatorError::InvalidParameter {
            indicator: "emv",
            reason: format!("scale must be positive, got {scale}"),
        });
    }
    let len = check_aligned(&[("high", high), ("low", low), ("volume", volume)])?;

    let mut raw = vec![f64::NAN; len];
    for i in 1..len {
        let distance = (high[i] + low[i]) / 2.0 - (high[i - 1] + low[i - 1]) / 2.0;
        let range = high[i] - low[i];
        raw[i] = if range == 0.0 || volume[i] == 0.0 {
            0.0
        } else {
            let box_ratio = (volume[i] / scale) / range;
            distance / box_ratio
        };
    }

    simple_moving_average(&raw, period)
}

/// Ease of Movement (EMV).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EaseOfMovement {
    pub period: usize,
    pub scale: f64,
}

impl EaseOfMovement {
    pub fn new(period: usize, scale: f64) -> Self {
        Self { period, scale }
    }
}

impl Default for EaseOfMovement {
    fn default() -> Self {
        Self::new(14, 1e6)
    }
}

impl Indicator for EaseOfMovement {
    type Output = Vec<f64>;

    fn name(&self) -> &'static str {
        "emv"
    }

    fn lookback(&self) -> usize {
        self.period
    }

    fn compute(&self, bars: &Ohlcv) -> Result<Vec<f64>> {
        ease_of_movement(&bars.high, &bars.low, &bars.volume, self.period, self.scale)
    }
}
