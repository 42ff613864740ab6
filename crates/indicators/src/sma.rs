use crate::error::{check_period, Result};
use crate::window::rolling_mean;
use crate::Indicator;
use serde::{Deserialize, Serialize};
use taseries_core::{Ohlcv, PriceField};

/// Simple Moving Average: trailing mean of `period` values.
///
/// The first `period - 1` entries are NaN.
pub fn simple_moving_average(series: &[f64], period: usize) -> Result<Vec<f64>> {
    check_period("sma", period)?;
    Ok(rolling_mean(series, period))
}

/// Simple Moving Average (SMA).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sma {
    pub period: usize,
    pub source: PriceField,
}

impl Sma {
    pub fn new(period: usize) -> Self {
        Self {
            period,
            source: PriceField::Close,
        }
    }
}

impl Default for Sma {
    fn default() -> Self {
        Self::new(10)
    }
}

impl Indicator for Sma {
    type Output = Vec<f64>;

    fn name(&self) -> &'static str {
        "sma"
    }

    fn lookback(&self) -> usize {
        self.period.saturating_sub(1)
    }

    fn compute(&self, bars: &Ohlcv) -> Result<Vec<f64>> {
        simple_moving_average(bars.field(self.source), self.period)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::{assert_series, count_nan, sample_bars};

    const NAN: f64 = f64::NAN;

    #[test]
    fn test_sma_basic() {
        let close: Vec<f64> = (1..=10).map(f64::from).collect();
        let out = simple_moving_average(&close, 3).unwrap();
        assert_series(
            &out,
            &[NAN, NAN, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0],
        );
    }

    #[test]
    fn test_sma_constant_series() {
        for c in [0.1, 7.0, -3.25] {
            for period in 1..=6 {
                let out = simple_moving_average(&[c; 6], period).unwrap();
                assert_eq!(count_nan(&out), period - 1);
                for v in &out[period - 1..] {
                    assert!((v - c).abs() < 1e-12);
                }
            }
        }
    }

    #[test]
    fn test_sma_zero_period_rejected() {
        assert!(simple_moving_average(&[1.0], 0).is_err());
    }

    #[test]
    fn test_sma_indicator_uses_source() {
        let bars = sample_bars(30);
        let sma = Sma {
            period: 5,
            source: PriceField::High,
        };
        let out = sma.compute(&bars).unwrap();
        assert_eq!(out.len(), 30);
        assert_eq!(count_nan(&out), sma.lookback());
        let expected: f64 = bars.high[..5].iter().sum::<f64>() / 5.0;
        assert!((out[4] - expected).abs() < 1e-9);
    }
}
