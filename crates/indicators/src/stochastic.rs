use crate::error::{check_aligned, check_period, Result};
use crate::window::{rolling_max, rolling_min};
use crate::Indicator;
use serde::{Deserialize, Serialize};
use taseries_core::Ohlcv;

/// Value reported when the window's high-low range is flat.
const FLAT_RANGE_VALUE: f64 = 50.0;

/// Stochastic Oscillator (%K).
///
/// %K = (close - lowest low) / (highest high - lowest low) * 100 over `period`.
/// A flat range reports 50.
pub fn stochastic_oscillator(
    close: &[f64],
    high: &[f64],
    low: &[f64],
    period: usize,
) -> Result<Vec<f64>> {
    check_period("stochastic", period)?;
    check_aligned(&[("close", close), ("high", high), ("low", low)])?;

    let highest = rolling_max(high, period);
    let lowest = rolling_min(low, period);

    Ok(close
        .iter()
        .zip(highest.iter().zip(&lowest))
        .map(|(c, (hh, ll))| {
            let range = hh - ll;
            if range == 0.0 {
                FLAT_RANGE_VALUE
            } else {
                100.0 * (c - ll) / range
            }
        })
        .collect())
}

/// Stochastic Oscillator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Stochastic {
    pub period: usize,
}

impl Stochastic {
    pub fn new(period: usize) -> Self {
        Self { period }
    }
}

impl Default for Stochastic {
    fn default() -> Self {
        Self::new(14)
    }
}

impl Indicator for Stochastic {
    type Output = Vec<f64>;

    fn name(&self) -> &'static str {
        "stochastic"
    }

    fn lookback(&self) -> usize {
        self.period.saturating_sub(1)
    }

    fn compute(&self, bars: &Ohlcv) -> Result<Vec<f64>> {
        stochastic_oscillator(&bars.close, &bars.high, &bars.low, self.period)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::{assert_series, count_nan, flat_bars, sample_bars};

    const NAN: f64 = f64::NAN;

    #[test]
    fn test_stochastic_values() {
        let high = [10.0, 12.0, 11.0, 13.0];
        let low = [8.0, 9.0, 7.0, 10.0];
        let close = [9.0, 11.0, 8.0, 13.0];
        let out = stochastic_oscillator(&close, &high, &low, 3).unwrap();
        // index 2: range [7, 12], close 8 -> 20; index 3: range [7, 13], close 13 -> 100
        assert_series(&out, &[NAN, NAN, 20.0, 100.0]);
    }

    #[test]
    fn test_stochastic_flat_range() {
        let out = Stochastic::new(5).compute(&flat_bars(10, 20.0)).unwrap();
        assert_eq!(count_nan(&out), 4);
        assert!(out[4..].iter().all(|v| *v == FLAT_RANGE_VALUE));
    }

    #[test]
    fn test_stochastic_bounded() {
        let stoch = Stochastic::default();
        let out = stoch.compute(&sample_bars(90)).unwrap();
        assert_eq!(count_nan(&out), stoch.lookback());
        assert!(out[13..].iter().all(|v| (0.0..=100.0).contains(v)));
    }
}
