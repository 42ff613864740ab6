use crate::error::{check_period, Result};
use crate::Indicator;
use serde::{Deserialize, Serialize};
use taseries_core::{Ohlcv, PriceField};

/// Natural logarithm of each value; non-positive volume is NaN.
pub fn volume_log(volume: &[f64]) -> Vec<f64> {
    volume
        .iter()
        .map(|v| if *v > 0.0 { v.ln() } else { f64::NAN })
        .collect()
}

/// Fractional change between consecutive points: `(x[i] - x[i-1]) / x[i-1]`.
pub fn rate_of_change(series: &[f64]) -> Vec<f64> {
    roc(series, 1)
}

/// Fractional change over `periods` points. A zero base is NaN.
pub fn rate_of_change_over(series: &[f64], periods: usize) -> Result<Vec<f64>> {
    check_period("roc", periods)?;
    Ok(roc(series, periods))
}

fn roc(series: &[f64], periods: usize) -> Vec<f64> {
    (0..series.len())
        .map(|i| {
            if i < periods {
                return f64::NAN;
            }
            let base = series[i - periods];
            if base == 0.0 {
                f64::NAN
            } else {
                (series[i] - base) / base
            }
        })
        .collect()
}

/// Log volume.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct VolumeLog;

impl Indicator for VolumeLog {
    type Output = Vec<f64>;

    fn name(&self) -> &'static str {
        "volume_log"
    }

    fn lookback(&self) -> usize {
        0
    }

    fn compute(&self, bars: &Ohlcv) -> Result<Vec<f64>> {
        Ok(volume_log(&bars.volume))
    }
}

/// Rate of change of volume (by default) or any price field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RateOfChange {
    pub periods: usize,
    pub source: PriceField,
}

impl Default for RateOfChange {
    fn default() -> Self {
        Self {
            periods: 1,
            source: PriceField::Volume,
        }
    }
}

impl Indicator for RateOfChange {
    type Output = Vec<f64>;

    fn name(&self) -> &'static str {
        "roc"
    }

    fn lookback(&self) -> usize {
        self.periods
    }

    fn compute(&self, bars: &Ohlcv) -> Result<Vec<f64>> {
        rate_of_change_over(bars.field(self.source), self.periods)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::assert_series;

    const NAN: f64 = f64::NAN;

    #[test]
    fn test_volume_log() {
        let out = volume_log(&[1.0, std::f64::consts::E, 0.0, -5.0]);
        assert_series(&out, &[0.0, 1.0, NAN, NAN]);
    }

    #[test]
    fn test_rate_of_change() {
        let out = rate_of_change(&[100.0, 110.0, 99.0, 0.0, 5.0]);
        assert_series(&out, &[NAN, 0.1, -0.1, -1.0, NAN]);
    }

    #[test]
    fn test_rate_of_change_over_periods() {
        let out = rate_of_change_over(&[50.0, 60.0, 75.0], 2).unwrap();
        assert_series(&out, &[NAN, NAN, 0.5]);
        assert!(rate_of_change_over(&[1.0], 0).is_err());
    }
}
