use crate::error::{check_finite, check_period, IndicatorError, Result};
use crate::price::typical_price;
use crate::window::{rolling_mean, rolling_mean_abs_dev};
use crate::Indicator;
use serde::{Deserialize, Serialize};
use taseries_core::Ohlcv;

/// Commodity Channel Index.
///
/// `(tp - mean(tp)) / (constant * mad(tp))` over typical price `tp`. The mean
/// absolute deviation uses relaxed minimum periods and is defined from the first
/// bar, while the mean keeps the usual `period - 1` warm-up. A zero deviation
/// means price sits on its mean, so the index is 0 there.
pub fn commodity_channel_index(
    high: &[f64],
    low: &[f64],
    close: &[f64],
    period: usize,
    constant: f64,
) -> Result<Vec<f64>> {
    check_period("cci", period)?;
    check_finite("cci", "constant", constant)?;
    if constant == 0.0 {
        return Err(IndicatorError::InvalidParameter {
            indicator: "cci",
            reason: "constant must be non-zero".to_string(),
        });
    }

    let tp = typical_price(high, low, close)?;
    let mean = rolling_mean(&tp, period);
    let mad = rolling_mean_abs_dev(&tp, period);

    Ok(tp
        .iter()
        .zip(&mean)
        .zip(&mad)
        .map(|((p, m), d)| {
            let distance = p - m;
            if *d == 0.0 && distance.is_finite() {
                0.0
            } else {
                distance / (constant * d)
            }
        })
        .collect())
}

/// Commodity Channel Index (CCI).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Cci {
    pub period: usize,
    pub constant: f64,
}

impl Cci {
    pub fn new(period: usize, constant: f64) -> Self {
        Self { period, constant }
    }
}

impl Default for Cci {
    fn default() -> Self {
        Self::new(20, 0.015)
    }
}

impl Indicator for Cci {
    type Output = Vec<f64>;

    fn name(&self) -> &'static str {
        "cci"
    }

    fn lookback(&self) -> usize {
        self.period.saturating_sub(1)
    }

    fn compute(&self, bars: &Ohlcv) -> Result<Vec<f64>> {
        commodity_channel_index(&bars.high, &bars.low, &bars.close, self.period, self.constant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::{assert_series, count_nan, flat_bars, sample_bars};

    const NAN: f64 = f64::NAN;

    #[test]
    fn test_cci_values() {
        // typical price equals close when high == low == close
        let tp = [1.0, 3.0, 5.0, 5.0];
        let out = commodity_channel_index(&tp, &tp, &tp, 3, 0.015).unwrap();
        // index 2: (5 - 3) / (0.015 * 4/3); index 3: (5 - 13/3) / (0.015 * 8/9)
        let expected_2 = 2.0 / (0.015 * 4.0 / 3.0);
        let expected_3 = (5.0 - 13.0 / 3.0) / (0.015 * 8.0 / 9.0);
        assert_series(&out, &[NAN, NAN, expected_2, expected_3]);
    }

    #[test]
    fn test_cci_flat_window_is_zero() {
        let out = Cci::new(5, 0.015).compute(&flat_bars(8, 3.0)).unwrap();
        assert_eq!(count_nan(&out), 4);
        assert!(out[4..].iter().all(|v| *v == 0.0));
    }

    #[test]
    fn test_cci_lookback() {
        let cci = Cci::default();
        let out = cci.compute(&sample_bars(80)).unwrap();
        assert_eq!(count_nan(&out), cci.lookback());
    }

    #[test]
    fn test_cci_rejects_zero_constant() {
        assert!(commodity_channel_index(&[1.0], &[1.0], &[1.0], 1, 0.0).is_err());
    }
}
