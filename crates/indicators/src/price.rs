use crate::error::{check_aligned, Result};
use crate::window::lagged;
use crate::Indicator;
use serde::{Deserialize, Serialize};
use taseries_core::Ohlcv;

/// `series[i] - series[i - periods]`, NaN for the first `periods` entries.
pub fn price_diff(series: &[f64], periods: usize) -> Vec<f64> {
    series
        .iter()
        .zip(lagged(series, periods))
        .map(|(v, prev)| v - prev)
        .collect()
}

/// Sign (+1, -1 or 0) of the first difference; index 0 is `initial`.
///
/// A NaN on either side of a difference yields NaN.
pub fn signed_difference(series: &[f64], initial: f64) -> Vec<f64> {
    let mut out = Vec::with_capacity(series.len());
    if series.is_empty() {
        return out;
    }
    out.push(initial);
    out.extend(series.windows(2).map(|w| sign(w[1] - w[0])));
    out
}

/// `(high + low + close) / 3`.
pub fn typical_price(high: &[f64], low: &[f64], close: &[f64]) -> Result<Vec<f64>> {
    check_aligned(&[("high", high), ("low", low), ("close", close)])?;
    Ok(high
        .iter()
        .zip(low)
        .zip(close)
        .map(|((h, l), c)| (h + l + c) / 3.0)
        .collect())
}

pub(crate) fn sign(value: f64) -> f64 {
    if value > 0.0 {
        1.0
    } else if value < 0.0 {
        -1.0
    } else if value == 0.0 {
        0.0
    } else {
        f64::NAN
    }
}

/// Typical price of each bar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TypicalPrice;

impl Indicator for TypicalPrice {
    type Output = Vec<f64>;

    fn name(&self) -> &'static str {
        "typical_price"
    }

    fn lookback(&self) -> usize {
        0
    }

    fn compute(&self, bars: &Ohlcv) -> Result<Vec<f64>> {
        typical_price(&bars.high, &bars.low, &bars.close)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::assert_series;

    const NAN: f64 = f64::NAN;

    #[test]
    fn test_price_diff() {
        let series = [10.0, 12.0, 11.0, 15.0];
        assert_series(&price_diff(&series, 1), &[NAN, 2.0, -1.0, 4.0]);
        assert_series(&price_diff(&series, 2), &[NAN, NAN, 1.0, 3.0]);
    }

    #[test]
    fn test_signed_difference_uses_initial() {
        let out = signed_difference(&[10.0, 9.0, 11.0, 11.0], 0.0);
        assert_series(&out, &[0.0, -1.0, 1.0, 0.0]);
        let out = signed_difference(&[10.0, 9.0], NAN);
        assert_series(&out, &[NAN, -1.0]);
        assert!(signed_difference(&[], 1.0).is_empty());
    }

    #[test]
    fn test_typical_price() {
        let out = typical_price(&[12.0, 9.0], &[6.0, 3.0], &[9.0, 6.0]).unwrap();
        assert_series(&out, &[9.0, 6.0]);
    }

    #[test]
    fn test_typical_price_length_mismatch() {
        assert!(typical_price(&[1.0, 2.0], &[1.0], &[1.0, 2.0]).is_err());
    }
}
