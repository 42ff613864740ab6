use crate::error::{check_aligned, Result};
use crate::window::cumulative_sum;
use crate::Indicator;
use serde::{Deserialize, Serialize};
use taseries_core::Ohlcv;

/// Accumulation/Distribution line.
///
/// Cumulative sum of the money flow multiplier
/// `((close - low) - (high - close)) / (high - low)` times volume. A flat bar
/// (`high == low`) contributes zero.
pub fn accumulation_distribution(
    close: &[f64],
    low: &[f64],
    high: &[f64],
    volume: &[f64],
) -> Result<Vec<f64>> {
    let len = check_aligned(&[
        ("close", close),
        ("low", low),
        ("high", high),
        ("volume", volume),
    ])?;

    let flow: Vec<f64> = (0..len)
        .map(|i| {
            let range = high[i] - low[i];
            if range == 0.0 {
                return 0.0;
            }
            let multiplier = ((close[i] - low[i]) - (high[i] - close[i])) / range;
            multiplier * volume[i]
        })
        .collect();
    Ok(cumulative_sum(&flow))
}

/// Accumulation/Distribution line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AccumulationDistribution;

impl Indicator for AccumulationDistribution {
    type Output = Vec<f64>;

    fn name(&self) -> &'static str {
        "accumulation_distribution"
    }

    fn lookback(&self) -> usize {
        0
    }

    fn compute(&self, bars: &Ohlcv) -> Result<Vec<f64>> {
        accumulation_distribution(&bars.close, &bars.low, &bars.high, &bars.volume)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::{assert_series, flat_bars};

    #[test]
    fn test_ad_accumulates() {
        let high = [10.0, 12.0, 11.0];
        let low = [8.0, 10.0, 9.0];
        let close = [10.0, 10.0, 10.5];
        let volume = [100.0, 200.0, 400.0];
        let out = accumulation_distribution(&close, &low, &high, &volume).unwrap();
        // multipliers [1, -1, 0.5]
        assert_series(&out, &[100.0, -100.0, 100.0]);
    }

    #[test]
    fn test_ad_flat_bar_contributes_zero() {
        let high = [10.0, 5.0, 12.0];
        let low = [8.0, 5.0, 10.0];
        let close = [9.0, 5.0, 12.0];
        let out = accumulation_distribution(&close, &low, &high, &[10.0, 10.0, 10.0]).unwrap();
        assert_series(&out, &[0.0, 0.0, 10.0]);

        let out = AccumulationDistribution.compute(&flat_bars(5, 3.0)).unwrap();
        assert!(out.iter().all(|v| *v == 0.0));
    }
}
