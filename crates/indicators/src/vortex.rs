use crate::atr::true_range;
use crate::error::{check_aligned, check_period, Result};
use crate::output::{IntoLines, NamedSeries};
use crate::window::rolling_sum;
use crate::Indicator;
use serde::{Deserialize, Serialize};
use taseries_core::Ohlcv;

/// Vortex indicator output. Crossovers of the two lines are left to the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct VortexOutput {
    pub vi_up: Vec<f64>,
    pub vi_down: Vec<f64>,
}

impl IntoLines for VortexOutput {
    fn into_lines(self) -> Vec<NamedSeries> {
        vec![
            NamedSeries::new("vi_up", self.vi_up),
            NamedSeries::new("vi_down", self.vi_down),
        ]
    }
}

/// Vortex indicator.
///
/// VM+ = |high[i] - low[i-1]| and VM- = |low[i] - high[i-1]|, each summed over
/// `period` and divided by the summed true range. The first movement is
/// undefined, so output starts at index `period`.
pub fn vortex(high: &[f64], low: &[f64], close: &[f64], period: usize) -> Result<VortexOutput> {
    check_period("vortex", period)?;
    let len = check_aligned(&[("high", high), ("low", low), ("close", close)])?;

    let mut vm_up = vec![f64::NAN; len];
    let mut vm_down = vec![f64::NAN; len];
    for i in 1..len {
        vm_up[i] = (high[i] - low[i - 1]).abs();
        vm_down[i] = (low[i] - high[i - 1]).abs();
    }

    let tr_sum = rolling_sum(&true_range(high, low, close)?, period);
    let up_sum = rolling_sum(&vm_up, period);
    let down_sum = rolling_sum(&vm_down, period);

    Ok(VortexOutput {
        vi_up: normalize(&up_sum, &tr_sum),
        vi_down: normalize(&down_sum, &tr_sum),
    })
}

/// Zero summed range leaves nothing to normalize by: NaN.
fn normalize(movement: &[f64], range: &[f64]) -> Vec<f64> {
    movement
        .iter()
        .zip(range)
        .map(|(m, r)| if *r == 0.0 { f64::NAN } else { m / r })
        .collect()
}

/// Vortex indicator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vortex {
    pub period: usize,
}

impl Vortex {
    pub fn new(period: usize) -> Self {
        Self { period }
    }
}

impl Default for Vortex {
    fn default() -> Self {
        Self::new(14)
    }
}

impl Indicator for Vortex {
    type Output = VortexOutput;

    fn name(&self) -> &'static str {
        "vortex"
    }

    fn lookback(&self) -> usize {
        self.period
    }

    fn compute(&self, bars: &Ohlcv) -> Result<VortexOutput> {
        vortex(&bars.high, &bars.low, &bars.close, self.period)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::{assert_series, count_nan, flat_bars, sample_bars};

    const NAN: f64 = f64::NAN;

    #[test]
    fn test_vortex_small_window() {
        let high = [10.0, 12.0, 11.0];
        let low = [8.0, 9.0, 9.5];
        let close = [9.0, 11.0, 10.0];
        let out = vortex(&high, &low, &close, 2).unwrap();
        // VM+ = [_, 4, 2], VM- = [_, 1, 2.5], TR = [2, 3, 1.5]
        assert_series(&out.vi_up, &[NAN, NAN, 6.0 / 4.5]);
        assert_series(&out.vi_down, &[NAN, NAN, 3.5 / 4.5]);
    }

    #[test]
    fn test_vortex_lookback() {
        let bars = sample_bars(50);
        let vx = Vortex::default();
        let out = vx.compute(&bars).unwrap();
        assert_eq!(count_nan(&out.vi_up), vx.lookback());
        assert_eq!(count_nan(&out.vi_down), vx.lookback());
        assert!(out.vi_up[14..].iter().all(|v| *v > 0.0));
    }

    #[test]
    fn test_vortex_flat_market_is_undefined() {
        let out = Vortex::new(3).compute(&flat_bars(10, 1.0)).unwrap();
        assert!(out.vi_up.iter().all(|v| v.is_nan()));
    }
}
