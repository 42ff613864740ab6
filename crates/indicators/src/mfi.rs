use crate::error::{check_aligned, check_period, Result};
use crate::price::typical_price;
use crate::window::rolling_sum;
use crate::Indicator;
use serde::{Deserialize, Serialize};
use taseries_core::Ohlcv;

/// Money Flow Index (MFI).
///
/// Raw money flow (`typical_price * volume`) is split into positive and negative
/// flow by the sign of the typical-price change; an unchanged or undefined change
/// counts toward neither. `MFI = 100 - 100 / (1 + pos_sum / neg_sum)` over
/// `period`, and a zero negative sum maps to 100.
pub fn money_flow_index(
    volume: &[f64],
    high: &[f64],
    low: &[f64],
    close: &[f64],
    period: usize,
) -> Result<Vec<f64>> {
    check_period("mfi", period)?;
    check_aligned(&[
        ("volume", volume),
        ("high", high),
        ("low", low),
        ("close", close),
    ])?;

    let tp = typical_price(high, low, close)?;
    let mut positive = vec![0.0; tp.len()];
    let mut negative = vec![0.0; tp.len()];
    for i in 1..tp.len() {
        let flow = tp[i] * volume[i];
        let delta = tp[i] - tp[i - 1];
        if delta > 0.0 {
            positive[i] = flow;
        } else if delta < 0.0 {
            negative[i] = flow;
        }
    }

    let pos_sum = rolling_sum(&positive, period);
    let neg_sum = rolling_sum(&negative, period);

    Ok(pos_sum
        .iter()
        .zip(&neg_sum)
        .map(|(p, n)| {
            if p.is_nan() || n.is_nan() {
                f64::NAN
            } else if *n == 0.0 {
                100.0
            } else {
                100.0 - 100.0 / (1.0 + p / n)
            }
        })
        .collect())
}

/// Money Flow Index.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Mfi {
    pub period: usize,
}

impl Mfi {
    pub fn new(period: usize) -> Self {
        Self { period }
    }
}

impl Default for Mfi {
    fn default() -> Self {
        Self::new(14)
    }
}

impl Indicator for Mfi {
    type Output = Vec<f64>;

    fn name(&self) -> &'static str {
        "mfi"
    }

    fn lookback(&self) -> usize {
        self.period.saturating_sub(1)
    }

    fn compute(&self, bars: &Ohlcv) -> Result<Vec<f64>> {
        money_flow_index(&bars.volume, &bars.high, &bars.low, &bars.close, self.period)
    }
}
