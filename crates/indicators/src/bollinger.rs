use crate::error::{check_finite, check_period, Result};
use crate::output::{IntoLines, NamedSeries};
use crate::sma::simple_moving_average;
use crate::window::rolling_std;
use crate::Indicator;
use serde::{Deserialize, Serialize};
use taseries_core::Ohlcv;

/// Bollinger Bands output.
#[derive(Debug, Clone, PartialEq)]
pub struct BollingerOutput {
    pub mid: Vec<f64>,
    pub upper: Vec<f64>,
    pub lower: Vec<f64>,
}

impl IntoLines for BollingerOutput {
    fn into_lines(self) -> Vec<NamedSeries> {
        vec![
            NamedSeries::new("mid", self.mid),
            NamedSeries::new("upper", self.upper),
            NamedSeries::new("lower", self.lower),
        ]
    }
}

/// Standard Bollinger Bands: SMA(period) ± 2 sample standard deviations.
pub fn bollinger_bands(close: &[f64], period: usize) -> Result<BollingerOutput> {
    bollinger_bands_with(close, period, 2.0)
}

/// Bollinger Bands with a custom band width multiplier.
pub fn bollinger_bands_with(close: &[f64], period: usize, num_std: f64) -> Result<BollingerOutput> {
    check_period("bollinger_bands", period)?;
    check_finite("bollinger_bands", "num_std", num_std)?;

    let mid = simple_moving_average(close, period)?;
    let std = rolling_std(close, period);

    let (upper, lower): (Vec<f64>, Vec<f64>) = mid
        .iter()
        .zip(&std)
        .map(|(m, sd)| (m + num_std * sd, m - num_std * sd))
        .unzip();

    Ok(BollingerOutput { mid, upper, lower })
}

/// Bollinger Bands.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BollingerBands {
    pub period: usize,
    pub num_std: f64,
}

impl BollingerBands {
    pub fn new(period: usize, num_std: f64) -> Self {
        Self { period, num_std }
    }
}

impl Default for BollingerBands {
    /// Standard Bollinger Bands (20, 2).
    fn default() -> Self {
        Self::new(20, 2.0)
    }
}

impl Indicator for BollingerBands {
    type Output = BollingerOutput;

    fn name(&self) -> &'static str {
        "bollinger_bands"
    }

    fn lookback(&self) -> usize {
        self.period.saturating_sub(1)
    }

    fn compute(&self, bars: &Ohlcv) -> Result<BollingerOutput> {
        bollinger_bands_with(&bars.close, self.period, self.num_std)
    }
}
