use crate::ema::exponential_moving_average;
use crate::error::{check_period, IndicatorError, Result};
use crate::output::{IntoLines, NamedSeries};
use crate::Indicator;
use serde::{Deserialize, Serialize};
use taseries_core::Ohlcv;

/// MACD output with all three components.
#[derive(Debug, Clone, PartialEq)]
pub struct MacdOutput {
    pub macd: Vec<f64>,
    pub signal: Vec<f64>,
    pub histogram: Vec<f64>,
}

impl IntoLines for MacdOutput {
    fn into_lines(self) -> Vec<NamedSeries> {
        vec![
            NamedSeries::new("macd", self.macd),
            NamedSeries::new("signal", self.signal),
            NamedSeries::new("histogram", self.histogram),
        ]
    }
}

/// MACD (Moving Average Convergence Divergence).
///
/// - MACD line = EMA(close, fast) - EMA(close, slow)
/// - Signal = EMA(MACD line, signal)
/// - Histogram = MACD line - signal
pub fn macd(
    close: &[f64],
    fast_period: usize,
    slow_period: usize,
    signal_period: usize,
) -> Result<MacdOutput> {
    check_period("macd", fast_period)?;
    check_period("macd", slow_period)?;
    check_period("macd", signal_period)?;
    if fast_period >= slow_period {
        return Err(IndicatorError::InvalidParameter {
            indicator: "macd",
            reason: format!(
                "fast period ({fast_period}) must be less than slow period ({slow_period})"
            ),
        });
    }

    let fast = exponential_moving_average(close, fast_period)?;
    let slow = exponential_moving_average(close, slow_period)?;
    let line: Vec<f64> = fast.iter().zip(&slow).map(|(f, s)| f - s).collect();
    let signal = exponential_moving_average(&line, signal_period)?;
    let histogram = line.iter().zip(&signal).map(|(m, s)| m - s).collect();

    Ok(MacdOutput {
        macd: line,
        signal,
        histogram,
    })
}

/// MACD indicator parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Macd {
    pub fast_period: usize,
    pub slow_period: usize,
    pub signal_period: usize,
}

impl Macd {
    pub fn new(fast_period: usize, slow_period: usize, signal_period: usize) -> Self {
        Self {
            fast_period,
            slow_period,
            signal_period,
        }
    }
}

impl Default for Macd {
    /// Standard MACD (12, 26, 9).
    fn default() -> Self {
        Self::new(12, 26, 9)
    }
}

impl Indicator for Macd {
    type Output = MacdOutput;

    fn name(&self) -> &'static str {
        "macd"
    }

    fn lookback(&self) -> usize {
        0
    }

    fn compute(&self, bars: &Ohlcv) -> Result<MacdOutput> {
        macd(
            &bars.close,
            self.fast_period,
            self.slow_period,
            self.signal_period,
        )
    }
}
