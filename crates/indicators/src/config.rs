//! Serde-configurable indicator selection.
//!
//! ```toml
//! [[indicators]]
//! kind = "rsi"
//! period = 14
//!
//! [[indicators]]
//! kind = "bollinger_bands"
//! period = 20
//! num_std = 2.0
//! ```

use crate::error::Result;
use crate::output::{IndicatorOutput, IntoLines};
use crate::{
    AccumulationDistribution, Atr, BollingerBands, Cci, EaseOfMovement, Ema, Indicator, Macd, Mfi,
    Obv, RateOfChange, Rsi, Sma, Stochastic, TrueRange, TypicalPrice, VolumeLog, Vortex,
};
use serde::{Deserialize, Serialize};
use taseries_core::Ohlcv;
use tracing::{debug, warn};

/// One configured indicator. Omitted parameters take the indicator's defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IndicatorSpec {
    Sma(Sma),
    Ema(Ema),
    BollingerBands(BollingerBands),
    TrueRange,
    Atr(Atr),
    Vortex(Vortex),
    Cci(Cci),
    Rsi(Rsi),
    Macd(Macd),
    Stochastic(Stochastic),
    Mfi(Mfi),
    Obv(Obv),
    AccumulationDistribution,
    EaseOfMovement(EaseOfMovement),
    VolumeLog,
    RateOfChange(RateOfChange),
    TypicalPrice,
}

impl IndicatorSpec {
    /// Output name with the parameters that distinguish two instances, e.g. `sma_10`.
    pub fn label(&self) -> String {
        match self {
            IndicatorSpec::Sma(i) => format!("sma_{}_{}", i.source.as_str(), i.period),
            IndicatorSpec::Ema(i) => format!("ema_{}_{}", i.source.as_str(), i.period),
            IndicatorSpec::BollingerBands(i) => format!("bollinger_bands_{}_{}", i.period, i.num_std),
            IndicatorSpec::TrueRange => "true_range".to_string(),
            IndicatorSpec::Atr(i) => format!("atr_{}", i.period),
            IndicatorSpec::Vortex(i) => format!("vortex_{}", i.period),
            IndicatorSpec::Cci(i) => format!("cci_{}", i.period),
            IndicatorSpec::Rsi(i) => format!("rsi_{}", i.period),
            IndicatorSpec::Macd(i) => {
                format!("macd_{}_{}_{}", i.fast_period, i.slow_period, i.signal_period)
            }
            IndicatorSpec::Stochastic(i) => format!("stochastic_{}", i.period),
            IndicatorSpec::Mfi(i) => format!("mfi_{}", i.period),
            IndicatorSpec::Obv(_) => "obv".to_string(),
            IndicatorSpec::AccumulationDistribution => "accumulation_distribution".to_string(),
            IndicatorSpec::EaseOfMovement(i) => format!("emv_{}", i.period),
            IndicatorSpec::VolumeLog => "volume_log".to_string(),
            IndicatorSpec::RateOfChange(i) => format!("roc_{}_{}", i.source.as_str(), i.periods),
            IndicatorSpec::TypicalPrice => "typical_price".to_string(),
        }
    }

    pub fn compute(&self, bars: &Ohlcv) -> Result<IndicatorOutput> {
        let label = self.label();
        match self {
            IndicatorSpec::Sma(i) => run(i, bars, label),
            IndicatorSpec::Ema(i) => run(i, bars, label),
            IndicatorSpec::BollingerBands(i) => run(i, bars, label),
            IndicatorSpec::TrueRange => run(&TrueRange, bars, label),
            IndicatorSpec::Atr(i) => run(i, bars, label),
            IndicatorSpec::Vortex(i) => run(i, bars, label),
            IndicatorSpec::Cci(i) => run(i, bars, label),
            IndicatorSpec::Rsi(i) => run(i, bars, label),
            IndicatorSpec::Macd(i) => run(i, bars, label),
            IndicatorSpec::Stochastic(i) => run(i, bars, label),
            IndicatorSpec::Mfi(i) => run(i, bars, label),
            IndicatorSpec::Obv(i) => run(i, bars, label),
            IndicatorSpec::AccumulationDistribution => run(&AccumulationDistribution, bars, label),
            IndicatorSpec::EaseOfMovement(i) => run(i, bars, label),
            IndicatorSpec::VolumeLog => run(&VolumeLog, bars, label),
            IndicatorSpec::RateOfChange(i) => run(i, bars, label),
            IndicatorSpec::TypicalPrice => run(&TypicalPrice, bars, label),
        }
    }
}

fn run<I>(indicator: &I, bars: &Ohlcv, label: String) -> Result<IndicatorOutput>
where
    I: Indicator,
    I::Output: IntoLines,
{
    let lookback = indicator.lookback();
    if bars.len() <= lookback && !bars.is_empty() {
        warn!(
            indicator = indicator.name(),
            len = bars.len(),
            lookback,
            "series shorter than lookback, output is entirely undefined"
        );
    }
    debug!(indicator = indicator.name(), len = bars.len(), lookback, "computing indicator");

    let lines = indicator.compute(bars)?.into_lines();
    Ok(IndicatorOutput { name: label, lines })
}

/// A list of indicators to compute over the same bar set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IndicatorConfig {
    #[serde(default)]
    pub indicators: Vec<IndicatorSpec>,
}

impl IndicatorConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// A common chart setup: SMA(10), Bollinger(20, 2), RSI(14) and MACD(12, 26, 9).
    pub fn standard() -> Self {
        Self {
            indicators: vec![
                IndicatorSpec::Sma(Sma::default()),
                IndicatorSpec::BollingerBands(BollingerBands::default()),
                IndicatorSpec::Rsi(Rsi::default()),
                IndicatorSpec::Macd(Macd::default()),
            ],
        }
    }

    /// Compute every configured indicator, in order, failing on the first error.
    pub fn compute_all(&self, bars: &Ohlcv) -> Result<Vec<IndicatorOutput>> {
        bars.check_aligned()?;
        debug!(count = self.indicators.len(), len = bars.len(), "computing indicator set");
        self.indicators.iter().map(|spec| spec.compute(bars)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::{assert_series, sample_bars};
    use crate::IndicatorError;
    use taseries_core::PriceField;

    #[test]
    fn test_parse_toml_with_defaults() {
        let config = IndicatorConfig::from_toml_str(
            r#"
            [[indicators]]
            kind = "rsi"

            [[indicators]]
            kind = "sma"
            period = 5
            source = "high"

            [[indicators]]
            kind = "macd"
            signal_period = 5

            [[indicators]]
            kind = "true_range"
            "#,
        )
        .unwrap();

        assert_eq!(
            config.indicators,
            vec![
                IndicatorSpec::Rsi(Rsi::new(14)),
                IndicatorSpec::Sma(Sma {
                    period: 5,
                    source: PriceField::High,
                }),
                IndicatorSpec::Macd(Macd::new(12, 26, 5)),
                IndicatorSpec::TrueRange,
            ]
        );
    }

    #[test]
    fn test_empty_config() {
        let config = IndicatorConfig::from_toml_str("").unwrap();
        assert!(config.indicators.is_empty());
        assert!(config.compute_all(&sample_bars(10)).unwrap().is_empty());
    }

    #[test]
    fn test_unknown_kind_is_config_error() {
        let err = IndicatorConfig::from_toml_str(
            r#"
            [[indicators]]
            kind = "ichimoku"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, IndicatorError::Config(_)));
    }

    #[test]
    fn test_compute_all_matches_direct_calls() {
        let bars = sample_bars(80);
        let outputs = IndicatorConfig::standard().compute_all(&bars).unwrap();
        assert_eq!(outputs.len(), 4);

        assert_eq!(outputs[0].name, "sma_close_10");
        let sma = crate::simple_moving_average(&bars.close, 10).unwrap();
        assert_series(outputs[0].line("value").unwrap(), &sma);

        let bb = &outputs[1];
        assert_eq!(bb.lines.len(), 3);
        assert!(bb.line("upper").is_some() && bb.line("lower").is_some());

        let macd = &outputs[3];
        assert_eq!(macd.name, "macd_12_26_9");
        let direct = crate::macd(&bars.close, 12, 26, 9).unwrap();
        assert_series(macd.line("signal").unwrap(), &direct.signal);
    }

    #[test]
    fn test_compute_all_rejects_misaligned_bars() {
        let mut bars = sample_bars(10);
        bars.volume.pop();
        assert!(IndicatorConfig::standard().compute_all(&bars).is_err());
    }

    #[test]
    fn test_invalid_parameters_surface_from_compute() {
        let spec = IndicatorSpec::Macd(Macd::new(26, 12, 9));
        assert!(matches!(
            spec.compute(&sample_bars(30)),
            Err(IndicatorError::InvalidParameter { indicator: "macd", .. })
        ));
    }

    #[test]
    fn test_compute_from_decimal_bars() {
        use chrono::{Duration, TimeZone, Utc};
        use rust_decimal::Decimal;
        use rust_decimal_macros::dec;
        use taseries_core::Bar;

        let start = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
        let bars: Vec<Bar> = (0..5)
            .map(|i| {
                let close = dec!(10) + Decimal::from(i);
                Bar {
                    instrument: "BTCUSD".to_string(),
                    timestamp: start + Duration::days(i),
                    open: close,
                    high: close,
                    low: close,
                    close,
                    volume: dec!(100),
                }
            })
            .collect();
        let set = Ohlcv::from_bars(&bars).unwrap();

        let config = IndicatorConfig::from_toml_str(
            r#"
            [[indicators]]
            kind = "sma"
            period = 3

            [[indicators]]
            kind = "obv"
            initial = 0.0
            "#,
        )
        .unwrap();
        let outputs = config.compute_all(&set).unwrap();
        let nan = f64::NAN;
        assert_series(
            outputs[0].line("value").unwrap(),
            &[nan, nan, 11.0, 12.0, 13.0],
        );
        assert_series(
            outputs[1].line("value").unwrap(),
            &[0.0, 100.0, 200.0, 300.0, 400.0],
        );
    }

    #[test]
    fn test_round_trip_through_toml() {
        let config = IndicatorConfig {
            indicators: vec![
                IndicatorSpec::Vortex(Vortex::new(7)),
                IndicatorSpec::VolumeLog,
                IndicatorSpec::Obv(Obv::new(0.0)),
            ],
        };
        let text = toml::to_string(&config).unwrap();
        assert_eq!(IndicatorConfig::from_toml_str(&text).unwrap(), config);
    }
}
