//! Batch technical indicators over aligned OHLCV series.
//!
//! Every function maps whole input series to output series of the same length.
//! Entries without enough history are `f64::NAN`; errors are reserved for
//! caller contract violations such as mismatched lengths or a zero period.

pub mod accumulation;
pub mod atr;
pub mod bollinger;
pub mod cci;
pub mod config;
pub mod ema;
pub mod emv;
pub mod error;
pub mod macd;
pub mod mfi;
pub mod obv;
pub mod output;
pub mod price;
pub mod rsi;
pub mod sma;
pub mod stochastic;
pub mod volume;
pub mod vortex;
pub mod window;

pub use accumulation::{accumulation_distribution, AccumulationDistribution};
pub use atr::{average_true_range, true_range, Atr, TrueRange};
pub use bollinger::{bollinger_bands, bollinger_bands_with, BollingerBands, BollingerOutput};
pub use cci::{commodity_channel_index, Cci};
pub use config::{IndicatorConfig, IndicatorSpec};
pub use ema::{
    exponential_moving_average, exponential_moving_average_alpha, wilder_moving_average, Ema,
};
pub use emv::{ease_of_movement, EaseOfMovement};
pub use error::{IndicatorError, Result};
pub use macd::{macd, Macd, MacdOutput};
pub use mfi::{money_flow_index, Mfi};
pub use obv::{on_balance_volume, Obv};
pub use output::{IndicatorOutput, IntoLines, NamedSeries};
pub use price::{price_diff, signed_difference, typical_price, TypicalPrice};
pub use rsi::{relative_strength_index, Rsi};
pub use sma::{simple_moving_average, Sma};
pub use stochastic::{stochastic_oscillator, Stochastic};
pub use volume::{rate_of_change, rate_of_change_over, volume_log, RateOfChange, VolumeLog};
pub use vortex::{vortex, Vortex, VortexOutput};

use taseries_core::Ohlcv;

/// An indicator with fixed parameters, computed over a whole bar set at once.
pub trait Indicator: Send + Sync {
    type Output;

    /// Short machine name, e.g. `"rsi"`.
    fn name(&self) -> &'static str;

    /// Index of the first defined output value.
    fn lookback(&self) -> usize;

    /// Compute the indicator over every bar in `bars`.
    fn compute(&self, bars: &Ohlcv) -> Result<Self::Output>;
}
