use crate::error::{ensure_len, SeriesError};
use chrono::{DateTime, Utc};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Market Data
// ---------------------------------------------------------------------------

/// A single OHLCV bar.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bar {
    pub instrument: String,
    pub timestamp: DateTime<Utc>,
    pub open: Decimal,
    pub high: Decimal,
    pub low: Decimal,
    pub close: Decimal,
    pub volume: Decimal,
}

/// Selects one of the five parallel series of an [`Ohlcv`] set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceField {
    Open,
    High,
    Low,
    #[default]
    Close,
    Volume,
}

impl PriceField {
    pub fn as_str(&self) -> &'static str {
        match self {
            PriceField::Open => "open",
            PriceField::High => "high",
            PriceField::Low => "low",
            PriceField::Close => "close",
            PriceField::Volume => "volume",
        }
    }
}

// ---------------------------------------------------------------------------
// Aligned series
// ---------------------------------------------------------------------------

/// Five index-aligned series describing one instrument's price history.
///
/// All fields have the same length. The bar invariant
/// `low <= min(open, close) <= max(open, close) <= high` is assumed, not checked.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ohlcv {
    pub open: Vec<f64>,
    pub high: Vec<f64>,
    pub low: Vec<f64>,
    pub close: Vec<f64>,
    pub volume: Vec<f64>,
}

impl Ohlcv {
    /// Build a bar set, rejecting series whose lengths differ from `open`.
    pub fn new(
        open: Vec<f64>,
        high: Vec<f64>,
        low: Vec<f64>,
        close: Vec<f64>,
        volume: Vec<f64>,
    ) -> Result<Self, SeriesError> {
        let len = open.len();
        ensure_len("high", &high, len)?;
        ensure_len("low", &low, len)?;
        ensure_len("close", &close, len)?;
        ensure_len("volume", &volume, len)?;
        Ok(Self {
            open,
            high,
            low,
            close,
            volume,
        })
    }

    /// Convert bars (already sorted by timestamp) into parallel `f64` series.
    pub fn from_bars(bars: &[Bar]) -> Result<Self, SeriesError> {
        let mut set = Self {
            open: Vec::with_capacity(bars.len()),
            high: Vec::with_capacity(bars.len()),
            low: Vec::with_capacity(bars.len()),
            close: Vec::with_capacity(bars.len()),
            volume: Vec::with_capacity(bars.len()),
        };

        for (index, bar) in bars.iter().enumerate() {
            set.open.push(to_f64(bar.open, "open", index)?);
            set.high.push(to_f64(bar.high, "high", index)?);
            set.low.push(to_f64(bar.low, "low", index)?);
            set.close.push(to_f64(bar.close, "close", index)?);
            set.volume.push(to_f64(bar.volume, "volume", index)?);
        }

        tracing::trace!(bars = bars.len(), "converted bars to aligned series");
        Ok(set)
    }

    pub fn len(&self) -> usize {
        self.close.len()
    }

    pub fn is_empty(&self) -> bool {
        self.close.is_empty()
    }

    pub fn field(&self, field: PriceField) -> &[f64] {
        match field {
            PriceField::Open => &self.open,
            PriceField::High => &self.high,
            PriceField::Low => &self.low,
            PriceField::Close => &self.close,
            PriceField::Volume => &self.volume,
        }
    }

    /// Re-check that every series still matches the length of `close`.
    ///
    /// Fields are public, so a set mutated after construction may drift.
    pub fn check_aligned(&self) -> Result<(), SeriesError> {
        let len = self.close.len();
        ensure_len("open", &self.open, len)?;
        ensure_len("high", &self.high, len)?;
        ensure_len("low", &self.low, len)?;
        ensure_len("volume", &self.volume, len)
    }
}

fn to_f64(value: Decimal, field: &'static str, index: usize) -> Result<f64, SeriesError> {
    value
        .to_f64()
        .ok_or(SeriesError::NonRepresentable { field, index })
}
