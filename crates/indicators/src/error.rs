use taseries_core::SeriesError;

/// Errors returned by indicator computations.
///
/// Insufficient history is not an error: warm-up entries are NaN.
#[derive(Debug, thiserror::Error)]
pub enum IndicatorError {
    #[error(transparent)]
    Series(#[from] SeriesError),
    #[error("{indicator}: period must be > 0, got {period}")]
    InvalidPeriod {
        indicator: &'static str,
        period: usize,
    },
    #[error("{indicator}: {reason}")]
    InvalidParameter {
        indicator: &'static str,
        reason: String,
    },
    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, IndicatorError>;

pub(crate) fn check_period(indicator: &'static str, period: usize) -> Result<()> {
    if period == 0 {
        return Err(IndicatorError::InvalidPeriod { indicator, period });
    }
    Ok(())
}

/// All series must share the length of the first one.
pub(crate) fn check_aligned(series: &[(&'static str, &[f64])]) -> Result<usize> {
    let Some((_, first)) = series.first() else {
        return Ok(0);
    };
    let expected = first.len();
    for &(field, values) in &series[1..] {
        taseries_core::ensure_len(field, values, expected)?;
    }
    Ok(expected)
}

pub(crate) fn check_finite(indicator: &'static str, name: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(IndicatorError::InvalidParameter {
            indicator,
            reason: format!("{name} must be finite, got {value}"),
        });
    }
    Ok(())
}
