/// Errors raised while assembling or checking aligned series.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SeriesError {
    #[error("Length mismatch: {field} has {actual} values, expected {expected}")]
    LengthMismatch {
        field: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error("Value of {field} at index {index} cannot be represented as f64")]
    NonRepresentable { field: &'static str, index: usize },
}

/// Fail unless `series` has exactly `expected` values.
pub fn ensure_len(field: &'static str, series: &[f64], expected: usize) -> Result<(), SeriesError> {
    if series.len() != expected {
        return Err(SeriesError::LengthMismatch {
            field,
            expected,
            actual: series.len(),
        });
    }
    Ok(())
}
