//! Trailing-window and cumulative primitives shared by the indicators.
//!
//! A strict window of `period` ending at index `i` is defined once
//! `i >= period - 1` and every value inside it is finite. Anything else is NaN.

/// Apply `f` to each full trailing window, NaN elsewhere.
fn rolling_with(series: &[f64], period: usize, f: impl Fn(&[f64]) -> f64) -> Vec<f64> {
    let mut out = vec![f64::NAN; series.len()];
    if period == 0 || period > series.len() {
        return out;
    }
    for (i, window) in series.windows(period).enumerate() {
        if window.iter().all(|v| v.is_finite()) {
            out[i + period - 1] = f(window);
        }
    }
    out
}

pub fn rolling_sum(series: &[f64], period: usize) -> Vec<f64> {
    rolling_with(series, period, |w| w.iter().sum())
}

pub fn rolling_mean(series: &[f64], period: usize) -> Vec<f64> {
    rolling_with(series, period, |w| w.iter().sum::<f64>() / w.len() as f64)
}

/// Sample standard deviation (`n - 1` denominator). A single-value window is NaN.
pub fn rolling_std(series: &[f64], period: usize) -> Vec<f64> {
    if period < 2 {
        return vec![f64::NAN; series.len()];
    }
    rolling_with(series, period, |w| {
        let n = w.len() as f64;
        let mean = w.iter().sum::<f64>() / n;
        let ss: f64 = w.iter().map(|v| (v - mean) * (v - mean)).sum();
        (ss / (n - 1.0)).sqrt()
    })
}

pub fn rolling_min(series: &[f64], period: usize) -> Vec<f64> {
    rolling_with(series, period, |w| w.iter().copied().fold(f64::INFINITY, f64::min))
}

pub fn rolling_max(series: &[f64], period: usize) -> Vec<f64> {
    rolling_with(series, period, |w| {
        w.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    })
}

/// Mean absolute deviation around the window mean, with relaxed minimum periods.
///
/// Unlike the strict windows this is defined from index 0: early indices use
/// however many finite points are available. Only an all-NaN window is NaN.
pub fn rolling_mean_abs_dev(series: &[f64], period: usize) -> Vec<f64> {
    let mut out = vec![f64::NAN; series.len()];
    if period == 0 {
        return out;
    }
    for i in 0..series.len() {
        let start = (i + 1).saturating_sub(period);
        let finite: Vec<f64> = series[start..=i]
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .collect();
        if finite.is_empty() {
            continue;
        }
        let n = finite.len() as f64;
        let mean = finite.iter().sum::<f64>() / n;
        out[i] = finite.iter().map(|v| (v - mean).abs()).sum::<f64>() / n;
    }
    out
}

/// Running total that skips NaN: those positions stay NaN and do not reset the sum.
pub fn cumulative_sum(series: &[f64]) -> Vec<f64> {
    let mut total = 0.0;
    series
        .iter()
        .map(|&v| {
            if v.is_nan() {
                f64::NAN
            } else {
                total += v;
                total
            }
        })
        .collect()
}

/// `series[i - periods]` at `i`, NaN for the first `periods` entries.
pub fn lagged(series: &[f64], periods: usize) -> Vec<f64> {
    (0..series.len())
        .map(|i| if i >= periods { series[i - periods] } else { f64::NAN })
        .collect()
}
