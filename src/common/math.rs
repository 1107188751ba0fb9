//! Rolling-window helpers shared by the indicator engine.
//!
//! Every function returns a series aligned 1:1 with its input; positions
//! without enough history are `None`.

/// Simple moving average over the trailing `period` values (inclusive).
pub fn rolling_mean(values: &[f64], period: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; values.len()];
    if period == 0 || values.len() < period {
        return out;
    }

    let mut sum: f64 = values[..period].iter().sum();
    out[period - 1] = Some(sum / period as f64);
    for i in period..values.len() {
        sum += values[i] - values[i - period];
        out[i] = Some(sum / period as f64);
    }
    out
}

/// Lowest value over the trailing `period` values.
pub fn rolling_min(values: &[f64], period: usize) -> Vec<Option<f64>> {
    rolling_fold(values, period, f64::INFINITY, f64::min)
}

/// Highest value over the trailing `period` values.
pub fn rolling_max(values: &[f64], period: usize) -> Vec<Option<f64>> {
    rolling_fold(values, period, f64::NEG_INFINITY, f64::max)
}

fn rolling_fold(
    values: &[f64],
    period: usize,
    init: f64,
    f: fn(f64, f64) -> f64,
) -> Vec<Option<f64>> {
    let mut out = vec![None; values.len()];
    if period == 0 {
        return out;
    }
    for i in (period.saturating_sub(1))..values.len() {
        let window = &values[i + 1 - period..=i];
        out[i] = Some(window.iter().copied().fold(init, f));
    }
    out
}

/// Simple moving average over a series that may contain leading gaps.
///
/// Only windows made entirely of defined values produce an output.
pub fn rolling_mean_opt(values: &[Option<f64>], period: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; values.len()];
    if period == 0 {
        return out;
    }
    for i in (period.saturating_sub(1))..values.len() {
        let window = &values[i + 1 - period..=i];
        if window.iter().all(Option::is_some) {
            let sum: f64 = window.iter().flatten().sum();
            out[i] = Some(sum / period as f64);
        }
    }
    out
}

/// Exponential moving average seeded with the SMA of the first `period`
/// defined values, α = 2 / (period + 1).
///
/// Leading `None`s are skipped; the seed lands on the `period`-th defined
/// value.
pub fn ema(values: &[Option<f64>], period: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; values.len()];
    if period == 0 {
        return out;
    }

    let mut seed_sum = 0.0;
    let mut seen = 0usize;
    let mut previous: Option<f64> = None;

    for (i, value) in values.iter().enumerate() {
        let Some(v) = *value else { continue };
        match previous {
            Some(prev) => {
                let next = ema_from_previous(v, prev, period);
                out[i] = Some(next);
                previous = Some(next);
            }
            None => {
                seed_sum += v;
                seen += 1;
                if seen == period {
                    let seed = seed_sum / period as f64;
                    out[i] = Some(seed);
                    previous = Some(seed);
                }
            }
        }
    }
    out
}

/// One EMA step from the previous value.
pub fn ema_from_previous(value: f64, previous: f64, period: usize) -> f64 {
    let multiplier = 2.0 / (period as f64 + 1.0);
    (value - previous) * multiplier + previous
}

/// Arithmetic mean of a slice, `None` when empty.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}
