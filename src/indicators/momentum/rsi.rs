//! RSI (Relative Strength Index) indicator
//!
//! RSI = 100 - (100 / (1 + RS))
//! RS = Average Gain / Average Loss
//!
//! Averages use Wilder smoothing seeded with the simple mean of the first
//! `period` changes.

use crate::error::DataError;
use crate::indicators::columns;
use crate::models::indicators::IndicatorFrame;

pub const DEFAULT_RSI_PERIOD: usize = 14;

/// RSI values aligned with `closes`; the first defined value is at index `period`.
pub fn rsi_series(closes: &[f64], period: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; closes.len()];
    if period == 0 || closes.len() <= period {
        return out;
    }

    let mut gains = Vec::with_capacity(closes.len() - 1);
    let mut losses = Vec::with_capacity(closes.len() - 1);
    for pair in closes.windows(2) {
        let change = pair[1] - pair[0];
        gains.push(change.max(0.0));
        losses.push((-change).max(0.0));
    }

    let mut avg_gain: f64 = gains[..period].iter().sum::<f64>() / period as f64;
    let mut avg_loss: f64 = losses[..period].iter().sum::<f64>() / period as f64;
    out[period] = Some(rsi_value(avg_gain, avg_loss));

    let n = period as f64;
    for i in period..gains.len() {
        avg_gain = (avg_gain * (n - 1.0) + gains[i]) / n;
        avg_loss = (avg_loss * (n - 1.0) + losses[i]) / n;
        // gains[i] is the change into closes[i + 1]
        out[i + 1] = Some(rsi_value(avg_gain, avg_loss));
    }
    out
}

fn rsi_value(avg_gain: f64, avg_loss: f64) -> f64 {
    if avg_loss == 0.0 {
        if avg_gain == 0.0 {
            return 50.0;
        }
        return 100.0;
    }
    let rs = avg_gain / avg_loss;
    100.0 - (100.0 / (1.0 + rs))
}

/// Append an `rsi{period}` column.
pub fn compute_rsi(frame: &IndicatorFrame, period: usize) -> Result<IndicatorFrame, DataError> {
    if period == 0 {
        return Err(DataError::InvalidPeriod(period));
    }
    let mut out = frame.clone();
    out.set_column(columns::rsi(period), rsi_series(&frame.series().closes(), period));
    Ok(out)
}

/// RSI with the default period (14)
pub fn compute_rsi_default(frame: &IndicatorFrame) -> Result<IndicatorFrame, DataError> {
    compute_rsi(frame, DEFAULT_RSI_PERIOD)
}
