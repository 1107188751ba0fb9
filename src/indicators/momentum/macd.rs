//! MACD (Moving Average Convergence Divergence) indicator
//!
//! DIF = EMA(fast) - EMA(slow)
//! DEA = EMA(signal) of DIF
//! Histogram = DIF - DEA

use crate::common::math;
use crate::error::DataError;
use crate::indicators::columns;
use crate::models::indicators::IndicatorFrame;

pub const DEFAULT_MACD_PERIODS: (usize, usize, usize) = (12, 26, 9);

/// Append `dif`, `dea` and `macd_hist` columns.
///
/// `dif` is first defined at index `slow - 1`, `dea` and `macd_hist` at
/// `slow + signal - 2`.
pub fn compute_macd(
    frame: &IndicatorFrame,
    fast_period: usize,
    slow_period: usize,
    signal_period: usize,
) -> Result<IndicatorFrame, DataError> {
    for p in [fast_period, slow_period, signal_period] {
        if p == 0 {
            return Err(DataError::InvalidPeriod(p));
        }
    }

    let closes: Vec<Option<f64>> = frame.series().closes().into_iter().map(Some).collect();
    let fast = math::ema(&closes, fast_period);
    let slow = math::ema(&closes, slow_period);

    let dif: Vec<Option<f64>> = fast
        .iter()
        .zip(slow.iter())
        .map(|(f, s)| Some((*f)? - (*s)?))
        .collect();
    let dea = math::ema(&dif, signal_period);
    let hist: Vec<Option<f64>> = dif
        .iter()
        .zip(dea.iter())
        .map(|(d, s)| Some((*d)? - (*s)?))
        .collect();

    let mut out = frame.clone();
    out.set_column(columns::DIF, dif);
    out.set_column(columns::DEA, dea);
    out.set_column(columns::MACD_HIST, hist);
    Ok(out)
}

/// MACD with default periods (12, 26, 9)
pub fn compute_macd_default(frame: &IndicatorFrame) -> Result<IndicatorFrame, DataError> {
    let (fast, slow, signal) = DEFAULT_MACD_PERIODS;
    compute_macd(frame, fast, slow, signal)
}
