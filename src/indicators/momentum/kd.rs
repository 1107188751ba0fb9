//! KD oscillator (Taiwan-market stochastic)
//!
//! RSV = 100 × (close − lowest low) / (highest high − lowest low)
//! K = 2/3 × K_prev + 1/3 × RSV
//! D = 2/3 × D_prev + 1/3 × K
//!
//! Both recurrences start from 50 and run in date order over the whole
//! series.

use crate::common::math;
use crate::error::DataError;
use crate::indicators::columns;
use crate::models::candle::CandleSeries;
use crate::models::indicators::IndicatorFrame;

pub const DEFAULT_KD_PERIOD: usize = 9;
const KD_SEED: f64 = 50.0;

/// Raw stochastic value per day; 50 on a flat range.
pub fn rsv_series(series: &CandleSeries, period: usize) -> Vec<Option<f64>> {
    let closes = series.closes();
    let lows = math::rolling_min(&series.lows(), period);
    let highs = math::rolling_max(&series.highs(), period);

    closes
        .iter()
        .zip(lows.iter().zip(highs.iter()))
        .map(|(&close, (low, high))| {
            let (low, high) = (low.as_ref()?, high.as_ref()?);
            let range = high - low;
            if range == 0.0 {
                Some(50.0)
            } else {
                Some(100.0 * (close - low) / range)
            }
        })
        .collect()
}

/// Append `k_val` and `d_val` columns.
///
/// The first `period - 1` entries are `None`.
pub fn compute_kd(frame: &IndicatorFrame, period: usize) -> Result<IndicatorFrame, DataError> {
    if period == 0 {
        return Err(DataError::InvalidPeriod(period));
    }

    let rsv = rsv_series(frame.series(), period);
    let mut k_values = vec![None; rsv.len()];
    let mut d_values = vec![None; rsv.len()];
    let mut k_prev = KD_SEED;
    let mut d_prev = KD_SEED;

    for (i, value) in rsv.iter().enumerate() {
        let Some(rsv) = *value else { continue };
        let k = (2.0 / 3.0) * k_prev + (1.0 / 3.0) * rsv;
        let d = (2.0 / 3.0) * d_prev + (1.0 / 3.0) * k;
        k_values[i] = Some(k);
        d_values[i] = Some(d);
        k_prev = k;
        d_prev = d;
    }

    let mut out = frame.clone();
    out.set_column(columns::K, k_values);
    out.set_column(columns::D, d_values);
    Ok(out)
}

/// KD with the conventional 9-day window.
pub fn compute_kd_default(frame: &IndicatorFrame) -> Result<IndicatorFrame, DataError> {
    compute_kd(frame, DEFAULT_KD_PERIOD)
}
