//! Slow stochastic oscillator (%K / %D)

use crate::common::math;
use crate::error::DataError;
use crate::indicators::columns;
use crate::indicators::momentum::kd::rsv_series;
use crate::models::indicators::IndicatorFrame;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StochasticPeriods {
    pub k_period: usize,
    pub k_smoothing: usize,
    pub d_period: usize,
}

impl Default for StochasticPeriods {
    fn default() -> Self {
        Self {
            k_period: 9,
            k_smoothing: 3,
            d_period: 3,
        }
    }
}

/// Append `stoch_k` (smoothed raw %K) and `stoch_d` (SMA of `stoch_k`).
pub fn compute_stochastic(
    frame: &IndicatorFrame,
    periods: StochasticPeriods,
) -> Result<IndicatorFrame, DataError> {
    for p in [periods.k_period, periods.k_smoothing, periods.d_period] {
        if p == 0 {
            return Err(DataError::InvalidPeriod(p));
        }
    }

    let raw_k = rsv_series(frame.series(), periods.k_period);
    let stoch_k = math::rolling_mean_opt(&raw_k, periods.k_smoothing);
    let stoch_d = math::rolling_mean_opt(&stoch_k, periods.d_period);

    let mut out = frame.clone();
    out.set_column(columns::STOCH_K, stoch_k);
    out.set_column(columns::STOCH_D, stoch_d);
    Ok(out)
}
