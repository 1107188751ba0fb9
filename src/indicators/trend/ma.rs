//! SMA (Simple Moving Average) columns

use crate::common::math;
use crate::error::DataError;
use crate::indicators::columns;
use crate::models::indicators::IndicatorFrame;

/// Append one `ma{p}` column per requested period.
///
/// Each value is the mean close of the trailing `p` days including the
/// current one; the first `p - 1` entries are `None`. Recomputing an
/// existing period replaces its column with identical values.
pub fn compute_ma(frame: &IndicatorFrame, periods: &[usize]) -> Result<IndicatorFrame, DataError> {
    if let Some(&bad) = periods.iter().find(|&&p| p == 0) {
        return Err(DataError::InvalidPeriod(bad));
    }

    let closes = frame.series().closes();
    let mut out = frame.clone();
    for &period in periods {
        out.set_column(columns::ma(period), math::rolling_mean(&closes, period));
    }
    Ok(out)
}

/// Latest value of the `period`-day average, `None` when history is short.
pub fn latest_ma(frame: &IndicatorFrame, period: usize) -> Option<f64> {
    frame.latest(&columns::ma(period))
}
