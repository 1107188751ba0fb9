//! Consolidation breakout: a tight trading box followed by a close above
//! its high, optionally on expanded volume.

use tracing::debug;

use crate::common::math;
use crate::error::DataError;
use crate::models::candle::CandleSeries;
use crate::models::strategy::{BreakoutParams, StrategyKind, StrategyMatch};

/// The box is the `consolidation_days` sessions before the latest one.
pub fn check_consolidation_breakout(
    series: &CandleSeries,
    params: &BreakoutParams,
) -> Result<Option<StrategyMatch>, DataError> {
    let days = params.consolidation_days;
    if days == 0 {
        return Err(DataError::InvalidPeriod(days));
    }
    let required = days.checked_add(1).ok_or(DataError::InvalidPeriod(days))?;
    series.require(required, &format!("{}-day consolidation box", days))?;

    let candles = series.candles();
    let latest = series.last();
    let window = &candles[candles.len() - 1 - days..candles.len() - 1];

    let box_high = window.iter().map(|c| c.high).fold(f64::NEG_INFINITY, f64::max);
    let box_low = window.iter().map(|c| c.low).fold(f64::INFINITY, f64::min);
    if box_low <= 0.0 {
        return Ok(None);
    }

    let amplitude = (box_high - box_low) / box_low;
    if amplitude > params.amplitude_threshold {
        debug!(amplitude, threshold = params.amplitude_threshold, "Box too wide");
        return Ok(None);
    }
    if latest.close <= box_high {
        return Ok(None);
    }

    let kind = StrategyKind::ConsolidationBreakout;
    let mut found = StrategyMatch::new(kind, latest.date, latest.close)
        .with_metric("amplitude", amplitude)
        .with_metric("box_high", box_high)
        .with_metric("box_low", box_low)
        .with_metric("breakout_pct", (latest.close - box_high) / box_high);

    if params.check_volume {
        let volumes: Vec<f64> = window.iter().map(|c| c.volume as f64).collect();
        let avg_volume = math::mean(&volumes).unwrap_or(0.0);
        if avg_volume <= 0.0 {
            return Ok(None);
        }
        let ratio = latest.volume as f64 / avg_volume;
        if ratio < params.volume_ratio {
            return Ok(None);
        }
        found = found
            .with_metric("avg_volume", avg_volume)
            .with_metric("volume_ratio", ratio);
    }

    Ok(Some(found))
}
