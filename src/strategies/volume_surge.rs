//! Volume surge with a large bullish real body.

use crate::common::math;
use crate::error::DataError;
use crate::models::candle::CandleSeries;
use crate::models::strategy::{StrategyKind, StrategyMatch, VolumeSurgeParams};

/// Closes, today included, the latest close must top when `require_high_close` is set.
pub const HIGH_CLOSE_WINDOW: usize = 5;

/// Average volume is taken over the `lookback_days` sessions before the latest.
pub fn check_volume_surge_bullish(
    series: &CandleSeries,
    params: &VolumeSurgeParams,
) -> Result<Option<StrategyMatch>, DataError> {
    let lookback = params.lookback_days;
    if lookback == 0 {
        return Err(DataError::InvalidPeriod(lookback));
    }
    let required = lookback.checked_add(1).ok_or(DataError::InvalidPeriod(lookback))?;
    series.require(required, &format!("{}-day average volume", lookback))?;

    let candles = series.candles();
    let latest = series.last();
    let prior = &candles[candles.len() - 1 - lookback..candles.len() - 1];

    let volumes: Vec<f64> = prior.iter().map(|c| c.volume as f64).collect();
    let avg_volume = math::mean(&volumes).unwrap_or(0.0);
    if avg_volume <= 0.0 || latest.open <= 0.0 {
        return Ok(None);
    }

    let volume_ratio = latest.volume as f64 / avg_volume;
    let body_pct = (latest.close - latest.open) / latest.open;
    if volume_ratio < params.volume_ratio || body_pct < params.body_pct {
        return Ok(None);
    }

    if params.require_high_close {
        let recent = &candles[candles.len().saturating_sub(HIGH_CLOSE_WINDOW)..];
        let high_close = recent.iter().map(|c| c.close).fold(f64::NEG_INFINITY, f64::max);
        if latest.close < high_close {
            return Ok(None);
        }
    }

    Ok(Some(
        StrategyMatch::new(StrategyKind::VolumeSurgeBullish, latest.date, latest.close)
            .with_metric("avg_volume", avg_volume)
            .with_metric("volume_ratio", volume_ratio)
            .with_metric("body_pct", body_pct),
    ))
}
