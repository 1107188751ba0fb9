//! Oversold reversal: deep negative bias plus a long lower shadow.

use crate::error::DataError;
use crate::indicators::columns;
use crate::indicators::trend::ma::compute_ma;
use crate::models::candle::CandleSeries;
use crate::models::indicators::IndicatorFrame;
use crate::models::strategy::{OversoldReversalParams, StrategyKind, StrategyMatch};

pub fn check_oversold_reversal(
    series: &CandleSeries,
    params: &OversoldReversalParams,
) -> Result<Option<StrategyMatch>, DataError> {
    let period = params.ma_period;
    if period == 0 {
        return Err(DataError::InvalidPeriod(period));
    }
    series.require(period, &format!("{}-day moving average", period))?;

    let frame = compute_ma(&IndicatorFrame::new(series.clone()), &[period])?;
    let ma = frame
        .latest(&columns::ma(period))
        .ok_or_else(|| DataError::insufficient(period, series.len(), format!("MA{}", period)))?;
    let latest = series.last();
    if ma <= 0.0 {
        return Ok(None);
    }

    let bias = (latest.close - ma) / ma;
    if bias > params.bias_threshold {
        return Ok(None);
    }

    let range = latest.range();
    if range <= 0.0 {
        return Ok(None);
    }
    let shadow_ratio = latest.lower_shadow() / range;
    if shadow_ratio < params.shadow_ratio {
        return Ok(None);
    }

    Ok(Some(
        StrategyMatch::new(StrategyKind::OversoldReversal, latest.date, latest.close)
            .with_metric("ma", ma)
            .with_metric("bias", bias)
            .with_metric("shadow_ratio", shadow_ratio),
    ))
}
