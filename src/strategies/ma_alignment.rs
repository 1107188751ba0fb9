//! Bullish MA alignment: close > MA5 > MA10 > MA20 on the latest day.

use crate::error::DataError;
use crate::indicators::columns;
use crate::indicators::trend::ma::compute_ma;
use crate::models::candle::CandleSeries;
use crate::models::indicators::IndicatorFrame;
use crate::models::strategy::{MaAlignmentParams, StrategyKind, StrategyMatch};

const ALIGNMENT_PERIODS: [usize; 3] = [5, 10, 20];

pub fn check_bullish_ma_alignment(
    series: &CandleSeries,
    params: &MaAlignmentParams,
) -> Result<Option<StrategyMatch>, DataError> {
    let required = if params.require_rising_ma20 { 21 } else { 20 };
    series.require(required, "20-day moving average")?;

    let frame = compute_ma(&IndicatorFrame::new(series.clone()), &ALIGNMENT_PERIODS)?;
    let latest = series.last();
    let ma = |p: usize| {
        frame
            .latest(&columns::ma(p))
            .ok_or_else(|| DataError::insufficient(p, series.len(), format!("MA{}", p)))
    };
    let (ma5, ma10, ma20) = (ma(5)?, ma(10)?, ma(20)?);

    if !(latest.close > ma5 && ma5 > ma10 && ma10 > ma20) {
        return Ok(None);
    }

    let mut found = StrategyMatch::new(StrategyKind::BullishMaAlignment, latest.date, latest.close)
        .with_metric("ma5", ma5)
        .with_metric("ma10", ma10)
        .with_metric("ma20", ma20);

    if params.require_rising_ma20 {
        let Some(prev_ma20) = frame.value_at(&columns::ma(20), series.len() - 2) else {
            return Err(DataError::insufficient(21, series.len(), "rising MA20"));
        };
        if ma20 <= prev_ma20 {
            return Ok(None);
        }
        found = found.with_metric("prev_ma20", prev_ma20);
    }

    Ok(Some(found))
}
