//! Single-stock view: indicators computed over warm-up history, then
//! trimmed to the requested window.

use serde::Serialize;

use crate::error::DataError;
use crate::indicators::{compute_deductions, compute_kd_default, compute_ma};
use crate::models::candle::{CandleSeries, DailyRecord, Field, FieldSet};
use crate::models::indicators::{IndicatorFrame, IndicatorRow, MaDeduction};

/// Extra records fetched ahead of the window so MA20 and KD are settled.
pub const OVERVIEW_WARMUP: usize = 40;
/// Floor on records fetched so the MA60 deduction has history to work with.
pub const MIN_OVERVIEW_FETCH: usize = 100;
pub const OVERVIEW_MA_PERIODS: [usize; 3] = [5, 10, 20];

/// Records to request for a view of the latest `limit` sessions.
pub fn overview_fetch_limit(limit: usize) -> usize {
    limit.saturating_add(OVERVIEW_WARMUP).max(MIN_OVERVIEW_FETCH)
}

/// OHLCV plus turnover.
pub fn overview_fields() -> FieldSet {
    FieldSet::new([
        Field::Open,
        Field::High,
        Field::Low,
        Field::Close,
        Field::Volume,
        Field::Turnover,
    ])
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StockOverview {
    pub records: Vec<IndicatorRow>,
    /// `None` when the fetched history is too short for MA60.
    pub deductions: Option<Vec<MaDeduction>>,
}

/// MA5/10/20 and KD over every record, keeping the latest `limit` rows.
///
/// Deductions always use the full history. `limit` of 0 keeps no rows.
pub fn build_overview(records: &[DailyRecord], limit: usize) -> Result<StockOverview, DataError> {
    let series = CandleSeries::from_records(records)?;
    let frame = compute_ma(&IndicatorFrame::new(series.clone()), &OVERVIEW_MA_PERIODS)?;
    let frame = compute_kd_default(&frame)?;

    let skip = records.len().saturating_sub(limit);
    let rows = frame
        .rows()
        .into_iter()
        .zip(records)
        .skip(skip)
        .map(|(row, record)| row.with_turnover(record.turnover))
        .collect();

    Ok(StockOverview {
        records: rows,
        deductions: compute_deductions(&series),
    })
}
