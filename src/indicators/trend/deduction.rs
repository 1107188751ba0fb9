//! Moving-average deduction prices
//!
//! The deduction price of an N-day average is the close that drops out of
//! the window next session. Comparing it with today's close hints at where
//! the average is heading.

use crate::indicators::columns;
use crate::indicators::trend::ma::compute_ma;
use crate::models::candle::CandleSeries;
use crate::models::indicators::{DeductionTrend, IndicatorFrame, MaDeduction};

pub const DEDUCTION_PERIODS: [usize; 4] = [5, 10, 20, 60];
pub const MIN_DEDUCTION_HISTORY: usize = 45;
/// Within this percentage the average is treated as turning.
const TURNING_BAND_PCT: f64 = 1.0;

/// Deduction table for the 5/10/20/60-day averages.
///
/// Needs at least 45 sessions; periods longer than the series are skipped.
pub fn compute_deductions(series: &CandleSeries) -> Option<Vec<MaDeduction>> {
    if series.len() < MIN_DEDUCTION_HISTORY {
        return None;
    }

    let periods: Vec<usize> = DEDUCTION_PERIODS
        .iter()
        .copied()
        .filter(|&p| p <= series.len())
        .collect();
    let frame = compute_ma(&IndicatorFrame::new(series.clone()), &periods).ok()?;
    let candles = series.candles();
    let current_close = series.last().close;

    let rows: Vec<MaDeduction> = periods
        .iter()
        .filter_map(|&period| {
            let ma_value = frame.latest(&columns::ma(period))?;
            let deduction_price = candles[candles.len() - period].close;
            if deduction_price == 0.0 {
                return None;
            }
            let diff_pct = (current_close - deduction_price) / deduction_price * 100.0;
            Some(MaDeduction {
                period,
                ma_value,
                current_close,
                deduction_price,
                diff_pct,
                trend: classify(diff_pct),
            })
        })
        .collect();

    if rows.is_empty() {
        None
    } else {
        Some(rows)
    }
}

fn classify(diff_pct: f64) -> DeductionTrend {
    if diff_pct.abs() <= TURNING_BAND_PCT {
        DeductionTrend::Turning
    } else if diff_pct > 0.0 {
        DeductionTrend::Rising
    } else {
        DeductionTrend::Falling
    }
}
