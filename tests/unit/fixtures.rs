//! Candle builders shared by the unit tests
#![allow(dead_code)]

use chrono::{Duration, NaiveDate};
use twstock::models::candle::{Candle, CandleSeries};

pub fn day(offset: usize) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap() + Duration::days(offset as i64)
}

pub fn candle(offset: usize, open: f64, high: f64, low: f64, close: f64, volume: u64) -> Candle {
    Candle::new(day(offset), open, high, low, close, volume)
}

pub fn series(candles: Vec<Candle>) -> CandleSeries {
    CandleSeries::new(candles).unwrap()
}

/// One candle per close: open = close, high/low one point either side.
pub fn from_closes(closes: &[f64]) -> CandleSeries {
    series(
        closes
            .iter()
            .enumerate()
            .map(|(i, &c)| candle(i, c, c + 1.0, c - 1.0, c, 1000))
            .collect(),
    )
}

pub fn linear(count: usize, base: f64, step: f64) -> CandleSeries {
    let closes: Vec<f64> = (0..count).map(|i| base + step * i as f64).collect();
    from_closes(&closes)
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
