//! Unit tests for the oversold reversal strategy

use twstock::error::DataError;
use twstock::models::candle::CandleSeries;
use twstock::models::strategy::OversoldReversalParams;
use twstock::strategies::check_oversold_reversal;

use crate::fixtures::{assert_close, candle, series};

fn plunge(open: f64, high: f64, low: f64, close: f64) -> CandleSeries {
    let mut candles: Vec<_> = (0..19).map(|i| candle(i, 100.0, 101.0, 99.0, 100.0, 1000)).collect();
    candles.push(candle(19, open, high, low, close, 3000));
    series(candles)
}

#[test]
fn test_long_lower_wick_below_average_matches() {
    let params = OversoldReversalParams::default();
    let found = check_oversold_reversal(&plunge(86.0, 88.0, 80.0, 87.0), &params)
        .unwrap()
        .unwrap();
    let ma = (19.0 * 100.0 + 87.0) / 20.0;
    assert_close(found.metric("ma").unwrap(), ma);
    assert_close(found.metric("bias").unwrap(), (87.0 - ma) / ma);
    assert_close(found.metric("shadow_ratio").unwrap(), 0.75);
}

#[test]
fn test_short_wick_does_not_match() {
    let params = OversoldReversalParams::default();
    let result = check_oversold_reversal(&plunge(86.0, 88.0, 85.5, 87.0), &params);
    assert!(result.unwrap().is_none());
}

#[test]
fn test_shallow_bias_does_not_match() {
    let params = OversoldReversalParams::default();
    let result = check_oversold_reversal(&plunge(96.0, 98.0, 90.0, 97.0), &params);
    assert!(result.unwrap().is_none());
}

#[test]
fn test_zero_range_day_does_not_match() {
    let params = OversoldReversalParams::default();
    let result = check_oversold_reversal(&plunge(85.0, 85.0, 85.0, 85.0), &params);
    assert!(result.unwrap().is_none());
}

#[test]
fn test_short_series_is_an_error() {
    let s = series((0..19).map(|i| candle(i, 100.0, 101.0, 99.0, 100.0, 1000)).collect());
    let err = check_oversold_reversal(&s, &OversoldReversalParams::default()).unwrap_err();
    assert!(matches!(
        err,
        DataError::InsufficientHistory {
            required: 20,
            available: 19,
            ..
        }
    ));
}

#[test]
fn test_thresholds_are_inclusive() {
    // MA2 of 110 and 90 is 100, so the bias is exactly -10%; shadow 3 of a 10-point range
    let s = series(vec![
        candle(0, 110.0, 111.0, 109.0, 110.0, 1000),
        candle(1, 110.0, 111.0, 109.0, 110.0, 1000),
        candle(2, 92.0, 97.0, 87.0, 90.0, 3000),
    ]);
    let params = OversoldReversalParams {
        ma_period: 2,
        ..OversoldReversalParams::default()
    };
    let found = check_oversold_reversal(&s, &params).unwrap().unwrap();
    assert_eq!(found.metric("bias"), Some(params.bias_threshold));
    assert_eq!(found.metric("shadow_ratio"), Some(params.shadow_ratio));
}
