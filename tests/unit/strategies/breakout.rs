//! Unit tests for the consolidation breakout strategy

use twstock::error::DataError;
use twstock::models::candle::CandleSeries;
use twstock::models::strategy::{BreakoutParams, StrategyKind};
use twstock::strategies::check_consolidation_breakout;

use crate::fixtures::{assert_close, candle, linear, series};

/// 29 tight, slowly rising days, then a breakout close on `final_volume`.
fn breakout_series(final_close: f64, final_volume: u64) -> CandleSeries {
    let mut candles: Vec<_> = (0..29)
        .map(|i| {
            let close = 100.0 + 0.2 * i as f64;
            candle(i, close - 0.1, close + 0.5, close - 0.5, close, 1000)
        })
        .collect();
    candles.push(candle(29, 106.0, final_close + 0.2, 105.8, final_close, final_volume));
    series(candles)
}

fn params() -> BreakoutParams {
    BreakoutParams {
        consolidation_days: 20,
        amplitude_threshold: 0.15,
        volume_ratio: 1.5,
        check_volume: true,
    }
}

#[test]
fn test_breakout_on_double_volume_matches() {
    let found = check_consolidation_breakout(&breakout_series(108.0, 2000), &params())
        .unwrap()
        .expect("breakout should match");
    assert_eq!(found.strategy, StrategyKind::ConsolidationBreakout);
    assert_eq!(found.close, 108.0);
    assert_close(found.metric("volume_ratio").unwrap(), 2.0);
    assert_close(found.metric("box_high").unwrap(), 105.6 + 0.5);
    assert!(found.metric("amplitude").unwrap() <= 0.15);
}

#[test]
fn test_close_inside_box_does_not_match() {
    let result = check_consolidation_breakout(&breakout_series(106.0, 2000), &params()).unwrap();
    assert!(result.is_none());
}

#[test]
fn test_thin_volume_does_not_match() {
    let result = check_consolidation_breakout(&breakout_series(108.0, 1200), &params()).unwrap();
    assert!(result.is_none());

    let no_volume_check = BreakoutParams {
        check_volume: false,
        ..params()
    };
    let found = check_consolidation_breakout(&breakout_series(108.0, 1200), &no_volume_check)
        .unwrap()
        .unwrap();
    assert!(found.metric("volume_ratio").is_none());
}

#[test]
fn test_wide_box_does_not_match() {
    let tight = BreakoutParams {
        amplitude_threshold: 0.01,
        ..params()
    };
    assert!(check_consolidation_breakout(&breakout_series(108.0, 2000), &tight)
        .unwrap()
        .is_none());
}

#[test]
fn test_short_series_is_an_error() {
    let err = check_consolidation_breakout(&linear(20, 100.0, 1.0), &params()).unwrap_err();
    assert!(matches!(
        err,
        DataError::InsufficientHistory {
            required: 21,
            available: 20,
            ..
        }
    ));
}

/// Twenty days boxed in [100, 110], then a final session.
fn exact_box(final_close: f64, final_volume: u64) -> CandleSeries {
    let mut candles: Vec<_> = (0..20)
        .map(|i| candle(i, 105.0, 110.0, 100.0, 105.0, 1000))
        .collect();
    candles.push(candle(20, 108.0, final_close + 0.5, 107.5, final_close, final_volume));
    series(candles)
}

#[test]
fn test_thresholds_are_inclusive() {
    let at_limits = BreakoutParams {
        amplitude_threshold: 0.1,
        ..params()
    };
    let found = check_consolidation_breakout(&exact_box(111.0, 1500), &at_limits)
        .unwrap()
        .expect("amplitude and volume ratio at their thresholds should match");
    assert_eq!(found.metric("amplitude"), Some(0.1));
    assert_eq!(found.metric("volume_ratio"), Some(1.5));

    // closing level with the box high is not a breakout
    let level = check_consolidation_breakout(&exact_box(110.0, 1500), &at_limits).unwrap();
    assert!(level.is_none());
}

#[test]
fn test_oversized_box_is_rejected() {
    let huge = BreakoutParams {
        consolidation_days: usize::MAX,
        ..params()
    };
    let err = check_consolidation_breakout(&breakout_series(108.0, 2000), &huge).unwrap_err();
    assert_eq!(err, DataError::InvalidPeriod(usize::MAX));
}
