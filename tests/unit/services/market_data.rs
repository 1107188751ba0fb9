//! Unit tests for candle query ranges

use chrono::NaiveDate;
use twstock::services::market_data::CandleQuery;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_short_limits_use_minimum_lookback() {
    let today = date(2024, 6, 30);
    let (from, to) = CandleQuery::new("2330", 35).resolve_range(today);
    assert_eq!(to, today);
    assert_eq!((to - from).num_days(), 90);
}

#[test]
fn test_long_limits_scale_lookback() {
    let today = date(2024, 6, 30);
    let (from, _) = CandleQuery::new("2330", 120).resolve_range(today);
    assert_eq!((today - from).num_days(), 210);
}

#[test]
fn test_explicit_range_is_kept() {
    let query =
        CandleQuery::new("2330", 10).with_range(Some(date(2024, 1, 1)), Some(date(2024, 2, 1)));
    assert_eq!(query.resolve_range(date(2024, 6, 30)), (date(2024, 1, 1), date(2024, 2, 1)));
}

#[test]
fn test_end_only_range_counts_back_from_end() {
    let query = CandleQuery::new("2330", 35).with_range(None, Some(date(2024, 3, 31)));
    let (from, _) = query.resolve_range(date(2024, 6, 30));
    assert_eq!(from, date(2024, 1, 1));
}
