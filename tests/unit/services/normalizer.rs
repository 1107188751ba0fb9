//! Unit tests for the candle normalizer

use serde_json::json;
use twstock::error::DataError;
use twstock::models::candle::FieldSet;
use twstock::services::normalizer::normalize;

use crate::fixtures::day;

fn rows() -> serde_json::Value {
    json!([
        {"date": "2024-01-03", "open": 101, "high": 103, "low": 100, "close": 102, "volume": 1500},
        {"date": "2024-01-02", "open": "100.5", "high": 102, "low": 99, "close": 101,
         "volume": "1,200"}
    ])
}

#[test]
fn test_both_shapes_normalize_identically() {
    let fields = FieldSet::default();
    let bare = normalize(&rows(), &fields).unwrap();
    let wrapped = normalize(&json!({"symbol": "2330", "data": rows()}), &fields).unwrap();
    assert_eq!(bare, wrapped);

    assert_eq!(bare.len(), 2);
    assert_eq!(bare[0].date, day(1));
    assert_eq!(bare[0].open, Some(100.5));
    assert_eq!(bare[0].volume, Some(1200));
    assert_eq!(bare[1].close, Some(102.0));
}

#[test]
fn test_only_requested_fields_are_read() {
    let records = normalize(&rows(), &FieldSet::parse("close").unwrap()).unwrap();
    assert_eq!(records[0].close, Some(101.0));
    assert_eq!(records[0].open, None);
    assert_eq!(records[0].volume, None);
}

#[test]
fn test_empty_data_is_not_an_error() {
    assert!(normalize(&json!({"data": []}), &FieldSet::default()).unwrap().is_empty());
    assert!(normalize(&json!([]), &FieldSet::default()).unwrap().is_empty());
}

#[test]
fn test_unrecognized_shapes() {
    let fields = FieldSet::default();
    let shapes = [
        json!({"candles": []}),
        json!("oops"),
        json!({"data": {"close": 1}}),
        json!([1, 2]),
    ];
    for raw in shapes {
        assert!(matches!(normalize(&raw, &fields), Err(DataError::UnrecognizedShape(_))));
    }
}

#[test]
fn test_duplicate_dates_are_rejected() {
    let raw = json!([
        {"date": "2024-01-02", "close": 1},
        {"date": "2024-01-02", "close": 2}
    ]);
    assert_eq!(normalize(&raw, &FieldSet::default()), Err(DataError::DuplicateDate(day(1))));
}

#[test]
fn test_missing_date_is_reported() {
    let raw = json!([{"close": 1}]);
    assert!(matches!(
        normalize(&raw, &FieldSet::default()),
        Err(DataError::MissingField { index: 0, .. })
    ));
}

#[test]
fn test_alternate_date_key() {
    let raw = json!([{"tradeDate": "2024-01-05", "close": 9.5}]);
    let records = normalize(&raw, &FieldSet::default()).unwrap();
    assert_eq!(records[0].date, day(4));
}

#[test]
fn test_non_finite_numbers_are_rejected() {
    let fields = FieldSet::default();
    for bad in ["NaN", "inf", "-infinity"] {
        let raw = json!([
            {"date": "2024-01-02", "open": 1, "high": 1, "low": 1, "close": bad, "volume": 1}
        ]);
        assert_eq!(
            normalize(&raw, &fields),
            Err(DataError::InvalidValue {
                field: "close".to_string(),
                value: format!("\"{}\"", bad),
            })
        );
    }
}
