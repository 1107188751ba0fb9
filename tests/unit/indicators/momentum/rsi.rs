//! Unit tests for RSI indicator

use twstock::indicators::columns;
use twstock::indicators::momentum::{compute_rsi_default, rsi_series};
use twstock::models::indicators::IndicatorFrame;

use crate::fixtures::{assert_close, linear};

#[test]
fn test_rsi_insufficient_data() {
    assert!(rsi_series(&[1.0; 14], 14).iter().all(Option::is_none));
}

#[test]
fn test_rsi_first_value_at_period() {
    let frame = compute_rsi_default(&IndicatorFrame::new(linear(20, 100.0, 1.0))).unwrap();
    let rsi = frame.column(&columns::rsi(14)).unwrap();
    assert_eq!(rsi[13], None);
    assert_eq!(rsi[14], Some(100.0));
}

#[test]
fn test_rsi_wilder_smoothing() {
    let rsi = rsi_series(&[1.0, 2.0, 1.0, 2.0], 2);
    assert_eq!(rsi[1], None);
    assert_close(rsi[2].unwrap(), 50.0);
    // avg gain 0.75, avg loss 0.25
    assert_close(rsi[3].unwrap(), 75.0);
}

#[test]
fn test_rsi_flat_and_falling() {
    assert_eq!(rsi_series(&[5.0; 16], 14)[15], Some(50.0));
    let falling: Vec<f64> = (0..16).map(|i| 100.0 - i as f64).collect();
    assert_eq!(rsi_series(&falling, 14)[15], Some(0.0));
}
