//! Unit tests for rolling-window helpers

use twstock::common::math::{ema_from_previous, mean, rolling_mean, rolling_mean_opt};

#[test]
fn test_rolling_mean_longer_than_input() {
    assert_eq!(rolling_mean(&[1.0, 2.0], 3), vec![None, None]);
    assert_eq!(rolling_mean(&[1.0, 2.0], 0), vec![None, None]);
}

#[test]
fn test_rolling_mean_opt_requires_full_window() {
    let values = vec![None, Some(2.0), Some(4.0), Some(6.0)];
    assert_eq!(rolling_mean_opt(&values, 2), vec![None, None, Some(3.0), Some(5.0)]);
}

#[test]
fn test_ema_step() {
    // period 3 → α = 0.5
    assert_eq!(ema_from_previous(12.0, 10.0, 3), 11.0);
}

#[test]
fn test_mean() {
    assert_eq!(mean(&[]), None);
    assert_eq!(mean(&[2.0, 4.0]), Some(3.0));
}
