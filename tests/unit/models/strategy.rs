//! Unit tests for strategy parameter models

use serde_json::json;
use twstock::models::strategy::{StrategyKind, StrategyParams, VolumeSurgeParams};

#[test]
fn test_kind_parses_ids_and_dashes() {
    assert_eq!(
        "oversold_reversal".parse::<StrategyKind>().unwrap(),
        StrategyKind::OversoldReversal
    );
    assert_eq!(
        "Volume-Surge-Bullish".parse::<StrategyKind>().unwrap(),
        StrategyKind::VolumeSurgeBullish
    );
    assert!("golden_cross".parse::<StrategyKind>().is_err());
}

#[test]
fn test_overrides_keep_other_defaults() {
    let overrides = json!({"volume_ratio": 3.0});
    let params =
        StrategyParams::from_overrides(StrategyKind::VolumeSurgeBullish, &overrides).unwrap();
    match params {
        StrategyParams::VolumeSurgeBullish(p) => {
            assert_eq!(p.volume_ratio, 3.0);
            assert_eq!(p.body_pct, VolumeSurgeParams::default().body_pct);
            assert_eq!(p.lookback_days, 5);
        }
        other => panic!("unexpected params {other:?}"),
    }
}

#[test]
fn test_overrides_reject_bad_types() {
    let result = StrategyParams::from_overrides(
        StrategyKind::ConsolidationBreakout,
        &json!({"consolidation_days": "twenty"}),
    );
    assert!(result.is_err());
}

#[test]
fn test_params_serialize_with_tag() {
    let params = StrategyParams::defaults_for(StrategyKind::OversoldReversal);
    let value = serde_json::to_value(params).unwrap();
    assert_eq!(value["strategy"], "oversold_reversal");
    assert_eq!(value["ma_period"], 20);
}
