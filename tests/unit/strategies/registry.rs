//! Unit tests for the strategy registry

use twstock::error::DataError;
use twstock::models::strategy::{
    BreakoutParams, OversoldReversalParams, StrategyKind, StrategyParams, VolumeSurgeParams,
};
use twstock::strategies::{evaluate, recommended_fetch_limit, StrategyRegistry};

use crate::fixtures::linear;

#[test]
fn test_every_strategy_is_registered() {
    let registry = StrategyRegistry::new();
    assert_eq!(registry.entries().len(), 4);
    for kind in StrategyKind::ALL {
        let entry = registry.get(kind).unwrap();
        assert_eq!(entry.defaults.kind(), kind);
        assert_eq!(entry.label, kind.label());
        assert!(!entry.no_match_hint.is_empty());
    }
}

#[test]
fn test_find_by_id() {
    let registry = StrategyRegistry::new();
    assert_eq!(
        registry.find("bullish-ma-alignment").unwrap().kind,
        StrategyKind::BullishMaAlignment
    );
    assert!(registry.find("death_cross").is_err());
}

#[test]
fn test_entry_evaluates_with_defaults() {
    let registry = StrategyRegistry::new();
    let series = linear(40, 100.0, 1.0);
    for entry in registry.entries() {
        let result = (entry.evaluate)(&series, &entry.defaults);
        assert!(result.is_ok(), "{} failed: {:?}", entry.kind, result);
        assert_eq!(result.unwrap(), evaluate(&series, &entry.defaults).unwrap());
    }
}

#[test]
fn test_entry_rejects_foreign_params() {
    let registry = StrategyRegistry::new();
    let entry = registry.get(StrategyKind::OversoldReversal).unwrap();
    let foreign = StrategyParams::defaults_for(StrategyKind::VolumeSurgeBullish);
    let err = (entry.evaluate)(&linear(40, 100.0, 1.0), &foreign).unwrap_err();
    assert!(matches!(err, DataError::InvalidValue { .. }));
}

#[test]
fn test_recommended_fetch_limits() {
    let limit = |kind| recommended_fetch_limit(&StrategyParams::defaults_for(kind));
    assert_eq!(limit(StrategyKind::ConsolidationBreakout), 31);
    assert_eq!(limit(StrategyKind::BullishMaAlignment), 30);
    assert_eq!(limit(StrategyKind::VolumeSurgeBullish), 15);
    assert_eq!(limit(StrategyKind::OversoldReversal), 30);
}

#[test]
fn test_fetch_limit_saturates_on_huge_windows() {
    let breakout = StrategyParams::ConsolidationBreakout(BreakoutParams {
        consolidation_days: usize::MAX,
        ..BreakoutParams::default()
    });
    let surge = StrategyParams::VolumeSurgeBullish(VolumeSurgeParams {
        lookback_days: usize::MAX - 3,
        ..VolumeSurgeParams::default()
    });
    let reversal = StrategyParams::OversoldReversal(OversoldReversalParams {
        ma_period: usize::MAX,
        ..OversoldReversalParams::default()
    });
    for params in [breakout, surge, reversal] {
        assert_eq!(recommended_fetch_limit(&params), usize::MAX);
    }
}

#[test]
fn test_evaluate_rejects_overflowing_window() {
    let params = StrategyParams::ConsolidationBreakout(BreakoutParams {
        consolidation_days: usize::MAX,
        ..BreakoutParams::default()
    });
    let err = evaluate(&linear(40, 100.0, 1.0), &params).unwrap_err();
    assert_eq!(err, DataError::InvalidPeriod(usize::MAX));
}
