//! Strategy registry: id → evaluation function and default parameters.

use crate::error::DataError;
use crate::models::candle::CandleSeries;
use crate::models::strategy::{StrategyKind, StrategyMatch, StrategyParams};
use crate::strategies::{breakout, ma_alignment, oversold_reversal, volume_surge};

pub type Evaluation = Result<Option<StrategyMatch>, DataError>;
pub type EvaluateFn = fn(&CandleSeries, &StrategyParams) -> Evaluation;

/// Everything needed to run one strategy without knowing its concrete type.
#[derive(Clone)]
pub struct StrategyEntry {
    pub kind: StrategyKind,
    pub label: &'static str,
    pub defaults: StrategyParams,
    pub evaluate: EvaluateFn,
    /// Suggestion shown when a scan finds nothing.
    pub no_match_hint: &'static str,
}

pub struct StrategyRegistry {
    entries: Vec<StrategyEntry>,
}

impl StrategyRegistry {
    pub fn new() -> Self {
        let entries = StrategyKind::ALL.into_iter().map(entry_for).collect();
        Self { entries }
    }

    pub fn get(&self, kind: StrategyKind) -> Option<&StrategyEntry> {
        self.entries.iter().find(|e| e.kind == kind)
    }

    /// Look up by id, e.g. `"volume_surge_bullish"`.
    pub fn find(&self, id: &str) -> Result<&StrategyEntry, DataError> {
        let kind: StrategyKind = id.parse()?;
        self.get(kind).ok_or_else(|| DataError::InvalidValue {
            field: "strategy".to_string(),
            value: id.to_string(),
        })
    }

    pub fn entries(&self) -> &[StrategyEntry] {
        &self.entries
    }
}

impl Default for StrategyRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn entry_for(kind: StrategyKind) -> StrategyEntry {
    let (evaluate, no_match_hint) = match kind {
        StrategyKind::ConsolidationBreakout => (
            eval_breakout as EvaluateFn,
            "Try a wider amplitude threshold, fewer box days, or disable the volume check.",
        ),
        StrategyKind::BullishMaAlignment => (
            eval_ma_alignment as EvaluateFn,
            "Check the watchlist holds up-trending stocks, or scan again once the averages align.",
        ),
        StrategyKind::VolumeSurgeBullish => (
            eval_volume_surge as EvaluateFn,
            "Try a lower volume ratio or a smaller minimum body percentage.",
        ),
        StrategyKind::OversoldReversal => (
            eval_oversold_reversal as EvaluateFn,
            "Try a looser bias threshold (for example -8%) or a lower shadow ratio.",
        ),
    };

    StrategyEntry {
        kind,
        label: kind.label(),
        defaults: StrategyParams::defaults_for(kind),
        evaluate,
        no_match_hint,
    }
}

fn eval_breakout(series: &CandleSeries, params: &StrategyParams) -> Evaluation {
    match params {
        StrategyParams::ConsolidationBreakout(p) => {
            breakout::check_consolidation_breakout(series, p)
        }
        other => Err(mismatch(StrategyKind::ConsolidationBreakout, other)),
    }
}

fn eval_ma_alignment(series: &CandleSeries, params: &StrategyParams) -> Evaluation {
    match params {
        StrategyParams::BullishMaAlignment(p) => {
            ma_alignment::check_bullish_ma_alignment(series, p)
        }
        other => Err(mismatch(StrategyKind::BullishMaAlignment, other)),
    }
}

fn eval_volume_surge(series: &CandleSeries, params: &StrategyParams) -> Evaluation {
    match params {
        StrategyParams::VolumeSurgeBullish(p) => {
            volume_surge::check_volume_surge_bullish(series, p)
        }
        other => Err(mismatch(StrategyKind::VolumeSurgeBullish, other)),
    }
}

fn eval_oversold_reversal(series: &CandleSeries, params: &StrategyParams) -> Evaluation {
    match params {
        StrategyParams::OversoldReversal(p) => {
            oversold_reversal::check_oversold_reversal(series, p)
        }
        other => Err(mismatch(StrategyKind::OversoldReversal, other)),
    }
}

fn mismatch(expected: StrategyKind, got: &StrategyParams) -> DataError {
    DataError::InvalidValue {
        field: format!("{} params", expected.id()),
        value: format!("parameters for {}", got.kind().id()),
    }
}

/// Records to fetch per symbol so every window the strategy reads is filled.
pub fn recommended_fetch_limit(params: &StrategyParams) -> usize {
    match params {
        StrategyParams::ConsolidationBreakout(p) => p.consolidation_days.saturating_add(10),
        StrategyParams::BullishMaAlignment(_) => 30,
        StrategyParams::VolumeSurgeBullish(p) => p.lookback_days.saturating_add(10).max(15),
        StrategyParams::OversoldReversal(p) => p.ma_period.saturating_add(10).max(30),
    }
}
