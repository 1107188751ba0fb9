//! Screening strategy data models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::DataError;

/// Available screening strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    ConsolidationBreakout,
    BullishMaAlignment,
    VolumeSurgeBullish,
    OversoldReversal,
}

impl StrategyKind {
    pub const ALL: [StrategyKind; 4] = [
        StrategyKind::ConsolidationBreakout,
        StrategyKind::BullishMaAlignment,
        StrategyKind::VolumeSurgeBullish,
        StrategyKind::OversoldReversal,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            StrategyKind::ConsolidationBreakout => "consolidation_breakout",
            StrategyKind::BullishMaAlignment => "bullish_ma_alignment",
            StrategyKind::VolumeSurgeBullish => "volume_surge_bullish",
            StrategyKind::OversoldReversal => "oversold_reversal",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StrategyKind::ConsolidationBreakout => "Consolidation Breakout",
            StrategyKind::BullishMaAlignment => "Bullish MA Alignment",
            StrategyKind::VolumeSurgeBullish => "Volume Surge Bullish",
            StrategyKind::OversoldReversal => "Oversold Reversal",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for StrategyKind {
    type Err = DataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('-', "_");
        StrategyKind::ALL
            .into_iter()
            .find(|k| k.id() == wanted)
            .ok_or_else(|| DataError::InvalidValue {
                field: "strategy".to_string(),
                value: s.to_string(),
            })
    }
}

/// Consolidation breakout parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BreakoutParams {
    /// Days forming the consolidation box, excluding the latest day.
    pub consolidation_days: usize,
    /// Maximum (high - low) / low of the box.
    pub amplitude_threshold: f64,
    pub volume_ratio: f64,
    pub check_volume: bool,
}

impl Default for BreakoutParams {
    fn default() -> Self {
        Self {
            consolidation_days: 21,
            amplitude_threshold: 0.10,
            volume_ratio: 1.5,
            check_volume: true,
        }
    }
}

/// Bullish moving-average alignment parameters
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaAlignmentParams {
    /// Also require today's MA20 to be above yesterday's.
    pub require_rising_ma20: bool,
}

/// Volume surge parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VolumeSurgeParams {
    pub volume_ratio: f64,
    /// Minimum (close - open) / open.
    pub body_pct: f64,
    /// Sessions before the latest one used for the average volume.
    pub lookback_days: usize,
    /// Also require the latest close to be the highest of the last 5 closes,
    /// today included.
    pub require_high_close: bool,
}

impl Default for VolumeSurgeParams {
    fn default() -> Self {
        Self {
            volume_ratio: 2.0,
            body_pct: 0.03,
            lookback_days: 5,
            require_high_close: false,
        }
    }
}

/// Oversold reversal parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OversoldReversalParams {
    /// Maximum (close - MA) / MA, negative.
    pub bias_threshold: f64,
    /// Minimum lower shadow as a fraction of the day's range.
    pub shadow_ratio: f64,
    pub ma_period: usize,
}

impl Default for OversoldReversalParams {
    fn default() -> Self {
        Self {
            bias_threshold: -0.10,
            shadow_ratio: 0.30,
            ma_period: 20,
        }
    }
}

/// Parameters tagged with the strategy they belong to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "strategy", rename_all = "snake_case")]
pub enum StrategyParams {
    ConsolidationBreakout(BreakoutParams),
    BullishMaAlignment(MaAlignmentParams),
    VolumeSurgeBullish(VolumeSurgeParams),
    OversoldReversal(OversoldReversalParams),
}

impl StrategyParams {
    pub fn defaults_for(kind: StrategyKind) -> Self {
        match kind {
            StrategyKind::ConsolidationBreakout => {
                StrategyParams::ConsolidationBreakout(BreakoutParams::default())
            }
            StrategyKind::BullishMaAlignment => {
                StrategyParams::BullishMaAlignment(MaAlignmentParams::default())
            }
            StrategyKind::VolumeSurgeBullish => {
                StrategyParams::VolumeSurgeBullish(VolumeSurgeParams::default())
            }
            StrategyKind::OversoldReversal => {
                StrategyParams::OversoldReversal(OversoldReversalParams::default())
            }
        }
    }

    pub fn kind(&self) -> StrategyKind {
        match self {
            StrategyParams::ConsolidationBreakout(_) => StrategyKind::ConsolidationBreakout,
            StrategyParams::BullishMaAlignment(_) => StrategyKind::BullishMaAlignment,
            StrategyParams::VolumeSurgeBullish(_) => StrategyKind::VolumeSurgeBullish,
            StrategyParams::OversoldReversal(_) => StrategyKind::OversoldReversal,
        }
    }

    /// Parse a JSON object of overrides onto the defaults of `kind`.
    ///
    /// `{"volume_ratio": 3.0}` leaves every other parameter at its default.
    pub fn from_overrides(
        kind: StrategyKind,
        overrides: &serde_json::Value,
    ) -> Result<Self, DataError> {
        let invalid = |e: serde_json::Error| DataError::InvalidValue {
            field: format!("{} params", kind.id()),
            value: e.to_string(),
        };
        let value = overrides.clone();
        Ok(match kind {
            StrategyKind::ConsolidationBreakout => {
                let params = serde_json::from_value(value).map_err(invalid)?;
                StrategyParams::ConsolidationBreakout(params)
            }
            StrategyKind::BullishMaAlignment => {
                StrategyParams::BullishMaAlignment(serde_json::from_value(value).map_err(invalid)?)
            }
            StrategyKind::VolumeSurgeBullish => {
                StrategyParams::VolumeSurgeBullish(serde_json::from_value(value).map_err(invalid)?)
            }
            StrategyKind::OversoldReversal => {
                StrategyParams::OversoldReversal(serde_json::from_value(value).map_err(invalid)?)
            }
        })
    }
}

/// Result of a strategy that matched on the latest day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyMatch {
    pub strategy: StrategyKind,
    pub label: String,
    pub date: NaiveDate,
    pub close: f64,
    /// Metrics that triggered the match, e.g. `volume_ratio`.
    pub metrics: BTreeMap<String, f64>,
}

impl StrategyMatch {
    pub fn new(strategy: StrategyKind, date: NaiveDate, close: f64) -> Self {
        Self {
            strategy,
            label: strategy.label().to_string(),
            date,
            close,
            metrics: BTreeMap::new(),
        }
    }

    pub fn with_metric(mut self, name: &str, value: f64) -> Self {
        self.metrics.insert(name.to_string(), value);
        self
    }

    pub fn metric(&self, name: &str) -> Option<f64> {
        self.metrics.get(name).copied()
    }
}
