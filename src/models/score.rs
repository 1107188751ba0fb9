//! Composite buy-signal score data models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Scoring dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Trend,
    Momentum,
    Oscillator,
    Volume,
}

impl Dimension {
    /// Maximum points the dimension can contribute.
    pub fn max_points(&self) -> u32 {
        match self {
            Dimension::Trend => 30,
            Dimension::Momentum => 30,
            Dimension::Oscillator => 20,
            Dimension::Volume => 20,
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Dimension::Trend => "trend",
            Dimension::Momentum => "momentum",
            Dimension::Oscillator => "oscillator",
            Dimension::Volume => "volume",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionScore {
    pub score: u32,
    pub max: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionScores {
    pub trend: DimensionScore,
    pub momentum: DimensionScore,
    pub oscillator: DimensionScore,
    pub volume: DimensionScore,
}

/// How a single rule contributed to its dimension
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreDetail {
    pub dimension: Dimension,
    pub rule: String,
    /// Human-readable inputs, e.g. `close 101.20 > ma10 99.80`.
    pub value: String,
    pub passed: bool,
    pub points: u32,
    pub max_points: u32,
}

/// Per-symbol score snapshot computed from the latest series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub date: NaiveDate,
    pub close: f64,
    pub total: u32,
    pub dimensions: DimensionScores,
    pub details: Vec<ScoreDetail>,
}

impl ScoreResult {
    pub fn dimension(&self, dimension: Dimension) -> DimensionScore {
        match dimension {
            Dimension::Trend => self.dimensions.trend,
            Dimension::Momentum => self.dimensions.momentum,
            Dimension::Oscillator => self.dimensions.oscillator,
            Dimension::Volume => self.dimensions.volume,
        }
    }

    pub fn detail(&self, rule: &str) -> Option<&ScoreDetail> {
        self.details.iter().find(|d| d.rule == rule)
    }
}
