//! Shared data models spanning the engine layers.

pub mod candle;
pub mod indicators;
pub mod scan;
pub mod score;
pub mod strategy;

pub use candle::{Candle, CandleSeries, DailyRecord, Field, FieldSet};
pub use indicators::{DeductionTrend, IndicatorFrame, IndicatorRow, MaDeduction};
pub use scan::{FailureKind, ScanFailure, ScanResultSet};
pub use score::{Dimension, DimensionScore, DimensionScores, ScoreDetail, ScoreResult};
pub use strategy::{
    BreakoutParams, MaAlignmentParams, OversoldReversalParams, StrategyKind, StrategyMatch,
    StrategyParams, VolumeSurgeParams,
};
