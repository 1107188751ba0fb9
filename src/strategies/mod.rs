//! Rule-based screening strategies.
//!
//! Each strategy looks backward from the latest candle only and returns
//! `Ok(None)` when its conditions fail. Errors are reserved for series too
//! short for the requested windows and for windows that cannot be sized.

pub mod breakout;
pub mod ma_alignment;
pub mod oversold_reversal;
pub mod registry;
pub mod volume_surge;

pub use breakout::check_consolidation_breakout;
pub use ma_alignment::check_bullish_ma_alignment;
pub use oversold_reversal::check_oversold_reversal;
pub use registry::{recommended_fetch_limit, Evaluation, StrategyEntry, StrategyRegistry};
pub use volume_surge::check_volume_surge_bullish;

use crate::models::candle::CandleSeries;
use crate::models::strategy::StrategyParams;

/// Run whichever strategy `params` belongs to.
pub fn evaluate(series: &CandleSeries, params: &StrategyParams) -> Evaluation {
    match params {
        StrategyParams::ConsolidationBreakout(p) => check_consolidation_breakout(series, p),
        StrategyParams::BullishMaAlignment(p) => check_bullish_ma_alignment(series, p),
        StrategyParams::VolumeSurgeBullish(p) => check_volume_surge_bullish(series, p),
        StrategyParams::OversoldReversal(p) => check_oversold_reversal(series, p),
    }
}
