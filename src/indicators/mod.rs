//! Indicator engine: derives named columns from a candle series.

pub mod momentum;
pub mod overview;
pub mod trend;

pub use momentum::*;
pub use overview::{build_overview, overview_fetch_limit, StockOverview};
pub use trend::*;

/// Column names written by the engine.
pub mod columns {
    pub const K: &str = "k_val";
    pub const D: &str = "d_val";
    pub const STOCH_K: &str = "stoch_k";
    pub const STOCH_D: &str = "stoch_d";
    pub const DIF: &str = "dif";
    pub const DEA: &str = "dea";
    pub const MACD_HIST: &str = "macd_hist";

    pub fn ma(period: usize) -> String {
        format!("ma{}", period)
    }

    pub fn rsi(period: usize) -> String {
        format!("rsi{}", period)
    }
}
