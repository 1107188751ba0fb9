//! Trend indicators: simple moving averages and their deduction prices

pub mod deduction;
pub mod ma;

pub use deduction::*;
pub use ma::*;
