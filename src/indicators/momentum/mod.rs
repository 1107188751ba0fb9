//! Momentum indicators: KD, RSI, stochastic, MACD

pub mod kd;
pub mod macd;
pub mod rsi;
pub mod stochastic;

pub use kd::*;
pub use macd::*;
pub use rsi::*;
pub use stochastic::*;
