//! Taiwanese equities technical-analysis core: candle normalization,
//! indicators, screening strategies, watchlist scanning and a composite
//! buy-signal score.

pub mod common;
pub mod config;
pub mod error;
pub mod indicators;
pub mod logging;
pub mod models;
pub mod scoring;
pub mod screener;
pub mod services;
pub mod strategies;

pub use error::{DataError, FetchError, ScreenerError};
