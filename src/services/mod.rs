//! Market data access: source trait, normalizer, and the Fugle client.

pub mod fugle;
pub mod market_data;
pub mod normalizer;

pub use fugle::FugleClient;
pub use market_data::{fetch_records, fetch_series, CandleQuery, CandleSource};
pub use normalizer::normalize;
